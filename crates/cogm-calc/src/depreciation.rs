//! 設備折舊成本計算

use cogm_core::DepreciationLine;
use rust_decimal::Decimal;

/// 折舊明細行衍生值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepreciationDerived {
    /// 帳面價值
    pub book_value: Decimal,
    /// 耐用期間總時數
    pub useful_life_total_hours: Decimal,
    /// 每小時折舊額
    pub depreciation_per_hour: Decimal,
    /// 小計
    pub total: Decimal,
}

impl DepreciationDerived {
    /// 該明細行對類別小計的貢獻值
    pub fn contribution(&self) -> Decimal {
        self.total
    }
}

/// 折舊成本計算器
pub struct DepreciationCalculator;

impl DepreciationCalculator {
    /// 計算折舊明細行衍生值
    ///
    /// `book_value = qty × price − 累計折舊`；
    /// 耐用期間總時數 = 每月運轉天數 × 每天運轉時數 × 12 × 耐用年數，
    /// 任一因子非正時取 0。運轉時間資料不完整時，小計直接取累計折舊
    /// （沿用既有系統行為，見 DESIGN.md）。
    pub fn evaluate(line: &DepreciationLine) -> DepreciationDerived {
        let book_value = line.qty * line.price - line.accumulated_depreciation;

        let useful_life_total_hours = if line.operating_days_per_month > Decimal::ZERO
            && line.operating_hours_per_day > Decimal::ZERO
            && line.useful_life_years > Decimal::ZERO
        {
            line.operating_days_per_month
                * line.operating_hours_per_day
                * Decimal::from(12)
                * line.useful_life_years
        } else {
            Decimal::ZERO
        };

        let depreciation_per_hour = if useful_life_total_hours > Decimal::ZERO {
            (book_value - line.salvage_value) / useful_life_total_hours
        } else {
            Decimal::ZERO
        };

        let total = if line.timing_complete() {
            depreciation_per_hour * line.order_completion_hours
        } else {
            line.accumulated_depreciation
        };

        DepreciationDerived {
            book_value,
            useful_life_total_hours,
            depreciation_per_hour,
            total,
        }
    }

    /// 就地更新衍生欄位，回傳貢獻值
    pub fn refresh(line: &mut DepreciationLine) -> Decimal {
        let derived = Self::evaluate(line);
        line.book_value = derived.book_value;
        line.useful_life_total_hours = derived.useful_life_total_hours;
        line.depreciation_per_hour = derived.depreciation_per_hour;
        line.total = derived.total;
        derived.contribution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn depreciation_line() -> DepreciationLine {
        // 沖壓機 1 台，取得成本 96,000,000，已折舊 10,000,000，殘值 2,000,000
        // 耐用 5 年，每月運轉 20 天 × 每天 8 小時
        DepreciationLine::new("沖壓機")
            .with_qty(Decimal::from(1))
            .with_price(Decimal::from(96_000_000))
            .with_accumulated_depreciation(Decimal::from(10_000_000))
            .with_salvage_value(Decimal::from(2_000_000))
            .with_useful_life_years(Decimal::from(5))
            .with_operating_days_per_month(Decimal::from(20))
            .with_operating_hours_per_day(Decimal::from(8))
            .with_order_completion_hours(Decimal::from(4))
    }

    #[test]
    fn test_full_operating_data() {
        let line = depreciation_line();
        let derived = DepreciationCalculator::evaluate(&line);

        // 帳面價值 = 96,000,000 − 10,000,000 = 86,000,000
        assert_eq!(derived.book_value, Decimal::from(86_000_000));
        // 總時數 = 20 × 8 × 12 × 5 = 9,600
        assert_eq!(derived.useful_life_total_hours, Decimal::from(9_600));
        // 每小時折舊 = (86,000,000 − 2,000,000) ÷ 9,600 = 8,750
        assert_eq!(derived.depreciation_per_hour, Decimal::from(8_750));
        // 小計 = 8,750 × 4 = 35,000
        assert_eq!(derived.total, Decimal::from(35_000));
    }

    #[rstest]
    #[case::no_operating_days(0, 8, 5)]
    #[case::no_operating_hours(20, 0, 5)]
    #[case::no_useful_life(20, 8, 0)]
    fn test_zero_denominator_kills_rate(
        #[case] days: i64,
        #[case] hours: i64,
        #[case] years: i64,
    ) {
        let mut line = depreciation_line();
        line.operating_days_per_month = Decimal::from(days);
        line.operating_hours_per_day = Decimal::from(hours);
        line.useful_life_years = Decimal::from(years);

        let derived = DepreciationCalculator::evaluate(&line);
        assert_eq!(derived.useful_life_total_hours, Decimal::ZERO);
        assert_eq!(derived.depreciation_per_hour, Decimal::ZERO);
    }

    #[test]
    fn test_fallback_uses_accumulated_depreciation() {
        // 運轉時間不完整：小計直接取累計折舊原值
        let mut line = depreciation_line();
        line.order_completion_hours = Decimal::ZERO;

        let derived = DepreciationCalculator::evaluate(&line);
        assert_eq!(derived.total, Decimal::from(10_000_000));
    }

    #[test]
    fn test_useful_life_but_no_completion_hours() {
        // 耐用時數照算，但缺完成訂單時數時仍走退回路徑
        let mut line = depreciation_line();
        line.order_completion_hours = Decimal::ZERO;

        let derived = DepreciationCalculator::evaluate(&line);
        assert_eq!(derived.useful_life_total_hours, Decimal::from(9_600));
        assert_eq!(derived.depreciation_per_hour, Decimal::from(8_750));
        assert_eq!(derived.total, line.accumulated_depreciation);
    }

    #[test]
    fn test_book_value_can_be_negative() {
        // 累計折舊大於取得成本：帳面價值為負，公式照常運算
        let mut line = depreciation_line();
        line.price = Decimal::from(5_000_000);

        let derived = DepreciationCalculator::evaluate(&line);
        assert_eq!(derived.book_value, Decimal::from(-5_000_000));
    }

    #[test]
    fn test_refresh_writes_all_derived_fields() {
        let mut line = depreciation_line();
        let contribution = DepreciationCalculator::refresh(&mut line);

        assert_eq!(contribution, Decimal::from(35_000));
        assert_eq!(line.book_value, Decimal::from(86_000_000));
        assert_eq!(line.useful_life_total_hours, Decimal::from(9_600));
        assert_eq!(line.depreciation_per_hour, Decimal::from(8_750));
        assert_eq!(line.total, Decimal::from(35_000));
    }
}
