//! 人工成本計算（直接人工／間接人工共用）

use cogm_core::LaborLine;
use rust_decimal::Decimal;

/// 人工明細行衍生值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaborDerived {
    /// 日薪資率
    pub rate_day: Decimal,
    /// 時薪資率
    pub rate_hour: Decimal,
    /// 完成訂單所需天數
    pub order_completion_days: Decimal,
    /// 小計
    pub total: Decimal,
}

impl LaborDerived {
    /// 該明細行對類別小計的貢獻值
    pub fn contribution(&self) -> Decimal {
        self.total
    }
}

/// 人工成本計算器
pub struct LaborCalculator;

impl LaborCalculator {
    /// 計算人工明細行衍生值
    ///
    /// 分母為 0 時，被保護的項直接取 0。
    /// 工時資料不完整時，月薪資率視為最終金額，小計退回 `qty × rate_month`
    /// （沿用既有系統行為，見 DESIGN.md）。
    pub fn evaluate(line: &LaborLine) -> LaborDerived {
        let rate_day = if line.working_days_per_month > Decimal::ZERO {
            line.rate_month / line.working_days_per_month
        } else {
            Decimal::ZERO
        };

        let rate_hour = if line.working_hours_per_day > Decimal::ZERO {
            rate_day / line.working_hours_per_day
        } else {
            Decimal::ZERO
        };

        let order_completion_days = if line.working_hours_per_day > Decimal::ZERO {
            line.order_completion_hours / line.working_hours_per_day
        } else {
            Decimal::ZERO
        };

        let total = if line.timing_complete() {
            line.qty * rate_hour * line.order_completion_hours
        } else {
            line.qty * line.rate_month
        };

        LaborDerived {
            rate_day,
            rate_hour,
            order_completion_days,
            total,
        }
    }

    /// 就地更新衍生欄位，回傳貢獻值
    pub fn refresh(line: &mut LaborLine) -> Decimal {
        let derived = Self::evaluate(line);
        line.rate_day = derived.rate_day;
        line.rate_hour = derived.rate_hour;
        line.order_completion_days = derived.order_completion_days;
        line.total = derived.total;
        derived.contribution()
    }
}
