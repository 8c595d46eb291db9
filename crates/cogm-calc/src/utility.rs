//! 水電與其他製造費用計算（兩類別公式相同）

use cogm_core::UtilityLine;
use rust_decimal::Decimal;

/// 水電／其他費用明細行衍生值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityDerived {
    /// 每月費用合計
    pub total: Decimal,
    /// 每天費率
    pub rate_per_day: Decimal,
    /// 每小時費率
    pub rate_per_hour: Decimal,
    /// 估計訂單用量
    pub estimated_qty: Decimal,
    /// 估計訂單費用
    pub estimated_cost: Decimal,
}

impl UtilityDerived {
    /// 該明細行對類別小計的貢獻值
    pub fn contribution(&self) -> Decimal {
        self.estimated_cost
    }
}

/// 水電／其他費用計算器
pub struct UtilityCalculator;

impl UtilityCalculator {
    /// 計算水電／其他費用明細行衍生值
    ///
    /// `total = qty × price` 為每月費用；每天／每小時費率與估計用量
    /// 的除法均受分母保護，分母非正時取 0。貢獻值 =
    /// `rate_per_hour × order_completion_hours`。
    pub fn evaluate(line: &UtilityLine) -> UtilityDerived {
        let total = line.qty * line.price;

        let rate_per_day = if line.operating_days_per_month > Decimal::ZERO {
            total / line.operating_days_per_month
        } else {
            Decimal::ZERO
        };

        let rate_per_hour = if line.operating_hours_per_day > Decimal::ZERO {
            rate_per_day / line.operating_hours_per_day
        } else {
            Decimal::ZERO
        };

        let estimated_qty = if line.operating_days_per_month > Decimal::ZERO
            && line.operating_hours_per_day > Decimal::ZERO
        {
            line.qty / line.operating_days_per_month / line.operating_hours_per_day
                * line.order_completion_hours
        } else {
            Decimal::ZERO
        };

        let estimated_cost = rate_per_hour * line.order_completion_hours;

        UtilityDerived {
            total,
            rate_per_day,
            rate_per_hour,
            estimated_qty,
            estimated_cost,
        }
    }

    /// 就地更新衍生欄位，回傳貢獻值
    pub fn refresh(line: &mut UtilityLine) -> Decimal {
        let derived = Self::evaluate(line);
        line.total = derived.total;
        line.rate_per_day = derived.rate_per_day;
        line.rate_per_hour = derived.rate_per_hour;
        line.estimated_qty = derived.estimated_qty;
        line.estimated_cost = derived.estimated_cost;
        derived.contribution()
    }
}
