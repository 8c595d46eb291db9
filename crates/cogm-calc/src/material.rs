//! 材料成本計算（直接材料／間接材料共用）

use cogm_core::MaterialLine;
use rust_decimal::Decimal;

/// 材料明細行衍生值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialDerived {
    /// 小計
    pub total: Decimal,
}

impl MaterialDerived {
    /// 該明細行對類別小計的貢獻值
    pub fn contribution(&self) -> Decimal {
        self.total
    }
}

/// 材料成本計算器
pub struct MaterialCalculator;

impl MaterialCalculator {
    /// 計算材料明細行衍生值
    ///
    /// `total = qty × price`
    pub fn evaluate(line: &MaterialLine) -> MaterialDerived {
        MaterialDerived {
            total: line.qty * line.price,
        }
    }

    /// 就地更新衍生欄位，回傳貢獻值
    pub fn refresh(line: &mut MaterialLine) -> Decimal {
        let derived = Self::evaluate(line);
        line.total = derived.total;
        derived.contribution()
    }
}
