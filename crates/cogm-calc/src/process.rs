//! 製程層成本彙總

use cogm_core::{CostCategory, RoutingProcess};
use rust_decimal::Decimal;

use crate::depreciation::DepreciationCalculator;
use crate::labor::LaborCalculator;
use crate::material::MaterialCalculator;
use crate::utility::UtilityCalculator;

/// 製程成本彙總計算器
///
/// 類別小計 = 該類別所有明細行貢獻值之和；
/// 單一類別重算為 O(該類別行數)，不觸碰其他類別。
pub struct ProcessCalculator;

impl ProcessCalculator {
    /// 重算單一類別：更新該類別每一行的衍生欄位並重求小計
    pub fn recalculate_category(process: &mut RoutingProcess, category: CostCategory) {
        let total: Decimal = match category {
            CostCategory::DirectMaterial => process
                .lines
                .direct_material
                .iter_mut()
                .map(MaterialCalculator::refresh)
                .sum(),
            CostCategory::DirectLabor => process
                .lines
                .direct_labor
                .iter_mut()
                .map(LaborCalculator::refresh)
                .sum(),
            CostCategory::IndirectMaterial => process
                .lines
                .indirect_material
                .iter_mut()
                .map(MaterialCalculator::refresh)
                .sum(),
            CostCategory::IndirectLabor => process
                .lines
                .indirect_labor
                .iter_mut()
                .map(LaborCalculator::refresh)
                .sum(),
            CostCategory::Depreciation => process
                .lines
                .depreciation
                .iter_mut()
                .map(DepreciationCalculator::refresh)
                .sum(),
            CostCategory::Utilities => process
                .lines
                .utilities
                .iter_mut()
                .map(UtilityCalculator::refresh)
                .sum(),
            CostCategory::OtherOverhead => process
                .lines
                .other_overhead
                .iter_mut()
                .map(UtilityCalculator::refresh)
                .sum(),
        };

        process.totals.set(category, total);

        tracing::debug!(
            "重算類別小計: 製程 {} / {} = {}",
            process.name,
            category.as_str(),
            total
        );
    }

    /// 重算全部七個類別（載入紀錄或整批異動時使用）
    pub fn recalculate(process: &mut RoutingProcess) {
        for category in CostCategory::ALL {
            Self::recalculate_category(process, category);
        }
    }
}
