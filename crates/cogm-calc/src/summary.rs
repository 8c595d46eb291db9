//! 計劃層成本彙總（COGM）

use cogm_core::{CogmSummary, ProductionDefinition};
use rust_decimal::Decimal;

/// 計劃層彙總計算器
///
/// 跨全部製程加總：製造費用、直接成本、COGM 與單位成本。
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 由各製程小計求計劃層彙總
    pub fn summarize(definition: &ProductionDefinition) -> CogmSummary {
        let mut total_factory_overhead = Decimal::ZERO;
        let mut total_direct_cost = Decimal::ZERO;

        for process in &definition.processes {
            total_factory_overhead += process.totals.overhead_subtotal();
            total_direct_cost += process.totals.direct_subtotal();
        }

        let total_cogm = total_factory_overhead + total_direct_cost;

        let effective_qty = definition.effective_output_qty();
        let cogm_per_unit = if effective_qty > Decimal::ZERO {
            total_cogm / effective_qty
        } else {
            Decimal::ZERO
        };

        CogmSummary {
            total_factory_overhead,
            total_direct_cost,
            total_cogm,
            cogm_per_unit,
        }
    }

    /// 就地更新定義的彙總欄位
    pub fn refresh(definition: &mut ProductionDefinition) {
        definition.summary = Self::summarize(definition);

        tracing::debug!(
            "重算計劃彙總: COGM = {}, 單位成本 = {}",
            definition.summary.total_cogm,
            definition.summary.cogm_per_unit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogm_core::{CostCategory, DefinitionKind, RoutingProcess};

    fn definition_with_totals() -> ProductionDefinition {
        // 直接建立小計驗證彙總公式（小計由 ProcessCalculator 測試覆蓋）
        let mut process_a = RoutingProcess::new("裁切");
        process_a.totals.set(CostCategory::DirectMaterial, Decimal::from(500_000));
        process_a.totals.set(CostCategory::DirectLabor, Decimal::from(60_000));
        process_a.totals.set(CostCategory::IndirectMaterial, Decimal::from(20_000));
        process_a.totals.set(CostCategory::Utilities, Decimal::from(6_000));

        let mut process_b = RoutingProcess::new("組裝");
        process_b.totals.set(CostCategory::DirectLabor, Decimal::from(0));
        process_b.totals.set(CostCategory::IndirectLabor, Decimal::from(9_000));
        process_b.totals.set(CostCategory::Depreciation, Decimal::from(35_000));

        let mut definition = ProductionDefinition::new(DefinitionKind::Bom)
            .with_estimated_goods_produced_qty(Decimal::from(100));
        definition.processes = vec![process_a, process_b];
        definition
    }

    #[test]
    fn test_summary_sums_across_processes() {
        let definition = definition_with_totals();
        let summary = SummaryCalculator::summarize(&definition);

        // 製造費用 = 20,000 + 6,000 + 9,000 + 35,000 = 70,000
        assert_eq!(summary.total_factory_overhead, Decimal::from(70_000));
        // 直接成本 = 500,000 + 60,000 = 560,000
        assert_eq!(summary.total_direct_cost, Decimal::from(560_000));
        // COGM = 630,000；單位成本 = 630,000 ÷ 100 = 6,300
        assert_eq!(summary.total_cogm, Decimal::from(630_000));
        assert_eq!(summary.cogm_per_unit, Decimal::from(6_300));
    }

    #[test]
    fn test_per_unit_guard_when_qty_zero() {
        let mut definition = definition_with_totals();
        definition.estimated_goods_produced_qty = Decimal::ZERO;

        let summary = SummaryCalculator::summarize(&definition);
        assert_eq!(summary.total_cogm, Decimal::from(630_000));
        assert_eq!(summary.cogm_per_unit, Decimal::ZERO);
    }

    #[test]
    fn test_production_plan_multiplies_orders() {
        let mut definition = definition_with_totals();
        definition.kind = DefinitionKind::ProductionPlan;
        definition.total_production_orders = Decimal::from(5);

        // 有效產量 = 100 × 5 = 500；單位成本 = 630,000 ÷ 500 = 1,260
        let summary = SummaryCalculator::summarize(&definition);
        assert_eq!(summary.cogm_per_unit, Decimal::from(1_260));
    }

    #[test]
    fn test_work_in_process_ignores_orders() {
        let mut definition = definition_with_totals();
        definition.kind = DefinitionKind::WorkInProcess;
        definition.total_production_orders = Decimal::from(5);

        let summary = SummaryCalculator::summarize(&definition);
        assert_eq!(summary.cogm_per_unit, Decimal::from(6_300));
    }

    #[test]
    fn test_no_processes_yields_zero_summary() {
        let mut definition = definition_with_totals();
        definition.processes.clear();

        let summary = SummaryCalculator::summarize(&definition);
        assert_eq!(summary, CogmSummary::default());
    }

    #[test]
    fn test_refresh_writes_summary() {
        let mut definition = definition_with_totals();
        SummaryCalculator::refresh(&mut definition);

        assert_eq!(definition.summary.total_cogm, Decimal::from(630_000));

        // 再次重算不得漂移
        let first = definition.summary.clone();
        SummaryCalculator::refresh(&mut definition);
        assert_eq!(definition.summary, first);
    }
}
