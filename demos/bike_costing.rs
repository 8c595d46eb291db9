//! 自行車生產計劃成本滾算示例（多製程）

use chrono::NaiveDate;
use cogm::{
    CostEdit, CostLine, CostingEngine, DefinitionKind, DepreciationLine, LaborLine, MaterialLine,
    UtilityLine,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== 自行車生產計劃成本滾算 ===\n");

    let mut engine = CostingEngine::new(DefinitionKind::ProductionPlan);
    engine.apply(CostEdit::SetName("自行車 BIKE-001".to_string()))?;
    engine.apply(CostEdit::SetDocDate(NaiveDate::from_ymd_opt(2025, 11, 1)))?;
    engine.set_estimated_goods_produced_qty(Decimal::from(100));
    engine.set_total_production_orders(Decimal::from(5));

    // 製程 1：車架焊接
    let welding = engine.definition().processes[0].id;
    engine.update_process_info(welding, "車架焊接", "鋼管裁切與焊接")?;

    engine.add_line(
        welding,
        CostLine::DirectMaterial(
            MaterialLine::new("鋼管")
                .with_qty(Decimal::from(10))
                .with_unit("kg")
                .with_price(Decimal::from(50_000)),
        ),
    )?;
    engine.add_line(
        welding,
        CostLine::DirectLabor(
            LaborLine::new("焊接工")
                .with_qty(Decimal::from(2))
                .with_rate_month(Decimal::from(4_000_000))
                .with_working_days_per_month(Decimal::from(25))
                .with_working_hours_per_day(Decimal::from(8))
                .with_order_completion_hours(Decimal::from(4)),
        ),
    )?;
    engine.add_line(
        welding,
        CostLine::Utilities(
            UtilityLine::new("電費")
                .with_qty(Decimal::from(200))
                .with_unit("kWh")
                .with_price(Decimal::from(1_500))
                .with_operating_days_per_month(Decimal::from(25))
                .with_operating_hours_per_day(Decimal::from(8))
                .with_order_completion_hours(Decimal::from(4)),
        ),
    )?;

    // 製程 2：整車組裝
    let assembly = engine.add_process("整車組裝", "零件組裝與品質檢驗");
    engine.add_line(
        assembly,
        CostLine::IndirectMaterial(
            MaterialLine::new("潤滑油")
                .with_qty(Decimal::from(2))
                .with_price(Decimal::from(12_000)),
        ),
    )?;
    engine.add_line(
        assembly,
        CostLine::IndirectLabor(
            LaborLine::new("領班")
                .with_qty(Decimal::from(1))
                .with_rate_month(Decimal::from(6_000_000))
                .with_working_days_per_month(Decimal::from(25))
                .with_working_hours_per_day(Decimal::from(8))
                .with_order_completion_hours(Decimal::from(2)),
        ),
    )?;
    engine.add_line(
        assembly,
        CostLine::Depreciation(
            DepreciationLine::new("組裝線")
                .with_qty(Decimal::from(1))
                .with_price(Decimal::from(96_000_000))
                .with_accumulated_depreciation(Decimal::from(10_000_000))
                .with_salvage_value(Decimal::from(2_000_000))
                .with_useful_life_years(Decimal::from(5))
                .with_operating_days_per_month(Decimal::from(20))
                .with_operating_hours_per_day(Decimal::from(8))
                .with_order_completion_hours(Decimal::from(4)),
        ),
    )?;

    for process in &engine.definition().processes {
        println!("製程「{}」:", process.name);
        println!("  直接材料: {}", process.totals.total_material);
        println!("  直接人工: {}", process.totals.total_labor);
        println!("  間接材料: {}", process.totals.total_indirect_material);
        println!("  間接人工: {}", process.totals.total_indirect_labor);
        println!("  設備折舊: {}", process.totals.total_depreciation);
        println!("  水電費用: {}", process.totals.total_utilities);
        println!("  其他費用: {}\n", process.totals.total_ofc);
    }

    let summary = engine.summary();
    println!("計劃彙總（{} 張訂單）:", engine.definition().total_production_orders);
    println!("  直接成本合計: {}", summary.total_direct_cost);
    println!("  製造費用合計: {}", summary.total_factory_overhead);
    println!("  COGM: {}", summary.total_cogm);
    println!("  單位製造成本: {}", summary.cogm_per_unit);

    // 顯式存檔：序列化目前快照
    let saved = serde_json::to_string_pretty(engine.definition())?;
    println!("\n持久化紀錄（節錄）: {} bytes", saved.len());

    Ok(())
}
