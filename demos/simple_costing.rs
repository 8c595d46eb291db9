//! 簡單成本滾算示例

use cogm::{CostCategory, CostLine, CostingEngine, DefinitionKind, LaborLine, MaterialLine};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 簡單成本滾算示例 ===\n");

    // 創建 BOM（預設帶一個空製程）
    let mut engine = CostingEngine::new(DefinitionKind::Bom);
    engine.set_estimated_goods_produced_qty(Decimal::from(100));

    let process_id = engine.definition().processes[0].id;
    engine.update_process_info(process_id, "車架焊接", "鋼管裁切與焊接")?;

    // 新增直接材料
    engine.add_line(
        process_id,
        CostLine::DirectMaterial(
            MaterialLine::new("鋼管")
                .with_coa("5101")
                .with_qty(Decimal::from(10))
                .with_unit("kg")
                .with_price(Decimal::from(50_000)),
        ),
    )?;

    // 新增直接人工
    let labor_id = engine.add_line(
        process_id,
        CostLine::DirectLabor(
            LaborLine::new("焊接工")
                .with_qty(Decimal::from(1))
                .with_rate_month(Decimal::from(4_000_000))
                .with_working_days_per_month(Decimal::from(25))
                .with_working_hours_per_day(Decimal::from(8))
                .with_order_completion_hours(Decimal::from(4)),
        ),
    )?;

    let process = &engine.definition().processes[0];
    println!("製程「{}」小計:", process.name);
    for category in CostCategory::ALL {
        println!("  - {}: {}", category.as_str(), process.totals.get(category));
    }

    // 編輯一個欄位，級聯重算
    engine.update_line(
        process_id,
        CostCategory::DirectLabor,
        labor_id,
        cogm::LineField::OrderCompletionHours(Decimal::from(8)),
    )?;

    let summary = engine.summary();
    println!("\n計劃彙總:");
    println!("  - 直接成本合計: {}", summary.total_direct_cost);
    println!("  - 製造費用合計: {}", summary.total_factory_overhead);
    println!("  - COGM: {}", summary.total_cogm);
    println!("  - 單位製造成本: {}", summary.cogm_per_unit);

    Ok(())
}
