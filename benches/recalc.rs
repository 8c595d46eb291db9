//! 全量重算基準測試

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cogm::{
    CostLine, CostingEngine, DefinitionKind, DepreciationLine, LaborLine, MaterialLine,
    ProductionDefinition, UtilityLine,
};
use rust_decimal::Decimal;

/// 建立 `processes` 個製程、每類別各 `lines_per_category` 行的定義
fn build_definition(processes: usize, lines_per_category: usize) -> ProductionDefinition {
    let mut engine = CostingEngine::new(DefinitionKind::ProductionPlan);
    engine.set_estimated_goods_produced_qty(Decimal::from(100));

    let first = engine.definition().processes[0].id;
    let mut process_ids = vec![first];
    for i in 1..processes {
        process_ids.push(engine.add_process(format!("製程 {i}"), ""));
    }

    for process_id in process_ids {
        for i in 0..lines_per_category {
            let qty = Decimal::from(i as i64 + 1);
            engine
                .add_line(
                    process_id,
                    CostLine::DirectMaterial(
                        MaterialLine::new("料").with_qty(qty).with_price(Decimal::from(50_000)),
                    ),
                )
                .unwrap();
            engine
                .add_line(
                    process_id,
                    CostLine::DirectLabor(
                        LaborLine::new("工")
                            .with_qty(qty)
                            .with_rate_month(Decimal::from(4_000_000))
                            .with_working_days_per_month(Decimal::from(25))
                            .with_working_hours_per_day(Decimal::from(8))
                            .with_order_completion_hours(Decimal::from(4)),
                    ),
                )
                .unwrap();
            engine
                .add_line(
                    process_id,
                    CostLine::Depreciation(
                        DepreciationLine::new("機")
                            .with_qty(qty)
                            .with_price(Decimal::from(96_000_000))
                            .with_accumulated_depreciation(Decimal::from(10_000_000))
                            .with_useful_life_years(Decimal::from(5))
                            .with_operating_days_per_month(Decimal::from(20))
                            .with_operating_hours_per_day(Decimal::from(8))
                            .with_order_completion_hours(Decimal::from(4)),
                    ),
                )
                .unwrap();
            engine
                .add_line(
                    process_id,
                    CostLine::Utilities(
                        UtilityLine::new("電")
                            .with_qty(qty)
                            .with_price(Decimal::from(1_500))
                            .with_operating_days_per_month(Decimal::from(25))
                            .with_operating_hours_per_day(Decimal::from(8))
                            .with_order_completion_hours(Decimal::from(4)),
                    ),
                )
                .unwrap();
        }
    }

    engine.into_definition()
}

fn bench_full_rederive(c: &mut Criterion) {
    let definition = build_definition(8, 20);

    c.bench_function("load_rederive_8x20", |b| {
        b.iter(|| CostingEngine::load(black_box(definition.clone())))
    });
}

criterion_group!(benches, bench_full_rederive);
criterion_main!(benches);
