//! # COGM
//!
//! 製造成本滾算引擎：BOM／生產計劃／在製品的逐步成本彙總。
//!
//! - [`cogm_core`]：資料模型（明細行、製程、生產定義）
//! - [`cogm_calc`]：明細行公式、製程小計與計劃層彙總
//! - [`cogm_engine`]：編輯事件的單一入口與同步重算

pub use cogm_core::{
    CogmSummary, CostCategory, CostLine, CostLines, CostingError, DefinitionKind,
    DepreciationLine, LaborLine, MaterialLine, ProcessTotals, ProductionDefinition, Result,
    RoutingProcess, UtilityLine,
};

pub use cogm_calc::{
    DepreciationCalculator, LaborCalculator, MaterialCalculator, ProcessCalculator,
    SummaryCalculator, UtilityCalculator,
};

pub use cogm_engine::{CostEdit, CostingEngine, LineField};
