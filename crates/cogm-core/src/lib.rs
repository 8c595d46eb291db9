//! # COGM Core
//!
//! 核心資料模型與類型定義

pub mod definition;
pub mod line;
pub mod process;

// Re-export 主要類型
pub use definition::{CogmSummary, DefinitionKind, ProductionDefinition};
pub use line::{CostCategory, CostLine, DepreciationLine, LaborLine, MaterialLine, UtilityLine};
pub use process::{CostLines, ProcessTotals, RoutingProcess};

/// 成本計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error("找不到製程: {0}")]
    ProcessNotFound(uuid::Uuid),

    #[error("找不到成本明細行: {0}")]
    LineNotFound(uuid::Uuid),

    #[error("欄位 {field} 不適用於 {category:?} 類別")]
    FieldNotApplicable {
        category: line::CostCategory,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CostingError>;
