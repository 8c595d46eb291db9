//! # COGM Engine
//!
//! 重算協調器：編輯事件的單一入口與同步重算串接

pub mod coordinator;
pub mod edit;

// Re-export 主要類型
pub use coordinator::CostingEngine;
pub use edit::{CostEdit, LineField};
