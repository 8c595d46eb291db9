//! 生產定義模型（BOM／生產計劃／在製品）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::process::RoutingProcess;

/// 文件種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    /// 物料清單（BOM）
    Bom,
    /// 生產計劃
    ProductionPlan,
    /// 在製品
    WorkInProcess,
}

/// 製造成本彙總（計劃層衍生值）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CogmSummary {
    /// 製造費用合計
    #[serde(default)]
    pub total_factory_overhead: Decimal,

    /// 直接成本合計
    #[serde(default)]
    pub total_direct_cost: Decimal,

    /// 製造成本合計（COGM）
    #[serde(default)]
    pub total_cogm: Decimal,

    /// 單位製造成本
    #[serde(default)]
    pub cogm_per_unit: Decimal,
}

fn default_production_orders() -> Decimal {
    Decimal::ONE
}

/// 生產定義：一份 BOM／生產計劃／在製品紀錄
///
/// 由一個以上的途程製程組成；所有 totals 與 summary 均為衍生值，
/// 隨任一明細異動同步重算，持久化時一併序列化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionDefinition {
    /// 紀錄ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 文件種類
    pub kind: DefinitionKind,

    /// 產品／計劃名稱
    #[serde(default)]
    pub name: String,

    /// 單據日期
    #[serde(default)]
    pub doc_date: Option<NaiveDate>,

    /// 備註
    #[serde(default)]
    pub note: String,

    /// 估計產出數量
    #[serde(default)]
    pub estimated_goods_produced_qty: Decimal,

    /// 生產訂單數（BOM 預設 1，生產計劃可編輯）
    #[serde(default = "default_production_orders")]
    pub total_production_orders: Decimal,

    /// 途程製程
    #[serde(default)]
    pub processes: Vec<RoutingProcess>,

    /// 計劃層彙總（衍生值）
    #[serde(default)]
    pub summary: CogmSummary,
}

impl ProductionDefinition {
    /// 創建新的生產定義（含一個空製程）
    pub fn new(kind: DefinitionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: String::new(),
            doc_date: None,
            note: String::new(),
            estimated_goods_produced_qty: Decimal::ZERO,
            total_production_orders: Decimal::ONE,
            processes: vec![RoutingProcess::new("")],
            summary: CogmSummary::default(),
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 建構器模式：設置單據日期
    pub fn with_doc_date(mut self, date: NaiveDate) -> Self {
        self.doc_date = Some(date);
        self
    }

    /// 建構器模式：設置備註
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// 建構器模式：設置估計產出數量
    pub fn with_estimated_goods_produced_qty(mut self, qty: Decimal) -> Self {
        self.estimated_goods_produced_qty = qty;
        self
    }

    /// 建構器模式：設置生產訂單數
    pub fn with_total_production_orders(mut self, orders: Decimal) -> Self {
        self.total_production_orders = orders;
        self
    }

    /// 有效產出數量
    ///
    /// 生產計劃為估計產量 × 訂單數；BOM 與在製品直接取估計產量
    /// （訂單數固定視為 1）。
    pub fn effective_output_qty(&self) -> Decimal {
        match self.kind {
            DefinitionKind::ProductionPlan => {
                self.estimated_goods_produced_qty * self.total_production_orders
            }
            DefinitionKind::Bom | DefinitionKind::WorkInProcess => {
                self.estimated_goods_produced_qty
            }
        }
    }

    /// 依ID查找製程
    pub fn process(&self, process_id: Uuid) -> Option<&RoutingProcess> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// 依ID查找製程（可變）
    pub fn process_mut(&mut self, process_id: Uuid) -> Option<&mut RoutingProcess> {
        self.processes.iter_mut().find(|p| p.id == process_id)
    }
}
