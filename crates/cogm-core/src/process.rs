//! 途程製程模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::line::{CostCategory, CostLine, DepreciationLine, LaborLine, MaterialLine, UtilityLine};

/// 製程內七個成本類別的明細行集合
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostLines {
    /// 直接材料
    #[serde(default)]
    pub direct_material: Vec<MaterialLine>,

    /// 直接人工
    #[serde(default)]
    pub direct_labor: Vec<LaborLine>,

    /// 間接材料
    #[serde(default)]
    pub indirect_material: Vec<MaterialLine>,

    /// 間接人工
    #[serde(default)]
    pub indirect_labor: Vec<LaborLine>,

    /// 設備折舊
    #[serde(default)]
    pub depreciation: Vec<DepreciationLine>,

    /// 水電費用
    #[serde(default)]
    pub utilities: Vec<UtilityLine>,

    /// 其他製造費用
    #[serde(default)]
    pub other_overhead: Vec<UtilityLine>,
}

impl CostLines {
    /// 指定類別的明細行數
    pub fn len(&self, category: CostCategory) -> usize {
        match category {
            CostCategory::DirectMaterial => self.direct_material.len(),
            CostCategory::DirectLabor => self.direct_labor.len(),
            CostCategory::IndirectMaterial => self.indirect_material.len(),
            CostCategory::IndirectLabor => self.indirect_labor.len(),
            CostCategory::Depreciation => self.depreciation.len(),
            CostCategory::Utilities => self.utilities.len(),
            CostCategory::OtherOverhead => self.other_overhead.len(),
        }
    }

    /// 全部明細行數
    pub fn total_len(&self) -> usize {
        CostCategory::ALL.iter().map(|c| self.len(*c)).sum()
    }

    /// 是否沒有任何明細行
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// 依標籤將明細行放入對應類別
    pub fn push(&mut self, line: CostLine) {
        match line {
            CostLine::DirectMaterial(line) => self.direct_material.push(line),
            CostLine::DirectLabor(line) => self.direct_labor.push(line),
            CostLine::IndirectMaterial(line) => self.indirect_material.push(line),
            CostLine::IndirectLabor(line) => self.indirect_labor.push(line),
            CostLine::Depreciation(line) => self.depreciation.push(line),
            CostLine::Utilities(line) => self.utilities.push(line),
            CostLine::OtherOverhead(line) => self.other_overhead.push(line),
        }
    }

    /// 指定類別是否包含該明細行
    pub fn contains(&self, category: CostCategory, line_id: Uuid) -> bool {
        match category {
            CostCategory::DirectMaterial => self.direct_material.iter().any(|l| l.id == line_id),
            CostCategory::DirectLabor => self.direct_labor.iter().any(|l| l.id == line_id),
            CostCategory::IndirectMaterial => {
                self.indirect_material.iter().any(|l| l.id == line_id)
            }
            CostCategory::IndirectLabor => self.indirect_labor.iter().any(|l| l.id == line_id),
            CostCategory::Depreciation => self.depreciation.iter().any(|l| l.id == line_id),
            CostCategory::Utilities => self.utilities.iter().any(|l| l.id == line_id),
            CostCategory::OtherOverhead => self.other_overhead.iter().any(|l| l.id == line_id),
        }
    }

    /// 移除指定明細行，回傳是否找到
    pub fn remove(&mut self, category: CostCategory, line_id: Uuid) -> bool {
        fn remove_by_id<T>(lines: &mut Vec<T>, id: Uuid, get_id: impl Fn(&T) -> Uuid) -> bool {
            match lines.iter().position(|l| get_id(l) == id) {
                Some(index) => {
                    lines.remove(index);
                    true
                }
                None => false,
            }
        }

        match category {
            CostCategory::DirectMaterial => {
                remove_by_id(&mut self.direct_material, line_id, |l| l.id)
            }
            CostCategory::DirectLabor => remove_by_id(&mut self.direct_labor, line_id, |l| l.id),
            CostCategory::IndirectMaterial => {
                remove_by_id(&mut self.indirect_material, line_id, |l| l.id)
            }
            CostCategory::IndirectLabor => {
                remove_by_id(&mut self.indirect_labor, line_id, |l| l.id)
            }
            CostCategory::Depreciation => remove_by_id(&mut self.depreciation, line_id, |l| l.id),
            CostCategory::Utilities => remove_by_id(&mut self.utilities, line_id, |l| l.id),
            CostCategory::OtherOverhead => {
                remove_by_id(&mut self.other_overhead, line_id, |l| l.id)
            }
        }
    }
}

/// 製程各類別成本小計（衍生值，不可直接設定）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTotals {
    /// 直接材料小計
    #[serde(default)]
    pub total_material: Decimal,

    /// 直接人工小計
    #[serde(default)]
    pub total_labor: Decimal,

    /// 間接材料小計
    #[serde(default)]
    pub total_indirect_material: Decimal,

    /// 間接人工小計
    #[serde(default)]
    pub total_indirect_labor: Decimal,

    /// 設備折舊小計
    #[serde(default)]
    pub total_depreciation: Decimal,

    /// 水電費用小計
    #[serde(default)]
    pub total_utilities: Decimal,

    /// 其他製造費用小計
    #[serde(default)]
    pub total_ofc: Decimal,
}

impl ProcessTotals {
    /// 讀取指定類別小計
    pub fn get(&self, category: CostCategory) -> Decimal {
        match category {
            CostCategory::DirectMaterial => self.total_material,
            CostCategory::DirectLabor => self.total_labor,
            CostCategory::IndirectMaterial => self.total_indirect_material,
            CostCategory::IndirectLabor => self.total_indirect_labor,
            CostCategory::Depreciation => self.total_depreciation,
            CostCategory::Utilities => self.total_utilities,
            CostCategory::OtherOverhead => self.total_ofc,
        }
    }

    /// 寫入指定類別小計
    pub fn set(&mut self, category: CostCategory, value: Decimal) {
        match category {
            CostCategory::DirectMaterial => self.total_material = value,
            CostCategory::DirectLabor => self.total_labor = value,
            CostCategory::IndirectMaterial => self.total_indirect_material = value,
            CostCategory::IndirectLabor => self.total_indirect_labor = value,
            CostCategory::Depreciation => self.total_depreciation = value,
            CostCategory::Utilities => self.total_utilities = value,
            CostCategory::OtherOverhead => self.total_ofc = value,
        }
    }

    /// 製程直接成本小計（直接材料＋直接人工）
    pub fn direct_subtotal(&self) -> Decimal {
        self.total_material + self.total_labor
    }

    /// 製程製造費用小計（間接材料＋間接人工＋折舊＋水電＋其他）
    pub fn overhead_subtotal(&self) -> Decimal {
        self.total_indirect_material
            + self.total_indirect_labor
            + self.total_depreciation
            + self.total_utilities
            + self.total_ofc
    }
}

/// 途程製程（單一製造工序，攜帶七類成本明細與小計）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingProcess {
    /// 製程ID（僅供介面列表識別）
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 製程名稱
    #[serde(default)]
    pub name: String,

    /// 工作內容說明
    #[serde(default)]
    pub job_description: String,

    /// 成本明細
    #[serde(default)]
    pub lines: CostLines,

    /// 各類別小計（衍生值，隨明細異動重算）
    #[serde(default)]
    pub totals: ProcessTotals,
}

impl RoutingProcess {
    /// 創建新的空製程
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            job_description: String::new(),
            lines: CostLines::default(),
            totals: ProcessTotals::default(),
        }
    }

    /// 建構器模式：設置工作內容說明
    pub fn with_job_description(mut self, desc: impl Into<String>) -> Self {
        self.job_description = desc.into();
        self
    }
}
