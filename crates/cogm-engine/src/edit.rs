//! 編輯事件模型
//!
//! `CostEdit` 是歸約器的輸入：每一種使用者編輯對應一個變體，
//! 協調器逐一套用並同步重算。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use cogm_core::{
    CostCategory, CostLine, CostingError, DepreciationLine, LaborLine, MaterialLine, Result,
    UtilityLine,
};

/// 明細行欄位修補
///
/// 變體涵蓋全部原始輸入欄位；套用到不具該欄位的類別時
/// 回報 `FieldNotApplicable`（呼叫端與狀態脫鉤的結構性錯誤）。
#[derive(Debug, Clone)]
pub enum LineField {
    /// 會計科目代碼
    Coa(String),
    /// 項目名稱
    Name(String),
    /// 說明
    Desc(String),
    /// 單位
    Unit(String),
    /// 數量
    Qty(Decimal),
    /// 單價／取得成本
    Price(Decimal),
    /// 月薪資率
    RateMonth(Decimal),
    /// 每月工作天數
    WorkingDaysPerMonth(Decimal),
    /// 每天工作時數
    WorkingHoursPerDay(Decimal),
    /// 累計折舊
    AccumulatedDepreciation(Decimal),
    /// 估計耐用年數
    UsefulLifeYears(Decimal),
    /// 殘值
    SalvageValue(Decimal),
    /// 每月運轉天數
    OperatingDaysPerMonth(Decimal),
    /// 每天運轉時數
    OperatingHoursPerDay(Decimal),
    /// 完成訂單所需時數
    OrderCompletionHours(Decimal),
}

impl LineField {
    /// 欄位名稱（錯誤回報用）
    pub fn name(&self) -> &'static str {
        match self {
            LineField::Coa(_) => "coa",
            LineField::Name(_) => "name",
            LineField::Desc(_) => "desc",
            LineField::Unit(_) => "unit",
            LineField::Qty(_) => "qty",
            LineField::Price(_) => "price",
            LineField::RateMonth(_) => "rate_per_month",
            LineField::WorkingDaysPerMonth(_) => "workingday_per_month",
            LineField::WorkingHoursPerDay(_) => "workinghour_per_day",
            LineField::AccumulatedDepreciation(_) => "acc_dep",
            LineField::UsefulLifeYears(_) => "est_useful",
            LineField::SalvageValue(_) => "salvage_value",
            LineField::OperatingDaysPerMonth(_) => "operatingday_per_month",
            LineField::OperatingHoursPerDay(_) => "operatinghour_per_day",
            LineField::OrderCompletionHours(_) => "order_compl_time",
        }
    }

    fn not_applicable(&self, category: CostCategory) -> CostingError {
        CostingError::FieldNotApplicable {
            category,
            field: self.name(),
        }
    }

    /// 套用到材料明細行
    pub(crate) fn apply_material(
        &self,
        line: &mut MaterialLine,
        category: CostCategory,
    ) -> Result<()> {
        match self {
            LineField::Coa(v) => line.coa = v.clone(),
            LineField::Name(v) => line.name = v.clone(),
            LineField::Desc(v) => line.desc = v.clone(),
            LineField::Unit(v) => line.unit = v.clone(),
            LineField::Qty(v) => line.qty = *v,
            LineField::Price(v) => line.price = *v,
            _ => return Err(self.not_applicable(category)),
        }
        Ok(())
    }

    /// 套用到人工明細行
    pub(crate) fn apply_labor(&self, line: &mut LaborLine, category: CostCategory) -> Result<()> {
        match self {
            LineField::Coa(v) => line.coa = v.clone(),
            LineField::Name(v) => line.name = v.clone(),
            LineField::Desc(v) => line.desc = v.clone(),
            LineField::Unit(v) => line.unit = v.clone(),
            LineField::Qty(v) => line.qty = *v,
            LineField::RateMonth(v) => line.rate_month = *v,
            LineField::WorkingDaysPerMonth(v) => line.working_days_per_month = *v,
            LineField::WorkingHoursPerDay(v) => line.working_hours_per_day = *v,
            LineField::OrderCompletionHours(v) => line.order_completion_hours = *v,
            _ => return Err(self.not_applicable(category)),
        }
        Ok(())
    }

    /// 套用到折舊明細行
    pub(crate) fn apply_depreciation(
        &self,
        line: &mut DepreciationLine,
        category: CostCategory,
    ) -> Result<()> {
        match self {
            LineField::Coa(v) => line.coa = v.clone(),
            LineField::Name(v) => line.name = v.clone(),
            LineField::Desc(v) => line.desc = v.clone(),
            LineField::Unit(v) => line.unit = v.clone(),
            LineField::Qty(v) => line.qty = *v,
            LineField::Price(v) => line.price = *v,
            LineField::AccumulatedDepreciation(v) => line.accumulated_depreciation = *v,
            LineField::UsefulLifeYears(v) => line.useful_life_years = *v,
            LineField::SalvageValue(v) => line.salvage_value = *v,
            LineField::OperatingDaysPerMonth(v) => line.operating_days_per_month = *v,
            LineField::OperatingHoursPerDay(v) => line.operating_hours_per_day = *v,
            LineField::OrderCompletionHours(v) => line.order_completion_hours = *v,
            _ => return Err(self.not_applicable(category)),
        }
        Ok(())
    }

    /// 套用到水電／其他費用明細行
    pub(crate) fn apply_utility(
        &self,
        line: &mut UtilityLine,
        category: CostCategory,
    ) -> Result<()> {
        match self {
            LineField::Coa(v) => line.coa = v.clone(),
            LineField::Name(v) => line.name = v.clone(),
            LineField::Desc(v) => line.desc = v.clone(),
            LineField::Unit(v) => line.unit = v.clone(),
            LineField::Qty(v) => line.qty = *v,
            LineField::Price(v) => line.price = *v,
            LineField::OperatingDaysPerMonth(v) => line.operating_days_per_month = *v,
            LineField::OperatingHoursPerDay(v) => line.operating_hours_per_day = *v,
            LineField::OrderCompletionHours(v) => line.order_completion_hours = *v,
            _ => return Err(self.not_applicable(category)),
        }
        Ok(())
    }
}

/// 成本定義編輯事件（歸約器輸入）
#[derive(Debug, Clone)]
pub enum CostEdit {
    /// 新增製程
    AddProcess {
        name: String,
        job_description: String,
    },
    /// 移除製程
    RemoveProcess { process_id: Uuid },
    /// 更新製程名稱與工作說明
    UpdateProcessInfo {
        process_id: Uuid,
        name: String,
        job_description: String,
    },
    /// 新增明細行（類別由標籤決定）
    AddLine { process_id: Uuid, line: CostLine },
    /// 更新明細行單一欄位
    UpdateLine {
        process_id: Uuid,
        category: CostCategory,
        line_id: Uuid,
        field: LineField,
    },
    /// 移除明細行
    RemoveLine {
        process_id: Uuid,
        category: CostCategory,
        line_id: Uuid,
    },
    /// 設置估計產出數量
    SetEstimatedGoodsProducedQty(Decimal),
    /// 設置生產訂單數
    SetTotalProductionOrders(Decimal),
    /// 設置名稱
    SetName(String),
    /// 設置單據日期
    SetDocDate(Option<NaiveDate>),
    /// 設置備註
    SetNote(String),
}
