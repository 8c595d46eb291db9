//! 重算協調器

use rust_decimal::Decimal;
use uuid::Uuid;

use cogm_calc::{ProcessCalculator, SummaryCalculator};
use cogm_core::{
    CogmSummary, CostCategory, CostLine, CostingError, DefinitionKind, ProductionDefinition,
    Result, RoutingProcess,
};

use crate::edit::{CostEdit, LineField};

/// 成本計算引擎（重算協調器）
///
/// 生產定義的單一修改入口。每次編輯同步完成
/// 「明細行 → 類別小計 → 計劃彙總」重算後才返回，
/// 呼叫端取得的快照恆為一致狀態；整體等價於
/// 純歸約器 `(state, edit) -> state'`。
pub struct CostingEngine {
    definition: ProductionDefinition,
}

impl CostingEngine {
    /// 創建新的引擎（新定義含一個空製程）
    pub fn new(kind: DefinitionKind) -> Self {
        let mut definition = ProductionDefinition::new(kind);
        SummaryCalculator::refresh(&mut definition);
        Self { definition }
    }

    /// 載入既有紀錄並重新推導所有衍生值
    ///
    /// 持久化的小計與彙總一律不信任，載入即全量重算，
    /// 以修復過期或毀損的聚合欄位。
    pub fn load(mut definition: ProductionDefinition) -> Self {
        tracing::info!(
            "載入生產定義: {} 個製程, {} 筆明細",
            definition.processes.len(),
            definition
                .processes
                .iter()
                .map(|p| p.lines.total_len())
                .sum::<usize>()
        );

        for process in &mut definition.processes {
            ProcessCalculator::recalculate(process);
        }
        SummaryCalculator::refresh(&mut definition);

        Self { definition }
    }

    /// 歸約器入口：套用單一編輯事件
    pub fn apply(&mut self, edit: CostEdit) -> Result<()> {
        match edit {
            CostEdit::AddProcess {
                name,
                job_description,
            } => {
                self.add_process(name, job_description);
                Ok(())
            }
            CostEdit::RemoveProcess { process_id } => self.remove_process(process_id),
            CostEdit::UpdateProcessInfo {
                process_id,
                name,
                job_description,
            } => self.update_process_info(process_id, name, job_description),
            CostEdit::AddLine { process_id, line } => {
                self.add_line(process_id, line).map(|_| ())
            }
            CostEdit::UpdateLine {
                process_id,
                category,
                line_id,
                field,
            } => self.update_line(process_id, category, line_id, field),
            CostEdit::RemoveLine {
                process_id,
                category,
                line_id,
            } => self.remove_line(process_id, category, line_id),
            CostEdit::SetEstimatedGoodsProducedQty(qty) => {
                self.set_estimated_goods_produced_qty(qty);
                Ok(())
            }
            CostEdit::SetTotalProductionOrders(orders) => {
                self.set_total_production_orders(orders);
                Ok(())
            }
            CostEdit::SetName(name) => {
                self.definition.name = name;
                Ok(())
            }
            CostEdit::SetDocDate(date) => {
                self.definition.doc_date = date;
                Ok(())
            }
            CostEdit::SetNote(note) => {
                self.definition.note = note;
                Ok(())
            }
        }
    }

    /// 新增製程，回傳新製程ID
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Uuid {
        let process = RoutingProcess::new(name).with_job_description(job_description);
        let process_id = process.id;
        self.definition.processes.push(process);
        SummaryCalculator::refresh(&mut self.definition);

        tracing::debug!("新增製程: {}", process_id);
        process_id
    }

    /// 移除製程（移除後計劃彙總隨之收斂）
    pub fn remove_process(&mut self, process_id: Uuid) -> Result<()> {
        let index = self
            .definition
            .processes
            .iter()
            .position(|p| p.id == process_id)
            .ok_or(CostingError::ProcessNotFound(process_id))?;

        self.definition.processes.remove(index);
        SummaryCalculator::refresh(&mut self.definition);

        tracing::debug!("移除製程: {}", process_id);
        Ok(())
    }

    /// 更新製程名稱與工作說明（不影響金額，無需重算）
    pub fn update_process_info(
        &mut self,
        process_id: Uuid,
        name: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Result<()> {
        let process = self.process_mut(process_id)?;
        process.name = name.into();
        process.job_description = job_description.into();
        Ok(())
    }

    /// 新增明細行（類別由標籤決定），回傳明細行ID
    pub fn add_line(&mut self, process_id: Uuid, line: CostLine) -> Result<Uuid> {
        let category = line.category();
        let line_id = line.id();

        let process = self.process_mut(process_id)?;
        process.lines.push(line);
        ProcessCalculator::recalculate_category(process, category);
        SummaryCalculator::refresh(&mut self.definition);

        tracing::debug!("新增明細行: {} ({})", line_id, category.as_str());
        Ok(line_id)
    }

    /// 更新明細行單一欄位，並重算該類別小計與計劃彙總
    pub fn update_line(
        &mut self,
        process_id: Uuid,
        category: CostCategory,
        line_id: Uuid,
        field: LineField,
    ) -> Result<()> {
        let process = self.process_mut(process_id)?;
        Self::apply_field(process, category, line_id, &field)?;
        ProcessCalculator::recalculate_category(process, category);
        SummaryCalculator::refresh(&mut self.definition);

        tracing::debug!(
            "更新明細行: {} ({}) 欄位 {}",
            line_id,
            category.as_str(),
            field.name()
        );
        Ok(())
    }

    /// 移除明細行（移除最後一行時該類別小計歸 0）
    pub fn remove_line(
        &mut self,
        process_id: Uuid,
        category: CostCategory,
        line_id: Uuid,
    ) -> Result<()> {
        let process = self.process_mut(process_id)?;
        if !process.lines.remove(category, line_id) {
            return Err(CostingError::LineNotFound(line_id));
        }
        ProcessCalculator::recalculate_category(process, category);
        SummaryCalculator::refresh(&mut self.definition);

        tracing::debug!("移除明細行: {} ({})", line_id, category.as_str());
        Ok(())
    }

    /// 設置估計產出數量（僅影響計劃彙總）
    pub fn set_estimated_goods_produced_qty(&mut self, qty: Decimal) {
        self.definition.estimated_goods_produced_qty = qty;
        SummaryCalculator::refresh(&mut self.definition);
    }

    /// 設置生產訂單數（生產計劃以外的種類僅保存，不參與計算）
    pub fn set_total_production_orders(&mut self, orders: Decimal) {
        self.definition.total_production_orders = orders;
        SummaryCalculator::refresh(&mut self.definition);
    }

    /// 目前快照
    pub fn definition(&self) -> &ProductionDefinition {
        &self.definition
    }

    /// 目前計劃彙總
    pub fn summary(&self) -> &CogmSummary {
        &self.definition.summary
    }

    /// 取出定義（顯式存檔時序列化用）
    pub fn into_definition(self) -> ProductionDefinition {
        self.definition
    }

    fn process_mut(&mut self, process_id: Uuid) -> Result<&mut RoutingProcess> {
        self.definition
            .process_mut(process_id)
            .ok_or(CostingError::ProcessNotFound(process_id))
    }

    fn apply_field(
        process: &mut RoutingProcess,
        category: CostCategory,
        line_id: Uuid,
        field: &LineField,
    ) -> Result<()> {
        match category {
            CostCategory::DirectMaterial => {
                let line = process
                    .lines
                    .direct_material
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_material(line, category)
            }
            CostCategory::IndirectMaterial => {
                let line = process
                    .lines
                    .indirect_material
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_material(line, category)
            }
            CostCategory::DirectLabor => {
                let line = process
                    .lines
                    .direct_labor
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_labor(line, category)
            }
            CostCategory::IndirectLabor => {
                let line = process
                    .lines
                    .indirect_labor
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_labor(line, category)
            }
            CostCategory::Depreciation => {
                let line = process
                    .lines
                    .depreciation
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_depreciation(line, category)
            }
            CostCategory::Utilities => {
                let line = process
                    .lines
                    .utilities
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_utility(line, category)
            }
            CostCategory::OtherOverhead => {
                let line = process
                    .lines
                    .other_overhead
                    .iter_mut()
                    .find(|l| l.id == line_id)
                    .ok_or(CostingError::LineNotFound(line_id))?;
                field.apply_utility(line, category)
            }
        }
    }
}
