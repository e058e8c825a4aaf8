//! Draft Queries

use uuid::Uuid;

/// 获取草稿批次查询
#[derive(Debug, Clone)]
pub struct GetDraftBatch {
    pub batch_id: Uuid,
}

/// 列出所有草稿批次查询
#[derive(Debug, Clone)]
pub struct ListDraftBatches;

/// 导出批量提交数据查询
#[derive(Debug, Clone)]
pub struct ExportDraftSubmission {
    pub batch_id: Uuid,
}
