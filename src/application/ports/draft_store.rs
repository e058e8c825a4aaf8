//! Draft Store Port - 草稿批次存储
//!
//! 定义草稿批次存取的抽象接口，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::chapter::{BatchId, ChapterBatch};

/// Draft Store 错误
#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("Draft batch not found: {0}")]
    NotFound(BatchId),

    #[error("Draft batch already exists: {0}")]
    AlreadyExists(BatchId),
}

/// Draft Store Port
///
/// 保存预览与提交之间待审阅的章节批次
pub trait DraftStorePort: Send + Sync {
    /// 插入新批次
    fn insert(&self, batch: ChapterBatch) -> Result<BatchId, DraftStoreError>;

    /// 获取批次副本
    fn get(&self, id: BatchId) -> Result<ChapterBatch, DraftStoreError>;

    /// 覆盖已存在的批次
    fn save(&self, batch: ChapterBatch) -> Result<(), DraftStoreError>;

    /// 删除批次
    fn remove(&self, id: BatchId) -> Result<ChapterBatch, DraftStoreError>;

    /// 列出所有批次
    fn list(&self) -> Vec<ChapterBatch>;

    /// 获取空闲超过指定秒数的批次 ID
    fn expired(&self, idle_timeout_secs: u64) -> Vec<BatchId>;

    /// 批次仍然空闲超时才删除；期间被修改或已删除时返回 None
    fn remove_if_expired(&self, id: BatchId, idle_timeout_secs: u64) -> Option<ChapterBatch>;
}
