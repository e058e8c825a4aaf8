//! Draft Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::policy::ChapterPolicy;
use crate::application::ports::DraftStorePort;
use crate::application::queries::{ExportDraftSubmission, GetDraftBatch, ListDraftBatches};
use crate::application::views::{BulkSubmission, DraftBatchSummary, DraftBatchView};
use crate::domain::chapter::BatchId;

/// GetDraftBatch Handler
pub struct GetDraftBatchHandler {
    store: Arc<dyn DraftStorePort>,
    policy: Arc<ChapterPolicy>,
}

impl GetDraftBatchHandler {
    pub fn new(store: Arc<dyn DraftStorePort>, policy: Arc<ChapterPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, query: GetDraftBatch) -> Result<DraftBatchView, ApplicationError> {
        let batch = self.store.get(BatchId::from_uuid(query.batch_id))?;
        Ok(DraftBatchView::build(&batch, &self.policy))
    }
}

/// ListDraftBatches Handler - 最近修改的排在前面
pub struct ListDraftBatchesHandler {
    store: Arc<dyn DraftStorePort>,
}

impl ListDraftBatchesHandler {
    pub fn new(store: Arc<dyn DraftStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: ListDraftBatches,
    ) -> Result<Vec<DraftBatchSummary>, ApplicationError> {
        let mut batches = self.store.list();
        batches.sort_by_key(|b| std::cmp::Reverse(b.updated_at()));

        Ok(batches.iter().map(DraftBatchSummary::from).collect())
    }
}

/// ExportDraftSubmission Handler
///
/// 生成后端批量章节接口所需的请求体，提交本身由调用方负责
pub struct ExportDraftSubmissionHandler {
    store: Arc<dyn DraftStorePort>,
    policy: Arc<ChapterPolicy>,
}

impl ExportDraftSubmissionHandler {
    pub fn new(store: Arc<dyn DraftStorePort>, policy: Arc<ChapterPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        query: ExportDraftSubmission,
    ) -> Result<BulkSubmission, ApplicationError> {
        let batch = self.store.get(BatchId::from_uuid(query.batch_id))?;
        let chapters = batch.to_submissions(&self.policy.pricing);

        tracing::info!(
            batch_id = %batch.id(),
            chapters = chapters.len(),
            "Draft batch exported"
        );

        Ok(BulkSubmission {
            book_id: batch.book_id().map(str::to_string),
            chapters,
        })
    }
}
