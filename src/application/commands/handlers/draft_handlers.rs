//! Draft Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CreateDraftBatch, DiscardDraftBatch, EditDraftChapter, RemoveDraftChapter,
};
use crate::application::error::ApplicationError;
use crate::application::policy::ChapterPolicy;
use crate::application::ports::DraftStorePort;
use crate::application::views::DraftBatchView;
use crate::domain::chapter::{BatchId, ChapterBatch};

// ============================================================================
// CreateDraftBatch
// ============================================================================

/// CreateDraftBatch Handler - 分割文本并保存为待审阅批次
pub struct CreateDraftBatchHandler {
    store: Arc<dyn DraftStorePort>,
    policy: Arc<ChapterPolicy>,
}

impl CreateDraftBatchHandler {
    pub fn new(store: Arc<dyn DraftStorePort>, policy: Arc<ChapterPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        command: CreateDraftBatch,
    ) -> Result<DraftBatchView, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Please enter chapter content"));
        }

        let book_id = command
            .book_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let batch = ChapterBatch::from_text(
            book_id,
            &command.text,
            command.starting_number,
            &self.policy.segment,
        )?;
        let view = DraftBatchView::build(&batch, &self.policy);

        let batch_id = self.store.insert(batch)?;

        tracing::info!(
            batch_id = %batch_id,
            book_id = ?view.book_id,
            strategy = %view.strategy,
            chapters = view.chapters.len(),
            "Draft batch created"
        );

        Ok(view)
    }
}

// ============================================================================
// EditDraftChapter
// ============================================================================

/// EditDraftChapter Handler
pub struct EditDraftChapterHandler {
    store: Arc<dyn DraftStorePort>,
    policy: Arc<ChapterPolicy>,
}

impl EditDraftChapterHandler {
    pub fn new(store: Arc<dyn DraftStorePort>, policy: Arc<ChapterPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        command: EditDraftChapter,
    ) -> Result<DraftBatchView, ApplicationError> {
        if command.title.is_none() && command.content.is_none() {
            return Err(ApplicationError::validation(
                "Nothing to change: provide a title or content",
            ));
        }

        let batch_id = BatchId::from_uuid(command.batch_id);
        let mut batch = self.store.get(batch_id)?;

        batch.edit_chapter(command.number, command.title, command.content)?;
        let view = DraftBatchView::build(&batch, &self.policy);
        self.store.save(batch)?;

        tracing::debug!(batch_id = %batch_id, number = command.number, "Draft chapter edited");

        Ok(view)
    }
}

// ============================================================================
// RemoveDraftChapter
// ============================================================================

/// RemoveDraftChapter Handler - 删除后剩余章节重新连续编号
pub struct RemoveDraftChapterHandler {
    store: Arc<dyn DraftStorePort>,
    policy: Arc<ChapterPolicy>,
}

impl RemoveDraftChapterHandler {
    pub fn new(store: Arc<dyn DraftStorePort>, policy: Arc<ChapterPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        command: RemoveDraftChapter,
    ) -> Result<DraftBatchView, ApplicationError> {
        let batch_id = BatchId::from_uuid(command.batch_id);
        let mut batch = self.store.get(batch_id)?;

        let removed = batch.remove_chapter(command.number)?;
        let view = DraftBatchView::build(&batch, &self.policy);
        self.store.save(batch)?;

        tracing::info!(
            batch_id = %batch_id,
            number = command.number,
            title = %removed.title(),
            remaining = view.chapters.len(),
            "Draft chapter removed"
        );

        Ok(view)
    }
}

// ============================================================================
// DiscardDraftBatch
// ============================================================================

/// DiscardDraftBatch Handler
pub struct DiscardDraftBatchHandler {
    store: Arc<dyn DraftStorePort>,
}

impl DiscardDraftBatchHandler {
    pub fn new(store: Arc<dyn DraftStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DiscardDraftBatch) -> Result<(), ApplicationError> {
        let batch_id = BatchId::from_uuid(command.batch_id);
        let batch = self.store.remove(batch_id)?;

        tracing::info!(
            batch_id = %batch_id,
            chapters = batch.chapter_count(),
            "Draft batch discarded"
        );

        Ok(())
    }
}
