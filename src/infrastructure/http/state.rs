//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateDraftBatchHandler, DiscardDraftBatchHandler, EditDraftChapterHandler,
    ParseChaptersHandler, RemoveDraftChapterHandler,
    // Query handlers
    ExportDraftSubmissionHandler, GetDraftBatchHandler, ListDraftBatchesHandler,
    // Ports & policy
    ChapterPolicy, DraftStorePort,
};

/// 默认上传文件大小上限：10MB
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub draft_store: Arc<dyn DraftStorePort>,
    pub policy: Arc<ChapterPolicy>,

    /// 上传 TXT 文件的最大字节数
    pub max_upload_size: usize,

    // ========== Command Handlers ==========
    pub parse_chapters_handler: ParseChaptersHandler,
    pub create_draft_handler: CreateDraftBatchHandler,
    pub edit_draft_handler: EditDraftChapterHandler,
    pub remove_draft_chapter_handler: RemoveDraftChapterHandler,
    pub discard_draft_handler: DiscardDraftBatchHandler,

    // ========== Query Handlers ==========
    pub get_draft_handler: GetDraftBatchHandler,
    pub list_drafts_handler: ListDraftBatchesHandler,
    pub export_draft_handler: ExportDraftSubmissionHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        draft_store: Arc<dyn DraftStorePort>,
        policy: ChapterPolicy,
        max_upload_size: usize,
    ) -> Self {
        let policy = Arc::new(policy);

        Self {
            // Ports
            draft_store: draft_store.clone(),
            policy: policy.clone(),
            max_upload_size,

            // Command handlers
            parse_chapters_handler: ParseChaptersHandler::new(policy.clone()),
            create_draft_handler: CreateDraftBatchHandler::new(draft_store.clone(), policy.clone()),
            edit_draft_handler: EditDraftChapterHandler::new(draft_store.clone(), policy.clone()),
            remove_draft_chapter_handler: RemoveDraftChapterHandler::new(
                draft_store.clone(),
                policy.clone(),
            ),
            discard_draft_handler: DiscardDraftBatchHandler::new(draft_store.clone()),

            // Query handlers
            get_draft_handler: GetDraftBatchHandler::new(draft_store.clone(), policy.clone()),
            list_drafts_handler: ListDraftBatchesHandler::new(draft_store.clone()),
            export_draft_handler: ExportDraftSubmissionHandler::new(draft_store, policy),
        }
    }
}
