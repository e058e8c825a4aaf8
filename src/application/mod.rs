//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DraftStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - policy: 分割、定价与审阅提示策略
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod policy;
pub mod ports;
pub mod queries;
pub mod views;

// Re-exports
pub use commands::{
    // Chapter commands
    ParseChapters,
    // Draft commands
    CreateDraftBatch,
    DiscardDraftBatch,
    EditDraftChapter,
    RemoveDraftChapter,
    // Handlers
    handlers::{
        CreateDraftBatchHandler, DiscardDraftBatchHandler, EditDraftChapterHandler,
        ParseChaptersHandler, ParseChaptersResponse, RemoveDraftChapterHandler,
    },
};

pub use error::ApplicationError;

pub use policy::{ChapterPolicy, DEFAULT_SINGLE_CHAPTER_WORD_THRESHOLD};

pub use ports::{DraftStoreError, DraftStorePort};

pub use queries::{
    ExportDraftSubmission,
    GetDraftBatch,
    ListDraftBatches,
    // Handlers
    handlers::{ExportDraftSubmissionHandler, GetDraftBatchHandler, ListDraftBatchesHandler},
};

pub use views::{BulkSubmission, DraftBatchSummary, DraftBatchView, PricedChapter};
