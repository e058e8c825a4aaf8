//! Memory Layer - In-Memory State Management
//!
//! 实现 DraftStore，保存待审阅的章节批次

mod draft_store;

pub use draft_store::InMemoryDraftStore;
