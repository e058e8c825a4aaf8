//! Chapter Context - 章节限界上下文
//!
//! 职责:
//! - 章节草稿实体
//! - 待审阅批次聚合
//! - 章节定价规则

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{ChapterBatch, ChapterSubmission};
pub use entities::{count_words, fallback_title, ChapterDraft};
pub use errors::ChapterError;
pub use value_objects::{
    BatchId, ChapterPrice, ChapterPricing, DEFAULT_COIN_COST, DEFAULT_FREE_CHAPTERS,
};
