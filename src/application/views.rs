//! 用例返回的视图结构

use uuid::Uuid;

use crate::application::policy::ChapterPolicy;
use crate::domain::chapter::{ChapterBatch, ChapterPrice, ChapterSubmission};
use crate::domain::Strategy;

/// 附带价格的章节
#[derive(Debug, Clone)]
pub struct PricedChapter {
    pub number: u32,
    pub title: String,
    pub content: String,
    pub word_count: usize,
    pub price: ChapterPrice,
}

/// 草稿批次详情
#[derive(Debug, Clone)]
pub struct DraftBatchView {
    pub id: Uuid,
    pub book_id: Option<String>,
    pub starting_number: u32,
    pub strategy: Strategy,
    pub chapters: Vec<PricedChapter>,
    pub total_words: usize,
    pub warning: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DraftBatchView {
    pub fn build(batch: &ChapterBatch, policy: &ChapterPolicy) -> Self {
        Self {
            id: *batch.id().as_uuid(),
            book_id: batch.book_id().map(str::to_string),
            starting_number: batch.starting_number(),
            strategy: batch.strategy(),
            chapters: policy.price(batch.chapters()),
            total_words: batch.total_words(),
            warning: policy.review_warning(batch.chapters()),
            created_at: batch.created_at().to_rfc3339(),
            updated_at: batch.updated_at().to_rfc3339(),
        }
    }
}

/// 草稿批次摘要
#[derive(Debug, Clone)]
pub struct DraftBatchSummary {
    pub id: Uuid,
    pub book_id: Option<String>,
    pub chapter_count: usize,
    pub total_words: usize,
    pub updated_at: String,
}

impl From<&ChapterBatch> for DraftBatchSummary {
    fn from(batch: &ChapterBatch) -> Self {
        Self {
            id: *batch.id().as_uuid(),
            book_id: batch.book_id().map(str::to_string),
            chapter_count: batch.chapter_count(),
            total_words: batch.total_words(),
            updated_at: batch.updated_at().to_rfc3339(),
        }
    }
}

/// 批量提交数据
#[derive(Debug, Clone)]
pub struct BulkSubmission {
    pub book_id: Option<String>,
    pub chapters: Vec<ChapterSubmission>,
}
