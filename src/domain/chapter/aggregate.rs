//! Chapter Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{BatchId, ChapterDraft, ChapterError, ChapterPricing};
use crate::domain::chapter_segmenter::{segment_with, SegmentConfig, Strategy};

/// 提交给后端批量接口的单章数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSubmission {
    pub title: String,
    pub content: String,
    pub chapter_number: u32,
    pub word_count: usize,
    pub is_free: bool,
    pub is_premium: bool,
    pub coin_cost: u32,
}

/// ChapterBatch 聚合根 - 待审阅的一批章节草稿
///
/// 不变量:
/// - chapters 非空，编号从 starting_number 起连续
/// - 每章正文非空
#[derive(Debug, Clone)]
pub struct ChapterBatch {
    id: BatchId,
    book_id: Option<String>,
    starting_number: u32,
    strategy: Strategy,
    chapters: Vec<ChapterDraft>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ChapterBatch {
    /// 从粘贴文本创建批次
    pub fn from_text(
        book_id: Option<String>,
        text: &str,
        starting_number: u32,
        config: &SegmentConfig,
    ) -> Result<Self, ChapterError> {
        if starting_number == 0 {
            return Err(ChapterError::InvalidStartingNumber);
        }

        let segmentation = segment_with(text, starting_number, config);
        if segmentation.overflowed {
            return Err(ChapterError::StartingNumberTooLarge(starting_number));
        }
        if segmentation.chapters.is_empty() {
            return Err(ChapterError::NothingParsed);
        }

        let now = Utc::now();
        Ok(Self {
            id: BatchId::new(),
            book_id,
            starting_number,
            strategy: segmentation.strategy,
            chapters: segmentation.chapters,
            created_at: now,
            updated_at: now,
        })
    }

    /// 修改某章的标题和/或正文
    pub fn edit_chapter(
        &mut self,
        number: u32,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<&ChapterDraft, ChapterError> {
        let index = self.index_of(number)?;
        let chapter = &mut self.chapters[index];

        // 先改正文，失败时标题保持不变
        if let Some(content) = content {
            chapter.set_content(content)?;
        }
        if let Some(title) = title {
            chapter.set_title(Some(title));
        }

        self.updated_at = Utc::now();
        Ok(&self.chapters[index])
    }

    /// 删除某章并重新连续编号
    pub fn remove_chapter(&mut self, number: u32) -> Result<ChapterDraft, ChapterError> {
        let index = self.index_of(number)?;
        if self.chapters.len() == 1 {
            return Err(ChapterError::LastChapter);
        }

        let removed = self.chapters.remove(index);
        // 删除后章节变少，新编号都不超过原来的最大编号
        let mut number = removed.number();
        for chapter in &mut self.chapters[index..] {
            chapter.renumber(number);
            number += 1;
        }

        self.updated_at = Utc::now();
        Ok(removed)
    }

    /// 生成批量提交数据
    pub fn to_submissions(&self, pricing: &ChapterPricing) -> Vec<ChapterSubmission> {
        self.chapters
            .iter()
            .map(|chapter| {
                let price = pricing.price_for(chapter.number());
                ChapterSubmission {
                    title: chapter.title().to_string(),
                    content: chapter.content().to_string(),
                    chapter_number: chapter.number(),
                    word_count: chapter.word_count(),
                    is_free: price.is_free,
                    is_premium: price.is_premium,
                    coin_cost: price.coin_cost,
                }
            })
            .collect()
    }

    fn index_of(&self, number: u32) -> Result<usize, ChapterError> {
        self.chapters
            .iter()
            .position(|c| c.number() == number)
            .ok_or(ChapterError::ChapterNotFound(number))
    }

    // Getters
    pub fn id(&self) -> BatchId {
        self.id
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub fn starting_number(&self) -> u32 {
        self.starting_number
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn chapters(&self) -> &[ChapterDraft] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_words(&self) -> usize {
        self.chapters.iter().map(|c| c.word_count()).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[cfg(test)]
    pub(crate) fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
