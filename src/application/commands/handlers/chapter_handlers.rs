//! Chapter Command Handlers

use std::sync::Arc;

use crate::application::commands::ParseChapters;
use crate::application::error::ApplicationError;
use crate::application::policy::ChapterPolicy;
use crate::application::views::PricedChapter;
use crate::domain::chapter::ChapterError;
use crate::domain::{segment_with, Strategy};

/// 解析预览响应
#[derive(Debug, Clone)]
pub struct ParseChaptersResponse {
    pub strategy: Strategy,
    pub chapters: Vec<PricedChapter>,
    pub total_words: usize,
    pub warning: Option<String>,
}

/// ParseChapters Handler - 无状态预览，不保存任何数据
pub struct ParseChaptersHandler {
    policy: Arc<ChapterPolicy>,
}

impl ParseChaptersHandler {
    pub fn new(policy: Arc<ChapterPolicy>) -> Self {
        Self { policy }
    }

    pub async fn handle(
        &self,
        command: ParseChapters,
    ) -> Result<ParseChaptersResponse, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Please enter chapter content"));
        }
        if command.starting_number == 0 {
            return Err(ChapterError::InvalidStartingNumber.into());
        }

        let segmentation = segment_with(&command.text, command.starting_number, &self.policy.segment);
        if segmentation.overflowed {
            return Err(ChapterError::StartingNumberTooLarge(command.starting_number).into());
        }
        if segmentation.chapters.is_empty() {
            return Err(ChapterError::NothingParsed.into());
        }

        let total_words = segmentation.chapters.iter().map(|c| c.word_count()).sum();
        let warning = self.policy.review_warning(&segmentation.chapters);

        tracing::info!(
            strategy = %segmentation.strategy,
            chapters = segmentation.chapters.len(),
            total_words = total_words,
            starting_number = command.starting_number,
            "Chapters parsed"
        );
        if let Some(warning) = &warning {
            tracing::warn!(warning = %warning, "Suspicious segmentation");
        }

        Ok(ParseChaptersResponse {
            strategy: segmentation.strategy,
            chapters: self.policy.price(&segmentation.chapters),
            total_words,
            warning,
        })
    }
}
