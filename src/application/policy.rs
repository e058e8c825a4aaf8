//! 章节处理策略
//!
//! 汇总分割配置、定价规则与审阅提示阈值，由所有用例共享

use crate::application::views::PricedChapter;
use crate::domain::chapter::{ChapterDraft, ChapterPricing};
use crate::domain::SegmentConfig;

/// 单章字数达到此值时提示"只识别到一章"
pub const DEFAULT_SINGLE_CHAPTER_WORD_THRESHOLD: usize = 3000;

#[derive(Debug, Clone)]
pub struct ChapterPolicy {
    pub segment: SegmentConfig,
    pub pricing: ChapterPricing,
    pub single_chapter_word_threshold: usize,
}

impl Default for ChapterPolicy {
    fn default() -> Self {
        Self {
            segment: SegmentConfig::default(),
            pricing: ChapterPricing::default(),
            single_chapter_word_threshold: DEFAULT_SINGLE_CHAPTER_WORD_THRESHOLD,
        }
    }
}

impl ChapterPolicy {
    /// 结果可疑时给出提示：只识别出一章但篇幅很长
    pub fn review_warning(&self, chapters: &[ChapterDraft]) -> Option<String> {
        match chapters {
            [only] if only.word_count() >= self.single_chapter_word_threshold => Some(format!(
                "Only one chapter detected ({} words). Check your formatting: start each chapter with a '{}' line or a \"Chapter N\" heading.",
                only.word_count(),
                self.segment.marker
            )),
            _ => None,
        }
    }

    /// 为每章附加价格
    pub fn price(&self, chapters: &[ChapterDraft]) -> Vec<PricedChapter> {
        chapters
            .iter()
            .map(|chapter| PricedChapter {
                number: chapter.number(),
                title: chapter.title().to_string(),
                content: chapter.content().to_string(),
                word_count: chapter.word_count(),
                price: self.pricing.price_for(chapter.number()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(words: usize) -> ChapterDraft {
        ChapterDraft::new(1, None, vec!["word"; words].join(" ")).unwrap()
    }

    #[test]
    fn test_warning_for_long_single_chapter() {
        let policy = ChapterPolicy {
            single_chapter_word_threshold: 10,
            ..ChapterPolicy::default()
        };

        assert!(policy.review_warning(&[chapter(10)]).is_some());
        assert!(policy.review_warning(&[chapter(9)]).is_none());
        assert!(policy.review_warning(&[chapter(10), chapter(10)]).is_none());
        assert!(policy.review_warning(&[]).is_none());
    }

    #[test]
    fn test_price_attaches_pricing() {
        let policy = ChapterPolicy::default();
        let chapters = vec![
            ChapterDraft::new(5, None, "free").unwrap(),
            ChapterDraft::new(6, None, "paid").unwrap(),
        ];

        let priced = policy.price(&chapters);
        assert!(priced[0].price.is_free);
        assert_eq!(priced[1].price.coin_cost, 20);
        assert_eq!(priced[1].title, "Chapter 6");
    }
}
