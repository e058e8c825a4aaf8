//! Data Transfer Objects

use serde::Serialize;

use crate::application::PricedChapter;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

/// 章节（含定价），字段名与管理后台一致
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub chapter_number: u32,
    pub title: String,
    pub content: String,
    pub word_count: usize,
    pub is_free: bool,
    pub is_premium: bool,
    pub coin_cost: u32,
}

impl From<PricedChapter> for ChapterDto {
    fn from(chapter: PricedChapter) -> Self {
        Self {
            chapter_number: chapter.number,
            title: chapter.title,
            content: chapter.content,
            word_count: chapter.word_count,
            is_free: chapter.price.is_free,
            is_premium: chapter.price.is_premium,
            coin_cost: chapter.price.coin_cost,
        }
    }
}

pub fn default_starting_number() -> u32 {
    1
}
