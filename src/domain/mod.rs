//! Domain Layer - 领域层
//!
//! - Chapter Context: 章节草稿、批次与定价
//! - 章节分割器：纯函数，无外部依赖

pub mod chapter;

mod chapter_segmenter;

pub use chapter_segmenter::{
    segment, segment_default, segment_with, SegmentConfig, Segmentation, Strategy,
    DEFAULT_MARKER, DEFAULT_MAX_TITLE_CHARS,
};
