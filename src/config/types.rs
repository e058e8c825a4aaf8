//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::{ChapterPolicy, DEFAULT_SINGLE_CHAPTER_WORD_THRESHOLD};
use crate::domain::chapter::{ChapterPricing, DEFAULT_COIN_COST, DEFAULT_FREE_CHAPTERS};
use crate::domain::{SegmentConfig, DEFAULT_MARKER, DEFAULT_MAX_TITLE_CHARS};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 章节分割配置
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// 章节定价配置
    #[serde(default)]
    pub pricing: PricingConfig,

    /// 审阅提示配置
    #[serde(default)]
    pub review: ReviewConfig,

    /// 草稿批次配置
    #[serde(default)]
    pub drafts: DraftsConfig,

    /// 文件上传配置
    #[serde(default)]
    pub upload: UploadConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 由配置构造章节处理策略
    ///
    /// 调用前应已通过校验，marker 为空时退回默认值
    pub fn chapter_policy(&self) -> ChapterPolicy {
        ChapterPolicy {
            segment: SegmentConfig {
                marker: self.segmenter.marker_char().unwrap_or(DEFAULT_MARKER),
                max_title_chars: self.segmenter.max_title_chars,
            },
            pricing: ChapterPricing {
                free_chapters: self.pricing.free_chapters,
                coin_cost: self.pricing.coin_cost,
            },
            single_chapter_word_threshold: self.review.single_chapter_word_threshold,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 章节分割配置
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    /// 章节标记字符，必须是单个非空白字符
    #[serde(default = "default_marker")]
    pub marker: String,

    /// 标题最大字符数，超出则不视为标题行
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_max_title_chars() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            max_title_chars: default_max_title_chars(),
        }
    }
}

impl SegmenterConfig {
    /// marker 恰好是一个非空白字符时返回该字符
    pub fn marker_char(&self) -> Option<char> {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Some(c),
            _ => None,
        }
    }
}

/// 章节定价配置
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// 章节号不超过此值的章节免费
    #[serde(default = "default_free_chapters")]
    pub free_chapters: u32,

    /// 付费章节价格（金币）
    #[serde(default = "default_coin_cost")]
    pub coin_cost: u32,
}

fn default_free_chapters() -> u32 {
    DEFAULT_FREE_CHAPTERS
}

fn default_coin_cost() -> u32 {
    DEFAULT_COIN_COST
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_chapters: default_free_chapters(),
            coin_cost: default_coin_cost(),
        }
    }
}

/// 审阅提示配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    /// 只识别出一章且字数不少于此值时给出提示
    #[serde(default = "default_single_chapter_word_threshold")]
    pub single_chapter_word_threshold: usize,
}

fn default_single_chapter_word_threshold() -> usize {
    DEFAULT_SINGLE_CHAPTER_WORD_THRESHOLD
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            single_chapter_word_threshold: default_single_chapter_word_threshold(),
        }
    }
}

/// 草稿批次配置
#[derive(Debug, Clone, Deserialize)]
pub struct DraftsConfig {
    /// 是否启用过期清理
    #[serde(default = "default_gc_enabled")]
    pub gc_enabled: bool,

    /// 清理间隔（秒）
    #[serde(default = "default_gc_interval")]
    pub gc_interval_secs: u64,

    /// 草稿空闲过期时间（秒）
    #[serde(default = "default_expire_secs")]
    pub expire_secs: u64,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    300 // 5 分钟
}

fn default_expire_secs() -> u64 {
    86400 // 24 小时
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            gc_enabled: default_gc_enabled(),
            gc_interval_secs: default_gc_interval(),
            expire_secs: default_expire_secs(),
        }
    }
}

/// 文件上传配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// 上传文件最大大小（字节），默认 10MB
    #[serde(default = "default_max_upload_size")]
    pub max_size_bytes: usize,
}

fn default_max_upload_size() -> usize {
    10 * 1024 * 1024 // 10 MB
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_upload_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
