//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "STORYDESK";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `STORYDESK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `STORYDESK_SERVER__PORT=8080`
/// - `STORYDESK_SEGMENTER__MARKER=*`
/// - `STORYDESK_PRICING__FREE_CHAPTERS=3`
/// - `STORYDESK_DRAFTS__EXPIRE_SECS=3600`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("segmenter.marker", "#")?
        .set_default("segmenter.max_title_chars", 100)?
        .set_default("pricing.free_chapters", 5)?
        .set_default("pricing.coin_cost", 20)?
        .set_default("review.single_chapter_word_threshold", 3000)?
        .set_default("drafts.gc_enabled", true)?
        .set_default("drafts.gc_interval_secs", 300)?
        .set_default("drafts.expire_secs", 86400)?
        .set_default("upload.max_size_bytes", 10 * 1024 * 1024)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: STORYDESK_PRICING__COIN_COST=30
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.segmenter.marker_char().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "Chapter marker must be a single non-whitespace character, got {:?}",
            config.segmenter.marker
        )));
    }

    if config.segmenter.max_title_chars == 0 {
        return Err(ConfigError::ValidationError(
            "Maximum title length cannot be 0".to_string(),
        ));
    }

    if config.drafts.gc_enabled && config.drafts.gc_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Draft GC interval cannot be 0 when GC is enabled".to_string(),
        ));
    }

    if config.upload.max_size_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Upload size limit cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!(
        "Segmenter: marker={:?}, max_title_chars={}",
        config.segmenter.marker,
        config.segmenter.max_title_chars
    );
    tracing::info!(
        "Pricing: first {} chapters free, {} coins after",
        config.pricing.free_chapters,
        config.pricing.coin_cost
    );
    tracing::info!(
        "Single Chapter Warning: >= {} words",
        config.review.single_chapter_word_threshold
    );
    tracing::info!("Upload Limit: {} bytes", config.upload.max_size_bytes);
    tracing::info!("Draft GC Enabled: {}", config.drafts.gc_enabled);
    if config.drafts.gc_enabled {
        tracing::info!("Draft GC Interval: {}s", config.drafts.gc_interval_secs);
        tracing::info!("Draft Expire: {}s", config.drafts.expire_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
