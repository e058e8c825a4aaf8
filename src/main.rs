//! StoryDesk - 小说章节导入服务
//!
//! - Domain: chapter/, chapter_segmenter
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker

use std::sync::Arc;

use storydesk::config::{load_config, print_config, AppConfig};
use storydesk::infrastructure::http::{AppState, HttpServer, ServerConfig};
use storydesk::infrastructure::memory::InMemoryDraftStore;
use storydesk::infrastructure::worker::{DraftExpiryWorker, DraftExpiryWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("StoryDesk - 小说章节导入服务 v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 草稿存储与章节策略
    let draft_store = Arc::new(InMemoryDraftStore::new());
    let policy = config.chapter_policy();

    // 草稿过期清理
    if config.drafts.gc_enabled {
        let worker = DraftExpiryWorker::new(
            DraftExpiryWorkerConfig {
                interval_secs: config.drafts.gc_interval_secs,
                expire_secs: config.drafts.expire_secs,
            },
            draft_store.clone(),
        );
        tokio::spawn(worker.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_upload_limit(config.upload.max_size_bytes);
    let state = AppState::new(draft_store, policy, config.upload.max_size_bytes);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},storydesk={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
