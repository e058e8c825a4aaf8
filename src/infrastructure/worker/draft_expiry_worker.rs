//! Draft Expiry Worker - 定期清理长时间未修改的草稿批次

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DraftStorePort;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct DraftExpiryWorkerConfig {
    /// 扫描间隔（秒）
    pub interval_secs: u64,
    /// 草稿空闲多久后过期（秒）
    pub expire_secs: u64,
}

impl Default for DraftExpiryWorkerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            expire_secs: 86400,
        }
    }
}

/// 草稿过期清理 Worker
pub struct DraftExpiryWorker {
    config: DraftExpiryWorkerConfig,
    store: Arc<dyn DraftStorePort>,
}

impl DraftExpiryWorker {
    pub fn new(config: DraftExpiryWorkerConfig, store: Arc<dyn DraftStorePort>) -> Self {
        Self { config, store }
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            expire_secs = self.config.expire_secs,
            "DraftExpiryWorker started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        // 第一次 tick 立即返回，跳过
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.purge_expired();
        }
    }

    /// 清理一次，返回删除的批次数
    pub fn purge_expired(&self) -> usize {
        let expired = self.store.expired(self.config.expire_secs);
        let mut purged = 0;

        for batch_id in expired {
            match self.store.remove_if_expired(batch_id, self.config.expire_secs) {
                Some(_) => {
                    purged += 1;
                    tracing::debug!(batch_id = %batch_id, "Expired draft batch removed");
                }
                // 扫描后已被修改或丢弃
                None => tracing::debug!(batch_id = %batch_id, "Skip expired batch"),
            }
        }

        if purged > 0 {
            tracing::info!(purged = purged, "Expired draft batches purged");
        }

        purged
    }
}
