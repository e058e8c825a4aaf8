//! In-Memory Draft Store Implementation

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::ports::{DraftStoreError, DraftStorePort};
use crate::domain::chapter::{BatchId, ChapterBatch};

/// 内存草稿存储
pub struct InMemoryDraftStore {
    batches: DashMap<BatchId, ChapterBatch>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self {
            batches: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl Default for InMemoryDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStorePort for InMemoryDraftStore {
    fn insert(&self, batch: ChapterBatch) -> Result<BatchId, DraftStoreError> {
        let batch_id = batch.id();
        match self.batches.entry(batch_id) {
            Entry::Occupied(_) => Err(DraftStoreError::AlreadyExists(batch_id)),
            Entry::Vacant(entry) => {
                entry.insert(batch);
                tracing::debug!(batch_id = %batch_id, "Draft batch stored");
                Ok(batch_id)
            }
        }
    }

    fn get(&self, id: BatchId) -> Result<ChapterBatch, DraftStoreError> {
        self.batches
            .get(&id)
            .map(|b| b.clone())
            .ok_or(DraftStoreError::NotFound(id))
    }

    fn save(&self, batch: ChapterBatch) -> Result<(), DraftStoreError> {
        let batch_id = batch.id();
        let mut slot = self
            .batches
            .get_mut(&batch_id)
            .ok_or(DraftStoreError::NotFound(batch_id))?;
        *slot = batch;
        Ok(())
    }

    fn remove(&self, id: BatchId) -> Result<ChapterBatch, DraftStoreError> {
        self.batches
            .remove(&id)
            .map(|(_, batch)| batch)
            .ok_or(DraftStoreError::NotFound(id))
    }

    fn list(&self) -> Vec<ChapterBatch> {
        self.batches.iter().map(|e| e.value().clone()).collect()
    }

    fn expired(&self, idle_timeout_secs: u64) -> Vec<BatchId> {
        self.batches
            .iter()
            .filter(|entry| is_idle(entry.value(), idle_timeout_secs))
            .map(|entry| *entry.key())
            .collect()
    }

    fn remove_if_expired(&self, id: BatchId, idle_timeout_secs: u64) -> Option<ChapterBatch> {
        // 在分片锁内重新检查，避免删掉刚被修改的批次
        self.batches
            .remove_if(&id, |_, batch| is_idle(batch, idle_timeout_secs))
            .map(|(_, batch)| batch)
    }
}

/// 最后修改时间距今是否超过超时时间
fn is_idle(batch: &ChapterBatch, idle_timeout_secs: u64) -> bool {
    // chrono::Duration 上限为 i64::MAX 毫秒
    let secs = i64::try_from(idle_timeout_secs)
        .unwrap_or(i64::MAX)
        .min(i64::MAX / 1000);
    let timeout = chrono::Duration::seconds(secs);
    Utc::now() - batch.updated_at() > timeout
}
