//! Worker Layer - Background Task Processing
//!
//! 实现 DraftExpiryWorker，定期清理过期的草稿批次

mod draft_expiry_worker;

pub use draft_expiry_worker::{DraftExpiryWorker, DraftExpiryWorkerConfig};
