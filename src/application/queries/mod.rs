//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：草稿批次的读取与导出

mod draft_queries;

pub mod handlers;

pub use draft_queries::*;
