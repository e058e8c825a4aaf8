//! StoryDesk - 小说章节导入服务
//!
//! 把作者粘贴或上传的长文本切分成编号章节，供管理后台审阅、修改后批量提交。
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节草稿、批次聚合与定价
//! - Chapter Segmenter: 标记 / 标题 / 空行 / 兜底 四级分割策略
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DraftStore）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: DraftStore 内存实现
//! - Worker: DraftExpiryWorker 后台清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{segment, segment_default, Segmentation, Strategy};
