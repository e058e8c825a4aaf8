//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：章节解析与草稿批次的修改

mod chapter_commands;
mod draft_commands;

pub mod handlers;

pub use chapter_commands::*;
pub use draft_commands::*;
