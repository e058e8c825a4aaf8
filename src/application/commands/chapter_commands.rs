//! Chapter Commands

/// 解析章节命令（无状态预览）
#[derive(Debug, Clone)]
pub struct ParseChapters {
    pub text: String,
    pub starting_number: u32,
}
