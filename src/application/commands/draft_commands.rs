//! Draft Commands

use uuid::Uuid;

/// 从文本创建草稿批次命令
#[derive(Debug, Clone)]
pub struct CreateDraftBatch {
    pub book_id: Option<String>,
    pub text: String,
    pub starting_number: u32,
}

/// 修改草稿章节命令
#[derive(Debug, Clone)]
pub struct EditDraftChapter {
    pub batch_id: Uuid,
    pub number: u32,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// 删除草稿章节命令
#[derive(Debug, Clone)]
pub struct RemoveDraftChapter {
    pub batch_id: Uuid,
    pub number: u32,
}

/// 丢弃草稿批次命令
#[derive(Debug, Clone)]
pub struct DiscardDraftBatch {
    pub batch_id: Uuid,
}
