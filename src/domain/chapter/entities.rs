//! Chapter Context - Entities

use serde::Serialize;

use super::ChapterError;

/// 生成默认章节标题
pub fn fallback_title(number: u32) -> String {
    format!("Chapter {}", number)
}

/// 统计以空白分隔的词数
pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}

/// 章节草稿 - 分割器的输出单位
///
/// 不变量:
/// - title 不可为空（缺省为 "Chapter {number}"）
/// - content 去除首尾空白后不可为空
/// - word_count 始终与 content 一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDraft {
    number: u32,
    title: String,
    content: String,
    word_count: usize,
    /// 标题是否由编号生成（重新编号时随之刷新）
    #[serde(skip)]
    generated_title: bool,
}

impl ChapterDraft {
    pub fn new(
        number: u32,
        title: Option<String>,
        content: impl Into<String>,
    ) -> Result<Self, ChapterError> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(ChapterError::EmptyContent(number));
        }

        let word_count = count_words(&content);
        let mut draft = Self {
            number,
            title: String::new(),
            content,
            word_count,
            generated_title: false,
        };
        draft.set_title(title);
        Ok(draft)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn has_generated_title(&self) -> bool {
        self.generated_title
    }

    /// 修改标题，空白标题回退为 "Chapter {number}"
    pub fn set_title(&mut self, title: Option<String>) {
        match title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
            Some(title) => {
                self.title = title;
                self.generated_title = false;
            }
            None => {
                self.title = fallback_title(self.number);
                self.generated_title = true;
            }
        }
    }

    /// 修改正文并重新计算词数
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ChapterError> {
        let content = content.into();
        let content = content.trim();
        if content.is_empty() {
            return Err(ChapterError::EmptyContent(self.number));
        }
        self.word_count = count_words(content);
        self.content = content.to_string();
        Ok(())
    }

    /// 重新编号
    pub(crate) fn renumber(&mut self, number: u32) {
        self.number = number;
        if self.generated_title {
            self.title = fallback_title(number);
        }
    }
}
