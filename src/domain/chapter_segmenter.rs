//! 章节分割器
//!
//! 将粘贴的稿件文本切分为有序的章节草稿。按优先级依次尝试以下策略，
//! 第一个产出非空章节的策略胜出：
//! 1. 标记行：以 `#` 开头的行即章节标题
//! 2. 标题行：`Chapter 3: Title`、`Part 2`、`Ch. 4`、`12. Title` 等
//! 3. 空行分块：每个块一章，块首短行视为标题
//! 4. 兜底：整篇文本作为一章
//!
//! 文本中解析出的章节号只用于识别，最终编号总是从起始编号连续递增。

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::chapter::ChapterDraft;

/// 默认章节标记字符
pub const DEFAULT_MARKER: char = '#';

/// 标题最大字符数，超过则视为正文
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;

/// 章节标题行：可选的 Chapter/Part/Ch. + 数字 + 可选分隔符 + 可选标题
static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(chapter|part|ch\.?)\s*)?(\d+)\s*([:.)\-–—])?\s*(.*)$")
        .expect("Invalid heading regex")
});

/// 分割配置
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// 章节标记字符
    pub marker: char,
    /// 标题最大字符数
    pub max_title_chars: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
        }
    }
}

/// 分割策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Marker,
    Heading,
    BlankLine,
    Fallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Marker => "marker",
            Strategy::Heading => "heading",
            Strategy::BlankLine => "blank_line",
            Strategy::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次分割的完整结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmentation {
    pub strategy: Strategy,
    pub chapters: Vec<ChapterDraft>,
    /// 编号超出 u32 范围，后面的章节未输出
    pub overflowed: bool,
}

/// 候选章节（编号前）
#[derive(Debug)]
struct Candidate {
    title: Option<String>,
    content: String,
}

impl Candidate {
    fn new(title: Option<String>, lines: &[&str]) -> Self {
        Self {
            title,
            content: join_trimmed(lines),
        }
    }
}

/// 以默认配置分割文本
pub fn segment(text: &str, starting_number: u32) -> Vec<ChapterDraft> {
    segment_with(text, starting_number, &SegmentConfig::default()).chapters
}

/// 以默认配置、从第 1 章开始分割（便捷方法）
pub fn segment_default(text: &str) -> Vec<ChapterDraft> {
    segment(text, 1)
}

/// 分割文本并返回胜出的策略
pub fn segment_with(text: &str, starting_number: u32, config: &SegmentConfig) -> Segmentation {
    let lines: Vec<&str> = text.lines().collect();

    for strategy in [Strategy::Marker, Strategy::Heading, Strategy::BlankLine] {
        let candidates = match strategy {
            Strategy::Marker => split_at_headings(&lines, |line| marker_heading(line, config)),
            Strategy::Heading => split_at_headings(&lines, |line| labeled_heading(line, config)),
            _ => split_by_blank_lines(&lines, config),
        };

        let (chapters, overflowed) = finalize(candidates, starting_number);
        if !chapters.is_empty() {
            return Segmentation {
                strategy,
                chapters,
                overflowed,
            };
        }
    }

    let whole = join_trimmed(&lines);
    let chapters = ChapterDraft::new(starting_number, None, whole)
        .map(|chapter| vec![chapter])
        .unwrap_or_default();

    Segmentation {
        strategy: Strategy::Fallback,
        chapters,
        overflowed: false,
    }
}

/// 去掉空候选并从起始编号连续编号
///
/// 编号溢出时停止输出，返回值第二项为 true
fn finalize(candidates: Vec<Candidate>, starting_number: u32) -> (Vec<ChapterDraft>, bool) {
    let mut chapters = Vec::new();

    for candidate in candidates.into_iter().filter(|c| !c.content.trim().is_empty()) {
        let Some(number) = u32::try_from(chapters.len())
            .ok()
            .and_then(|offset| starting_number.checked_add(offset))
        else {
            return (chapters, true);
        };
        if let Ok(chapter) = ChapterDraft::new(number, candidate.title, candidate.content) {
            chapters.push(chapter);
        }
    }

    (chapters, false)
}

/// 识别出的标题行，内层 None 表示没有标题文本
type Heading = Option<String>;

/// 按标题行切分；未找到任何标题行时返回空
///
/// 第一个标题行之前的文本成为一个无标题章节
fn split_at_headings<F>(lines: &[&str], detect: F) -> Vec<Candidate>
where
    F: Fn(&str) -> Option<Heading>,
{
    let mut candidates = Vec::new();
    let mut found = false;
    let mut title: Heading = None;
    let mut body: Vec<&str> = Vec::new();

    for &line in lines {
        match detect(line) {
            Some(heading) => {
                candidates.push(Candidate::new(title.take(), &body));
                body.clear();
                title = heading;
                found = true;
            }
            None => body.push(line),
        }
    }

    if !found {
        return Vec::new();
    }

    candidates.push(Candidate::new(title, &body));
    candidates
}

/// 策略 1：标记行
fn marker_heading(line: &str, config: &SegmentConfig) -> Option<Heading> {
    let rest = line.trim().strip_prefix(config.marker)?;
    let title = rest.trim_start_matches(config.marker).trim();
    Some(non_empty(title))
}

/// 策略 2：Chapter N 风格的标题行
fn labeled_heading(line: &str, config: &SegmentConfig) -> Option<Heading> {
    let trimmed = line.trim();
    let caps = HEADING_PATTERN.captures(trimmed)?;

    let has_label = caps.get(1).is_some();
    let has_separator = caps.get(3).is_some();
    let title = caps.get(4).map_or("", |m| m.as_str()).trim();

    if title.chars().count() > config.max_title_chars {
        return None;
    }

    // 没有 Chapter/Part 前缀时，"3 men walked in." 之类的正文不算标题
    if !has_label && !title.is_empty() && (!has_separator || ends_like_sentence(title)) {
        return None;
    }

    Some(non_empty(title))
}

/// 策略 3：按空行分块，少于两块时不适用
fn split_by_blank_lines(lines: &[&str], config: &SegmentConfig) -> Vec<Candidate> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for &line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    if blocks.len() < 2 {
        return Vec::new();
    }

    blocks
        .iter()
        .map(|block| match block.split_first() {
            Some((first, rest)) if !rest.is_empty() && looks_like_title(first, config) => {
                Candidate::new(Some(first.trim().to_string()), rest)
            }
            _ => Candidate::new(None, block),
        })
        .collect()
}

/// 块首行是否像标题：足够短，且不像一句完整的话
fn looks_like_title(line: &str, config: &SegmentConfig) -> bool {
    let line = line.trim();
    !line.is_empty()
        && line.chars().count() <= config.max_title_chars
        && !ends_like_sentence(line)
        && !line.ends_with([',', ';', '，', '；'])
}

/// 是否以句末标点结尾（忽略收尾的引号和括号）
fn ends_like_sentence(text: &str) -> bool {
    text.trim_end_matches(['"', '\'', '\u{201D}', '\u{2019}', ')', '）'])
        .ends_with(['.', '!', '?', '…', '。', '！', '？'])
}

/// 拼接行并去掉首尾空白
fn join_trimmed(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(chapters: &[ChapterDraft]) -> Vec<&str> {
        chapters.iter().map(|c| c.title()).collect()
    }

    fn assert_contiguous(chapters: &[ChapterDraft], start: u32) {
        for (offset, chapter) in chapters.iter().enumerate() {
            assert_eq!(chapter.number(), start + offset as u32);
            assert!(!chapter.content().trim().is_empty());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("", 1).is_empty());
        assert!(segment("   \n\n  ", 1).is_empty());
        assert_eq!(segment_with("\n\t\n", 1, &SegmentConfig::default()).strategy, Strategy::Fallback);
    }

    #[test]
    fn test_marker_strategy() {
        let result = segment_with(
            "#Intro\n\nHello world.\n\n#Next\n\nBye.",
            1,
            &SegmentConfig::default(),
        );

        assert_eq!(result.strategy, Strategy::Marker);
        assert_eq!(result.chapters.len(), 2);
        assert_eq!(result.chapters[0].number(), 1);
        assert_eq!(result.chapters[0].title(), "Intro");
        assert_eq!(result.chapters[0].content(), "Hello world.");
        assert_eq!(result.chapters[1].number(), 2);
        assert_eq!(result.chapters[1].title(), "Next");
        assert_eq!(result.chapters[1].content(), "Bye.");
    }

    #[test]
    fn test_marker_without_title_and_empty_body() {
        let chapters = segment("#\nFirst body.\n# Empty\n\n##  Markdown style\nSecond body.", 3);

        // "Empty" 没有正文被丢弃，后续章节连续编号
        assert_eq!(chapters.len(), 2);
        assert_eq!(titles(&chapters), vec!["Chapter 3", "Markdown style"]);
        assert_eq!(chapters[1].number(), 4);
        assert_eq!(chapters[1].content(), "Second body.");
    }

    #[test]
    fn test_marker_preamble_becomes_chapter() {
        let chapters = segment("Author's note here.\n#One\nBody.", 1);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title(), "Chapter 1");
        assert_eq!(chapters[0].content(), "Author's note here.");
        assert_eq!(chapters[1].title(), "One");
    }

    #[test]
    fn test_heading_strategy_renumbers() {
        let result = segment_with(
            "Chapter 1: Dawn\nText one.\n\nChapter 2: Dusk\nText two.",
            5,
            &SegmentConfig::default(),
        );

        assert_eq!(result.strategy, Strategy::Heading);
        assert_eq!(result.chapters.len(), 2);
        assert_eq!(result.chapters[0].number(), 5);
        assert_eq!(result.chapters[1].number(), 6);
        assert_eq!(titles(&result.chapters), vec!["Dawn", "Dusk"]);
        assert_eq!(result.chapters[0].content(), "Text one.");
        assert_eq!(result.chapters[1].content(), "Text two.");
    }

    #[test]
    fn test_heading_variants() {
        let text = "CHAPTER 10\nTen.\nPart 3 - The Road\nThree.\nCh. 4 Rain\nFour.\n12. Finale\nTwelve.";
        let chapters = segment(text, 1);

        assert_eq!(chapters.len(), 4);
        assert_eq!(titles(&chapters), vec!["Chapter 1", "The Road", "Rain", "Finale"]);
        assert_eq!(chapters[3].content(), "Twelve.");
    }

    #[test]
    fn test_heading_without_title_uses_final_number() {
        let chapters = segment("Chapter 40\nBody one.\nChapter 41\nBody two.", 1);
        assert_eq!(titles(&chapters), vec!["Chapter 1", "Chapter 2"]);
    }

    #[test]
    fn test_prose_starting_with_number_is_not_heading() {
        assert!(labeled_heading("3 men walked into the bar", &SegmentConfig::default()).is_none());
        assert!(labeled_heading("1. He left at dawn.", &SegmentConfig::default()).is_none());
        assert!(labeled_heading("Chapters 1-3 were long", &SegmentConfig::default()).is_none());
        assert!(labeled_heading("Particle 5", &SegmentConfig::default()).is_none());
        assert_eq!(
            labeled_heading("  chapter 7: The Gate  ", &SegmentConfig::default()),
            Some(Some("The Gate".to_string()))
        );
        assert_eq!(labeled_heading("12", &SegmentConfig::default()), Some(None));
    }

    #[test]
    fn test_heading_title_too_long() {
        let config = SegmentConfig {
            max_title_chars: 10,
            ..SegmentConfig::default()
        };
        assert!(labeled_heading("Chapter 1: A title that is far too long", &config).is_none());
    }

    #[test]
    fn test_blank_line_strategy_sentences() {
        let result = segment_with(
            "Just some prose.\n\nMore prose without headings.",
            1,
            &SegmentConfig::default(),
        );

        assert_eq!(result.strategy, Strategy::BlankLine);
        assert_eq!(titles(&result.chapters), vec!["Chapter 1", "Chapter 2"]);
        assert_eq!(result.chapters[0].content(), "Just some prose.");
        assert_eq!(result.chapters[1].content(), "More prose without headings.");
    }

    #[test]
    fn test_blank_line_strategy_short_first_line_is_title() {
        let chapters = segment(
            "The Storm\nRain fell all night.\n\n\n   \nMorning\nThe sun rose.\n\n\"Wait.\"\nShe ran.",
            2,
        );

        assert_eq!(chapters.len(), 3);
        assert_eq!(titles(&chapters), vec!["The Storm", "Morning", "Chapter 4"]);
        assert_eq!(chapters[0].content(), "Rain fell all night.");
        assert_eq!(chapters[2].content(), "\"Wait.\"\nShe ran.");
        assert_contiguous(&chapters, 2);
    }

    #[test]
    fn test_fallback_single_paragraph() {
        let result = segment_with(
            "Single paragraph, no breaks, no markers.",
            1,
            &SegmentConfig::default(),
        );

        assert_eq!(result.strategy, Strategy::Fallback);
        assert_eq!(result.chapters.len(), 1);
        assert_eq!(result.chapters[0].number(), 1);
        assert_eq!(result.chapters[0].title(), "Chapter 1");
        assert_eq!(result.chapters[0].content(), "Single paragraph, no breaks, no markers.");
        assert_eq!(result.chapters[0].word_count(), 6);
    }

    #[test]
    fn test_fallback_keeps_multi_line_block() {
        let chapters = segment("\n\nTitle-ish line\nand more text\n\n", 9);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].number(), 9);
        assert_eq!(chapters[0].content(), "Title-ish line\nand more text");
    }

    #[test]
    fn test_crlf_line_endings() {
        let chapters = segment("#A\r\nalpha\r\n#B\r\nbeta\r\n", 1);
        assert_eq!(titles(&chapters), vec!["A", "B"]);
        assert_eq!(chapters[0].content(), "alpha");
    }

    #[test]
    fn test_content_trimmed_inner_layout_preserved() {
        let chapters = segment("#One\n\n  Indented first.\n\n\n  Second paragraph.\n\n", 1);
        assert_eq!(chapters[0].content(), "Indented first.\n\n\n  Second paragraph.");

        let chapters = segment("#A\n    indented body\n", 1);
        assert_eq!(chapters[0].content(), "indented body");
    }

    #[test]
    fn test_fallback_content_fully_trimmed() {
        let result = segment_with("   Single paragraph.   ", 1, &SegmentConfig::default());
        assert_eq!(result.strategy, Strategy::Fallback);
        assert_eq!(result.chapters[0].content(), "Single paragraph.");
    }

    #[test]
    fn test_segmented_content_survives_unchanged_edit() {
        let mut chapters = segment("#A\n  first line\n  second line  \n#B\nb", 1);
        let original = chapters[0].content().to_string();
        chapters[0].set_content(original.clone()).unwrap();
        assert_eq!(chapters[0].content(), original);
    }

    #[test]
    fn test_long_numeral_stays_out_of_title() {
        let chapters = segment("Chapter 1234567\nBody.\nChapter 2\nMore.", 1);
        assert_eq!(titles(&chapters), vec!["Chapter 1", "Chapter 2"]);
        assert_eq!(chapters[0].content(), "Body.");
    }

    #[test]
    fn test_numbering_never_overflows() {
        let result = segment_with("a\n\nb\n\nc", u32::MAX - 1, &SegmentConfig::default());
        assert!(result.overflowed);
        let numbers: Vec<u32> = result.chapters.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![u32::MAX - 1, u32::MAX]);

        let result = segment_with("a\n\nb", u32::MAX - 1, &SegmentConfig::default());
        assert!(!result.overflowed);
        assert_contiguous(&result.chapters, u32::MAX - 1);

        let result = segment_with("just one", u32::MAX, &SegmentConfig::default());
        assert!(!result.overflowed);
        assert_eq!(result.chapters[0].number(), u32::MAX);
    }

    #[test]
    fn test_custom_marker() {
        let config = SegmentConfig {
            marker: '@',
            ..SegmentConfig::default()
        };
        let result = segment_with("@Start\nGo.\n#not a chapter\n@End\nStop.", 1, &config);
        assert_eq!(result.strategy, Strategy::Marker);
        assert_eq!(titles(&result.chapters), vec!["Start", "End"]);
        assert_eq!(result.chapters[0].content(), "Go.\n#not a chapter");
    }

    #[test]
    fn test_invariants_hold_across_inputs() {
        let inputs = [
            "",
            "#\n#\n#",
            "# Only titles\n# Another",
            "Chapter 1\n\nChapter 2\nbody",
            "a\n\nb\n\nc\n\nd",
            "Prologue text\nChapter 9: Nine\nnine\n1) One\none",
            "   leading\n\n\n\ntrailing   \n",
            "第一章\n内容。\n\n第二章\n更多内容。",
        ];

        for input in inputs {
            for start in [1, 5, 100, u32::MAX - 7] {
                let chapters = segment(input, start);
                assert_contiguous(&chapters, start);
                // 幂等
                assert_eq!(chapters, segment(input, start));
            }
        }
    }

    #[test]
    fn test_only_titles_falls_through() {
        // 所有标记章节都没有正文时，退回到后续策略
        let result = segment_with("# Only titles\n# Another", 1, &SegmentConfig::default());
        assert_eq!(result.strategy, Strategy::Fallback);
        assert_eq!(result.chapters.len(), 1);
        assert_eq!(result.chapters[0].content(), "# Only titles\n# Another");
    }

    #[test]
    fn test_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&Strategy::BlankLine).unwrap();
        assert_eq!(json, "\"blank_line\"");
        assert_eq!(Strategy::Heading.to_string(), "heading");
    }
}
