//! Chapter Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChapterError {
    #[error("Chapter {0} has no content")]
    EmptyContent(u32),

    #[error("Chapter {0} not found in batch")]
    ChapterNotFound(u32),

    #[error("Cannot remove the only chapter of a batch")]
    LastChapter,

    #[error("No chapters could be parsed. Please check the format.")]
    NothingParsed,

    #[error("Starting chapter number must be at least 1")]
    InvalidStartingNumber,

    #[error("Starting chapter number {0} is too large to number every chapter")]
    StartingNumberTooLarge(u32),
}
