//! HTTP Handlers

mod chapters;
mod drafts;
mod ping;

pub use chapters::*;
pub use drafts::*;
pub use ping::*;
