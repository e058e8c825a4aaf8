//! Command Handlers 实现

mod chapter_handlers;
mod draft_handlers;

pub use chapter_handlers::*;
pub use draft_handlers::*;
