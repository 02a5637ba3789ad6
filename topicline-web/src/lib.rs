//! Web acquisition and extraction utilities.
//!
//! - [`source`]: the [`PageSource`] capability and its HTTP implementation
//! - [`extract`]: title and paragraph extraction from raw HTML

pub mod extract;
pub mod source;

pub use extract::{PageContent, extract_page};
pub use source::{HttpPageSource, PageCapture, PageSource};
