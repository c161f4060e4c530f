//! Annotations over a single analyzed document
//!
//! - [`locator`]: maps model-identified snippets back to char ranges
//! - [`risk`]: reduces risk severities to one overall level
//! - [`tags`]: deduplicates and caps model tags

pub mod locator;
pub mod risk;
pub mod tags;

pub use locator::{Annotatable, FoldedText, SnippetLocator};
pub use risk::{overall, overall_severity};
pub use tags::retain_tags;
