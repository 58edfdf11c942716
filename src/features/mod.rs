//! Feature modules - Table lookup and presentation
//!
//! This module contains the consumer-facing layers built on the table engine:
//! - Table search predicates and depth-first search
//! - Parsed documents and document-wide lookup
//! - Owned snapshots of table grids

pub mod document;
pub mod search;
pub mod snapshot;

// Re-export commonly used types
pub use document::HtmlDocument;
pub use search::{find_first, find_first_matching, MatchOptions, TableMatcher};
pub use snapshot::TableSnapshot;
