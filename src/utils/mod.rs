//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Text normalization and matching

pub mod error;
pub mod text;

// Re-export commonly used items
pub use error::{Axis, TableError, TableResult};
pub use text::{is_blank_text, normalize_whitespace, text_equals, text_starts_with};
