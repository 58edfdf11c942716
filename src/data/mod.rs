//! Data layer - Static tables and constants
//!
//! This module contains the static data used while walking HTML trees:
//! - Tag classification (cells, non-rendered content, word breaks)

pub mod tags;

// Re-export commonly used items
pub use tags::{
    is_cell_tag, is_non_rendered_tag, is_word_break_tag, CELL_TAGS, NON_RENDERED_TAGS, ROW_TAG,
    TABLE_TAG, WORD_BREAK_TAGS,
};
