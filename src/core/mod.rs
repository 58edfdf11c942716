//! Core modules
//!
//! This module contains the table engine and the tree it walks:
//! - `dom`: owned HTML element tree built with html5ever
//! - `table`: row/cell extraction, grid building, compaction and table views

pub mod dom;
pub mod table;

// Re-export main types and functions
pub use dom::{parse_html, parse_html_reader, DomNode, DomNodeType};
pub use table::{Cell, CellId, CellKind, Grid, GridPhase, TableGrid, TableView};
