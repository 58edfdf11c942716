//! # webtable
//!
//! Span-aware HTML table grids for HTML testing, written in Rust.
//!
//! ## Features
//!
//! - **Grid Reconstruction**: Lays declared rows and cells out on a dense,
//!   rectangular grid honouring `rowspan` and `colspan`
//! - **Shared Cells**: Every slot covered by a spanning cell holds the same handle
//! - **Compaction**: Removes rows and columns that render no text while keeping
//!   spanning headers visible
//! - **Nested Tables**: Tables inside cells never leak into the outer grid and
//!   are searched depth-first on demand
//! - **Table Search**: Find tables by first cell text, prefix, summary or id
//!
//! ## Usage Examples
//!
//! ### Cell Lookup
//!
//! ```rust
//! use webtable::HtmlDocument;
//!
//! let doc = HtmlDocument::parse(r#"
//!     <table id="colors">
//!       <tr><th>Color</th><th>Blazon</th><th>German</th></tr>
//!       <tr><td>Red</td><td rowspan="2">gules</td><td>rot</td></tr>
//!       <tr><td>Green</td><td>grün</td></tr>
//!     </table>
//! "#);
//!
//! let mut table = doc.table_with_id("colors").unwrap();
//! assert_eq!(table.row_count(), 3);
//! assert_eq!(table.cell_at(1, 1).unwrap(), table.cell_at(2, 1).unwrap());
//! assert_eq!(table.cell_as_text(2, 2).unwrap(), "grün");
//! ```
//!
//! ### Compaction
//!
//! ```rust
//! use webtable::HtmlDocument;
//!
//! let doc = HtmlDocument::parse(
//!     "<table><tr><td>&nbsp;</td><td>One</td></tr><tr><td>&nbsp;</td><td>Two</td></tr></table>",
//! );
//! let mut table = doc.table_starting_with("One").unwrap();
//! assert_eq!(table.as_text(), vec![vec!["One"], vec!["Two"]]);
//! ```

/// Core modules - DOM adapter and table engine
pub mod core;

/// Data layer - static tag tables
pub mod data;

/// Feature modules - search, documents, snapshots
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core types
pub use crate::core::dom::{parse_html, parse_html_reader, DomNode, DomNodeType};
pub use crate::core::table::{
    Cell, CellId, CellKind, Grid, GridPhase, Spanned, TableGrid, TableView,
};

// Re-export feature modules
pub use features::document;
pub use features::search;
pub use features::snapshot;
pub use features::{HtmlDocument, MatchOptions, TableMatcher, TableSnapshot};

// Re-export utilities
pub use utils::error::{Axis, TableError, TableResult};

/// Parse `html` and return the text grid of every top-level table
///
/// # Arguments
/// * `html` - HTML document source
/// * `purge` - Whether to remove blank rows and columns first
pub fn tables_as_text(html: &str, purge: bool) -> Vec<Vec<Vec<String>>> {
    let doc = HtmlDocument::parse(html);
    doc.tables()
        .into_iter()
        .map(|mut table| {
            if purge {
                table.purge_empty_cells();
            }
            table.as_text()
        })
        .collect()
}
