//! HTML Table Grid Engine
//!
//! Reconstructs the logical grid of an HTML table from its declared rows and
//! cells, honouring `rowspan`/`colspan`, and compacts it down to the rows and
//! columns that actually show text.
//!
//! # Architecture
//!
//! ```text
//! <table> -> Row/Cell Extraction -> Grid Builder -> (Compactor) -> TableView
//! ```
//!
//! Cells live in a per-table arena and the grid stores [`CellId`] handles, so
//! every slot covered by one spanning cell holds the same handle.
//!
//! # Example
//!
//! ```rust
//! use webtable::core::dom::parse_html;
//! use webtable::core::table::{extract_tables, TableView};
//!
//! let root = parse_html(
//!     "<table><tr><td colspan=2>Colors</td><td>Names</td></tr>\
//!      <tr><td>Red</td><td>gules</td><td>rot</td></tr></table>",
//! );
//! let mut table = TableView::new(extract_tables(&root)[0]).unwrap();
//! assert_eq!(table.column_count(), 3);
//! assert_eq!(table.cell_at(0, 0).unwrap(), table.cell_at(0, 1).unwrap());
//! ```

mod cell;
mod compact;
mod extract;
mod grid;
mod view;

#[cfg(test)]
mod tests;

// Re-export public API
pub use cell::{parse_span, Cell, CellId, CellKind, Spanned, MAX_COL_SPAN, MAX_ROW_SPAN};
pub use compact::{compact, compact_once};
pub use extract::{
    cell_policy, collect_descendants, extract_cells, extract_rows, extract_tables,
    is_table_boundary, row_policy, table_policy, Visit,
};
pub use grid::{build_grid, Grid};
pub use view::{GridPhase, TableGrid, TableView};
