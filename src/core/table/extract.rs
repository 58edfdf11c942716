//! Row, cell and nested-table extraction
//!
//! All extraction is a depth-first walk in document order driven by a
//! [`Visit`] policy. A nested `<table>` is a boundary: rows and cells found
//! inside it belong to that table, not to the one being walked.

use crate::core::dom::DomNode;
use crate::data::tags::{is_cell_tag, ROW_TAG, TABLE_TAG};

/// What a walk does with a node it reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Record the node and do not look inside it
    Collect,
    /// Look at the node's children
    Descend,
    /// Ignore the node and its subtree
    Skip,
}

/// Whether reaching `node` means entering another table
pub fn is_table_boundary(node: &DomNode) -> bool {
    node.is_element_named(TABLE_TAG)
}

/// Policy for the rows of a table
pub fn row_policy(node: &DomNode) -> Visit {
    if is_table_boundary(node) {
        Visit::Skip
    } else if node.is_element_named(ROW_TAG) {
        Visit::Collect
    } else if node.is_element() {
        Visit::Descend
    } else {
        Visit::Skip
    }
}

/// Policy for the cells of a row
pub fn cell_policy(node: &DomNode) -> Visit {
    if is_table_boundary(node) {
        Visit::Skip
    } else if node.tag_name().is_some_and(is_cell_tag) {
        Visit::Collect
    } else if node.is_element() {
        Visit::Descend
    } else {
        Visit::Skip
    }
}

/// Policy for the nearest tables below a node
pub fn table_policy(node: &DomNode) -> Visit {
    if is_table_boundary(node) {
        Visit::Collect
    } else if node.is_element() {
        Visit::Descend
    } else {
        Visit::Skip
    }
}

/// Walk the descendants of `root` (not `root` itself) in document order and
/// return every node the policy collects.
pub fn collect_descendants<'a, P>(root: &'a DomNode, policy: P) -> Vec<&'a DomNode>
where
    P: Fn(&DomNode) -> Visit,
{
    let mut found = Vec::new();
    let mut stack: Vec<&'a DomNode> = root.children.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match policy(node) {
            Visit::Collect => found.push(node),
            Visit::Descend => stack.extend(node.children.iter().rev()),
            Visit::Skip => {}
        }
    }

    found
}

/// Rows that belong to `table` itself
pub fn extract_rows(table: &DomNode) -> Vec<&DomNode> {
    collect_descendants(table, row_policy)
}

/// Cells that belong to `row` itself
pub fn extract_cells(row: &DomNode) -> Vec<&DomNode> {
    collect_descendants(row, cell_policy)
}

/// The nearest `<table>` elements below `node`
pub fn extract_tables(node: &DomNode) -> Vec<&DomNode> {
    collect_descendants(node, table_policy)
}
