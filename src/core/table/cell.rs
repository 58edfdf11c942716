//! Cell types and span parsing

use std::fmt;

use crate::core::dom::DomNode;

use super::extract::extract_tables;
use super::view::TableView;

/// Largest `colspan` honoured, as in the HTML table model
pub const MAX_COL_SPAN: usize = 1000;
/// Largest `rowspan` honoured, as in the HTML table model
pub const MAX_ROW_SPAN: usize = 65534;

/// Handle of a cell inside its table's arena.
///
/// Every grid slot covered by the same declared cell holds an equal `CellId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that occupies a rectangle of grid slots
pub trait Spanned {
    /// Number of rows covered (at least 1)
    fn row_span(&self) -> usize;
    /// Number of columns covered (at least 1)
    fn col_span(&self) -> usize;

    fn is_spanning(&self) -> bool {
        self.row_span() > 1 || self.col_span() > 1
    }
}

/// Header (`th`) or data (`td`) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

impl CellKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "th" {
            CellKind::Header
        } else {
            CellKind::Data
        }
    }
}

/// One declared table cell
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    element: &'a DomNode,
    kind: CellKind,
    row_span: usize,
    col_span: usize,
}

impl<'a> Cell<'a> {
    /// Build a cell from its `td`/`th` element
    pub fn from_element(element: &'a DomNode) -> Self {
        Cell {
            element,
            kind: CellKind::from_tag(element.tag_name().unwrap_or_default()),
            row_span: parse_span(element.get_attribute("rowspan"), MAX_ROW_SPAN),
            col_span: parse_span(element.get_attribute("colspan"), MAX_COL_SPAN),
        }
    }

    /// The content handle
    pub fn element(&self) -> &'a DomNode {
        self.element
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn id(&self) -> Option<&'a str> {
        self.element.get_attribute("id")
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.get_attribute(name)
    }

    /// Rendered text of the cell content
    pub fn text(&self) -> String {
        self.element.text_content()
    }

    /// Tables nested directly in this cell's content
    pub fn tables(&self) -> Vec<TableView<'a>> {
        extract_tables(self.element)
            .into_iter()
            .map(TableView::from_table_element)
            .collect()
    }
}

impl Spanned for Cell<'_> {
    fn row_span(&self) -> usize {
        self.row_span
    }

    fn col_span(&self) -> usize {
        self.col_span
    }
}

/// Parse a `rowspan`/`colspan` value. Missing, unparsable, zero and
/// negative values all mean 1; large values are capped at `max`.
pub fn parse_span(value: Option<&str>, max: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .map_or(1, |n| n.min(max))
}
