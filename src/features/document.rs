//! Parsed HTML documents and document-wide table lookup
//!
//! ## Example
//!
//! ```rust
//! use webtable::document::HtmlDocument;
//!
//! let doc = HtmlDocument::parse(
//!     "<table summary=\"Colors\"><tr><td>Red</td><td>rot</td></tr></table>",
//! );
//! let mut table = doc.table_with_summary("Colors").unwrap();
//! assert_eq!(table.cell_as_text(0, 1).unwrap(), "rot");
//! ```

use std::io::Read;

use super::search::{find_first, find_first_matching, MatchOptions, TableMatcher};
use crate::core::dom::{parse_html, parse_html_reader, DomNode};
use crate::core::table::{extract_tables, TableView};
use crate::utils::error::TableResult;

/// An HTML document and the options used to search its tables
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    root: DomNode,
    options: MatchOptions,
}

impl HtmlDocument {
    /// Parse a document from a string
    pub fn parse(html: &str) -> Self {
        Self::from_root(parse_html(html))
    }

    /// Parse a document from a UTF-8 byte stream
    pub fn from_reader<R: Read>(reader: R) -> TableResult<Self> {
        Ok(Self::from_root(parse_html_reader(reader)?))
    }

    /// Wrap an already built tree
    pub fn from_root(root: DomNode) -> Self {
        HtmlDocument {
            root,
            options: MatchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn root(&self) -> &DomNode {
        &self.root
    }

    /// Tables not nested inside another table, in document order
    pub fn tables(&self) -> Vec<TableView<'_>> {
        extract_tables(&self.root)
            .into_iter()
            .filter_map(|element| TableView::new(element).ok())
            .collect()
    }

    /// First table, depth-first through nested tables, matching `criteria`
    pub fn table_matching(&self, matcher: TableMatcher, criteria: &str) -> Option<TableView<'_>> {
        find_first_matching(self.tables(), matcher, criteria, &self.options)
    }

    /// First table, depth-first through nested tables, accepted by `predicate`
    pub fn table_where<P>(&self, mut predicate: P) -> Option<TableView<'_>>
    where
        P: FnMut(&mut TableView<'_>) -> bool,
    {
        find_first(self.tables(), &mut predicate)
    }

    /// Table whose first non-blank cell (after compaction) is `text`
    pub fn table_starting_with(&self, text: &str) -> Option<TableView<'_>> {
        self.table_matching(TableMatcher::FirstNonBlankCell, text)
    }

    /// Table whose first non-blank cell (after compaction) starts with `prefix`
    pub fn table_starting_with_prefix(&self, prefix: &str) -> Option<TableView<'_>> {
        self.table_matching(TableMatcher::FirstNonBlankCellPrefix, prefix)
    }

    pub fn table_with_summary(&self, summary: &str) -> Option<TableView<'_>> {
        self.table_matching(TableMatcher::Summary, summary)
    }

    pub fn table_with_id(&self, id: &str) -> Option<TableView<'_>> {
        self.table_matching(TableMatcher::Id, id)
    }
}
