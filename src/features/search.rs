//! Table search
//!
//! Depth-first search over a collection of tables: each table is tested in
//! turn, and when it fails, the tables nested in its cells are searched
//! before moving on to the next sibling.
//!
//! ## Example
//!
//! ```rust
//! use webtable::core::dom::parse_html;
//! use webtable::core::table::{extract_tables, TableView};
//! use webtable::search::{find_first_matching, MatchOptions, TableMatcher};
//!
//! let root = parse_html(r#"<table><tr><td><table id="inner"><tr><td>x</td></tr></table></td></tr></table>"#);
//! let tables = extract_tables(&root).into_iter().map(|t| TableView::new(t).unwrap());
//! let found = find_first_matching(tables, TableMatcher::Id, "inner", &MatchOptions::default());
//! assert!(found.is_some());
//! ```

use crate::core::table::TableView;
use crate::utils::text::{text_equals, text_starts_with};

/// Options for text matching in table searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare cell text and summaries without regard to case.
    /// `id` comparisons are always exact.
    pub ignore_case: bool,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive matching
    pub fn case_insensitive() -> Self {
        Self { ignore_case: true }
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// Built-in table predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMatcher {
    /// The first non-blank cell of the compacted table equals the criteria
    FirstNonBlankCell,
    /// The first non-blank cell of the compacted table starts with the criteria
    FirstNonBlankCellPrefix,
    /// The `summary` attribute equals the criteria
    Summary,
    /// The `id` attribute equals the criteria exactly
    Id,
}

impl TableMatcher {
    /// Test one table. The first-cell matchers compact the table first.
    pub fn matches(self, table: &mut TableView<'_>, criteria: &str, options: &MatchOptions) -> bool {
        match self {
            TableMatcher::FirstNonBlankCell => first_non_blank_cell(table)
                .is_some_and(|text| text_equals(&text, criteria, options.ignore_case)),
            TableMatcher::FirstNonBlankCellPrefix => first_non_blank_cell(table)
                .is_some_and(|text| text_starts_with(&text, criteria, options.ignore_case)),
            TableMatcher::Summary => table
                .summary()
                .is_some_and(|summary| text_equals(summary, criteria, options.ignore_case)),
            TableMatcher::Id => table.id() == Some(criteria),
        }
    }
}

fn first_non_blank_cell(table: &mut TableView<'_>) -> Option<String> {
    table.purge_empty_cells();
    table.grid().first_non_blank_text()
}

/// First table, depth-first, accepted by `predicate`
pub fn find_first<'a, I, P>(tables: I, predicate: &mut P) -> Option<TableView<'a>>
where
    I: IntoIterator<Item = TableView<'a>>,
    P: FnMut(&mut TableView<'a>) -> bool,
{
    for mut table in tables {
        if predicate(&mut table) {
            return Some(table);
        }
        let nested = table.nested_tables();
        if let Some(found) = find_first(nested, predicate) {
            return Some(found);
        }
    }
    None
}

/// First table, depth-first, matching `criteria` under `matcher`
pub fn find_first_matching<'a, I>(
    tables: I,
    matcher: TableMatcher,
    criteria: &str,
    options: &MatchOptions,
) -> Option<TableView<'a>>
where
    I: IntoIterator<Item = TableView<'a>>,
{
    let found = find_first(tables, &mut |table: &mut TableView<'a>| {
        matcher.matches(table, criteria, options)
    });
    log::debug!(
        "{:?} search for {:?}: {}",
        matcher,
        criteria,
        if found.is_some() { "found" } else { "no match" }
    );
    found
}
