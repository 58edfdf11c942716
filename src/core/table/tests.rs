//! Tests for table extraction, grid building and compaction

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use super::*;
use crate::core::dom::{parse_html, DomNode};
use crate::utils::error::Axis;

// ============================================================================
// Helpers
// ============================================================================

struct TestCell {
    text: &'static str,
    row_span: usize,
    col_span: usize,
}

impl Spanned for TestCell {
    fn row_span(&self) -> usize {
        self.row_span
    }

    fn col_span(&self) -> usize {
        self.col_span
    }
}

fn c(text: &'static str) -> TestCell {
    TestCell {
        text,
        row_span: 1,
        col_span: 1,
    }
}

fn span(text: &'static str, row_span: usize, col_span: usize) -> TestCell {
    TestCell {
        text,
        row_span,
        col_span,
    }
}

/// Flatten declared rows into an arena plus per-row handles
fn declare(rows: Vec<Vec<TestCell>>) -> (Vec<TestCell>, Vec<Vec<CellId>>) {
    let mut cells = Vec::new();
    let mut handles = Vec::new();
    for row in rows {
        let mut ids = Vec::new();
        for cell in row {
            ids.push(CellId(cells.len()));
            cells.push(cell);
        }
        handles.push(ids);
    }
    (cells, handles)
}

/// Grid rendered as the test cells' texts, `.` for empty slots
fn texts(grid: &Grid, cells: &[TestCell]) -> Vec<Vec<&'static str>> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|slot| slot.map_or(".", |id| cells[id.index()].text))
                .collect()
        })
        .collect()
}

fn compact_texts(grid: &Grid, cells: &[TestCell]) -> Grid {
    compact(grid, cells, |id| !cells[id.index()].text.trim().is_empty())
}

fn first_table(root: &DomNode) -> TableView<'_> {
    TableView::new(extract_tables(root)[0]).expect("table element")
}

// ============================================================================
// Grid builder
// ============================================================================

#[test]
fn test_plain_grid() {
    let (cells, rows) = declare(vec![
        vec![c("One"), c("1")],
        vec![c("Two"), c("2")],
        vec![c("Three"), c("3")],
    ]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(
        texts(&grid, &cells),
        vec![vec!["One", "1"], vec!["Two", "2"], vec!["Three", "3"]]
    );
}

#[test]
fn test_short_rows_leave_trailing_empty_slots() {
    let (cells, rows) = declare(vec![vec![c("a"), c("b"), c("c")], vec![c("d")], vec![]]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(
        texts(&grid, &cells),
        vec![vec!["a", "b", "c"], vec!["d", ".", "."], vec![".", ".", "."]]
    );
    for row in grid.rows() {
        assert_eq!(row.len(), grid.column_count());
    }
}

#[test]
fn test_colspan_shares_handle() {
    let (cells, rows) = declare(vec![
        vec![span("Colors", 1, 2), c("Names")],
        vec![c("Red"), c("gules"), c("rot")],
    ]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.get(0, 0), grid.get(0, 1));
    assert_eq!(
        texts(&grid, &cells),
        vec![vec!["Colors", "Colors", "Names"], vec!["Red", "gules", "rot"]]
    );
}

#[test]
fn test_rowspan_pushes_later_cells_right() {
    let (cells, rows) = declare(vec![
        vec![c("a"), span("b", 2, 1), c("c")],
        vec![c("d"), c("e")],
    ]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(
        texts(&grid, &cells),
        vec![vec!["a", "b", "c"], vec!["d", "b", "e"]]
    );
    assert_eq!(grid.get(0, 1), grid.get(1, 1));
}

#[test]
fn test_block_span_identity() {
    let (cells, rows) = declare(vec![
        vec![span("X", 2, 2), c("a")],
        vec![c("b")],
        vec![c("c"), c("d"), c("e")],
    ]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.column_count(), 3);
    let anchor = grid.get(0, 0).flatten();
    assert!(anchor.is_some());
    for (row, column) in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(grid.get(row, column).flatten(), anchor);
    }
    assert_eq!(
        texts(&grid, &cells),
        vec![vec!["X", "X", "a"], vec!["X", "X", "b"], vec!["c", "d", "e"]]
    );
}

#[test]
fn test_rowspan_clipped_at_last_row() {
    let (cells, rows) = declare(vec![vec![span("tall", 5, 1)], vec![c("b")]]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(texts(&grid, &cells), vec![vec!["tall", "."], vec!["tall", "b"]]);
}

#[test]
fn test_overlapping_spans_stay_in_bounds() {
    let (cells, rows) = declare(vec![
        vec![c("x"), span("y", 2, 1)],
        vec![span("z", 1, 2)],
    ]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.column_count(), 3);
    assert_eq!(texts(&grid, &cells), vec![vec!["x", "y", "."], vec!["z", "y", "."]]);
}

#[test]
fn test_empty_table_grid() {
    let (cells, rows) = declare(vec![]);
    let grid = build_grid(&cells, &rows);
    assert_eq!(grid.row_count(), 0);
    assert_eq!(grid.column_count(), 0);
    assert!(grid.is_empty());
}

#[test]
fn test_grid_out_of_range() {
    let (cells, rows) = declare(vec![vec![c("a"), c("b")]]);
    let grid = build_grid(&cells, &rows);

    assert!(grid.cell_at(0, 1).is_ok());
    let err = grid.cell_at(0, 2).unwrap_err();
    assert_eq!(err.axis(), Some(Axis::Column));
    let err = grid.cell_at(1, 0).unwrap_err();
    assert_eq!(err.axis(), Some(Axis::Row));
}

#[test]
fn test_grid_row_past_end_is_none() {
    let (cells, rows) = declare(vec![vec![c("a"), c("b")]]);
    let grid = build_grid(&cells, &rows);

    assert_eq!(grid.row(0), Some(&[Some(CellId(0)), Some(CellId(1))][..]));
    assert_eq!(grid.row(1), None);
    assert_eq!(Grid::default().row(0), None);
}

// ============================================================================
// Compaction
// ============================================================================

#[test]
fn test_compact_drops_blank_rows_and_columns() {
    let (cells, rows) = declare(vec![
        vec![c("a"), c(" "), c("b")],
        vec![c(""), c(""), c("")],
        vec![c("c"), c(""), c("d")],
    ]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(texts(&compacted, &cells), vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_compact_keeps_anchor_column_of_lone_span() {
    let (cells, rows) = declare(vec![vec![span("Head", 1, 2)], vec![c(""), c("")]]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(texts(&compacted, &cells), vec![vec!["Head"]]);
}

#[test]
fn test_compact_span_not_needed_in_columns() {
    let (cells, rows) = declare(vec![
        vec![span("Head", 1, 3)],
        vec![c(""), c("a"), c("")],
    ]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(texts(&compacted, &cells), vec![vec!["Head"], vec!["a"]]);
}

#[test]
fn test_compact_span_keeps_its_row() {
    let (cells, rows) = declare(vec![
        vec![span("Head", 1, 2)],
        vec![c("a"), c("b")],
    ]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(
        texts(&compacted, &cells),
        vec![vec!["Head", "Head"], vec!["a", "b"]]
    );
}

#[test]
fn test_compact_blank_span_is_dropped() {
    let (cells, rows) = declare(vec![
        vec![span(" ", 2, 1), c("a")],
        vec![c("b")],
    ]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(texts(&compacted, &cells), vec![vec!["a"], vec!["b"]]);
}

#[test]
fn test_compact_all_blank_is_empty() {
    let (cells, rows) = declare(vec![vec![c(""), span(" ", 2, 2)], vec![c("")]]);
    let grid = build_grid(&cells, &rows);
    let compacted = compact_texts(&grid, &cells);

    assert_eq!(compacted.row_count(), 0);
    assert_eq!(compacted.column_count(), 0);
}

#[test]
fn test_compact_is_idempotent() {
    let (cells, rows) = declare(vec![
        vec![span("Left", 1, 3), span("Right", 1, 3)],
        vec![c(""), c("a"), c(""), c(""), c("b"), c("")],
        vec![span("Tall", 3, 2), c(""), c(""), c(""), c("")],
        vec![c(""), c("c"), c(""), c("")],
        vec![c(""), c(""), c(""), c("")],
    ]);
    let grid = build_grid(&cells, &rows);
    let once = compact_texts(&grid, &cells);
    let twice = compact_texts(&once, &cells);

    assert_eq!(once, twice);
    assert_eq!(texts(&once, &cells), texts(&twice, &cells));
}

/// Cells with text that appear somewhere in `grid`
fn visible_cells(grid: &Grid, cells: &[TestCell]) -> BTreeSet<CellId> {
    grid.positions()
        .filter_map(|(_, _, slot)| slot)
        .filter(|id| !cells[id.index()].text.trim().is_empty())
        .collect()
}

/// Rows whose spans overlap, leaving "c5" on an L-shaped set of slots
fn overlapping_rows() -> Vec<Vec<TestCell>> {
    vec![
        vec![span("a", 3, 3), span("", 1, 3)],
        vec![span("c2", 1, 3), span("c3", 2, 3)],
        vec![c("b"), span("c5", 2, 3), span("", 2, 1)],
        vec![span("", 1, 2)],
    ]
}

#[test]
fn test_compact_keeps_span_with_irregular_footprint() {
    let (cells, rows) = declare(overlapping_rows());
    let grid = build_grid(&cells, &rows);
    assert_eq!(grid.get(2, 4), grid.get(3, 6));
    assert_eq!(grid.get(2, 6), grid.get(1, 6));

    let once = compact_once(&grid, &cells, &mut |id| {
        !cells[id.index()].text.trim().is_empty()
    });
    assert_eq!(
        texts(&once, &cells),
        vec![vec!["a", "c2", "c3"], vec!["a", "b", "c3"], vec!["", ".", "c5"]]
    );
    assert_eq!(compact_texts(&grid, &cells), once);
}

#[test]
fn test_compact_keeps_every_visible_cell() {
    let layouts = vec![
        overlapping_rows(),
        vec![
            vec![c("x"), span("y", 2, 1)],
            vec![span("z", 1, 2)],
        ],
        vec![
            vec![span("Left", 1, 3), span("Right", 1, 3)],
            vec![c(""), c("a"), c(""), c(""), c("b"), c("")],
            vec![span("Tall", 3, 2), c(""), c(""), c(""), c("")],
            vec![c(""), c("c"), c(""), c("")],
        ],
        vec![
            vec![span("p", 2, 2), c(""), span("q", 3, 1)],
            vec![span("r", 2, 3)],
            vec![c(""), span("s", 1, 2)],
        ],
    ];

    for rows in layouts {
        let (cells, rows) = declare(rows);
        let grid = build_grid(&cells, &rows);
        let compacted = compact_texts(&grid, &cells);

        assert_eq!(visible_cells(&compacted, &cells), visible_cells(&grid, &cells));
        assert_eq!(compact_texts(&compacted, &cells), compacted);
    }
}

#[test]
fn test_compact_once_asks_oracle_once_per_cell() {
    let (cells, rows) = declare(vec![
        vec![span("Wide", 2, 3)],
        vec![],
        vec![c("a"), c("b"), c("c")],
    ]);
    let grid = build_grid(&cells, &rows);
    let mut calls = 0;
    let _ = compact_once(&grid, &cells, &mut |_| {
        calls += 1;
        true
    });

    assert_eq!(calls, 4);
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_parse_span_defaults() {
    assert_eq!(parse_span(None, MAX_COL_SPAN), 1);
    assert_eq!(parse_span(Some("3"), MAX_COL_SPAN), 3);
    assert_eq!(parse_span(Some(" 2 "), MAX_COL_SPAN), 2);
    assert_eq!(parse_span(Some("0"), MAX_COL_SPAN), 1);
    assert_eq!(parse_span(Some("-4"), MAX_COL_SPAN), 1);
    assert_eq!(parse_span(Some("two"), MAX_COL_SPAN), 1);
    assert_eq!(parse_span(Some(""), MAX_COL_SPAN), 1);
    assert_eq!(parse_span(Some("5000"), MAX_COL_SPAN), MAX_COL_SPAN);
}

#[test]
fn test_table_boundary_policy() {
    let table = DomNode::element("table");
    let row = DomNode::element("tr");
    let cell = DomNode::element("td");
    let body = DomNode::element("tbody");
    let text = DomNode::text("x");

    assert!(is_table_boundary(&table));
    assert!(!is_table_boundary(&row));

    assert_eq!(row_policy(&table), Visit::Skip);
    assert_eq!(row_policy(&row), Visit::Collect);
    assert_eq!(row_policy(&body), Visit::Descend);
    assert_eq!(row_policy(&text), Visit::Skip);

    assert_eq!(cell_policy(&table), Visit::Skip);
    assert_eq!(cell_policy(&cell), Visit::Collect);
    assert_eq!(cell_policy(&DomNode::element("th")), Visit::Collect);

    assert_eq!(table_policy(&table), Visit::Collect);
    assert_eq!(table_policy(&cell), Visit::Descend);
}

#[test]
fn test_extraction_skips_nested_tables() {
    let inner = DomNode::element("table").with_child(
        DomNode::element("tr").with_children(vec![
            DomNode::element("td").with_child(DomNode::text("inner a")),
            DomNode::element("td").with_child(DomNode::text("inner b")),
        ]),
    );
    let outer = DomNode::element("table").with_child(
        DomNode::element("tbody").with_child(
            DomNode::element("tr")
                .with_child(DomNode::element("td").with_child(inner)),
        ),
    );

    let rows = extract_rows(&outer);
    assert_eq!(rows.len(), 1);
    let cells = extract_cells(rows[0]);
    assert_eq!(cells.len(), 1);

    let nested = extract_tables(cells[0]);
    assert_eq!(nested.len(), 1);
    assert_eq!(extract_rows(nested[0]).len(), 1);
    assert_eq!(extract_cells(extract_rows(nested[0])[0]).len(), 2);
}

#[test]
fn test_row_groups_in_document_order() {
    let root = parse_html(
        "<table>\
           <thead><tr><th>h</th></tr></thead>\
           <tbody><tr><td>b1</td></tr><tr><td>b2</td></tr></tbody>\
           <tfoot><tr><td>f</td></tr></tfoot>\
         </table>",
    );
    let mut table = first_table(&root);

    assert_eq!(
        table.as_text(),
        vec![vec!["h"], vec!["b1"], vec!["b2"], vec!["f"]]
    );
    let header = table.cell_at(0, 0).unwrap().unwrap();
    assert_eq!(table.cell(header).unwrap().kind(), CellKind::Header);
}

#[test]
fn test_top_level_tables_only() {
    let root = parse_html(
        "<table><tr><td><table><tr><td>in</td></tr></table></td></tr></table>\
         <div><table><tr><td>second</td></tr></table></div>",
    );
    let tables = extract_tables(&root);
    assert_eq!(tables.len(), 2);
}

// ============================================================================
// Table view
// ============================================================================

#[test]
fn test_view_builds_lazily() {
    let root = parse_html("<table><tr><td>One</td><td>1</td></tr></table>");
    let mut table = first_table(&root);

    assert_eq!(table.phase(), GridPhase::Uncomputed);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.phase(), GridPhase::Built);
    table.purge_empty_cells();
    assert_eq!(table.phase(), GridPhase::Compacted);
}

#[test]
fn test_purge_from_uncomputed_builds_first() {
    let root = parse_html("<table><tr><td>One</td><td>&nbsp;</td></tr></table>");
    let mut table = first_table(&root);

    table.purge_empty_cells();
    assert_eq!(table.phase(), GridPhase::Compacted);
    assert_eq!(table.as_text(), vec![vec!["One"]]);
    // Later reads reuse the compacted grid
    assert_eq!(table.column_count(), 1);
    assert_eq!(table.phase(), GridPhase::Compacted);
}

#[test]
fn test_view_rejects_non_table() {
    let div = DomNode::element("div");
    let err = TableView::new(&div).unwrap_err();
    assert!(err.to_string().contains("<div>"));
}

#[test]
fn test_empty_slot_is_not_an_error() {
    let root = parse_html("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
    let mut table = first_table(&root);

    assert_eq!(table.cell_at(1, 1).unwrap(), None);
    assert_eq!(table.cell_as_text(1, 1).unwrap(), "");
    assert!(table.cell_at(1, 2).is_err());
    assert!(table.cell_as_text(2, 0).is_err());
}

#[test]
fn test_cell_with_id_is_exact() {
    let root = parse_html(
        r#"<table><tr><td id="first">a</td><td id="Target">b</td></tr>
           <tr><td id="target">c</td></tr></table>"#,
    );
    let mut table = first_table(&root);

    assert_eq!(table.cell_with_id("target").map(|cell| cell.text()), Some("c".to_string()));
    assert_eq!(table.cell_with_id("Target").map(|cell| cell.text()), Some("b".to_string()));
    assert!(table.cell_with_id("missing").is_none());
}

#[test]
fn test_nested_tables_in_cell_order() {
    let root = parse_html(
        r#"<table>
             <tr><td colspan="2"><table id="a"><tr><td>A</td></tr></table></td></tr>
             <tr><td><table id="b"><tr><td>B</td></tr></table></td>
                 <td><table id="c"><tr><td>C</td></tr></table>
                     <table id="d"><tr><td>D</td></tr></table></td></tr>
           </table>"#,
    );
    let mut table = first_table(&root);
    let ids: Vec<_> = table
        .nested_tables()
        .iter()
        .map(|nested| nested.id().unwrap_or_default())
        .collect();

    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_table_grid_display() {
    let root = parse_html("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
    let mut table = first_table(&root);
    assert_eq!(table.grid().to_string(), "a | b\nc | \n");
}
