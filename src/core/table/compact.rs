//! Removal of rows and columns without visible text
//!
//! A row or column survives when a non-spanning cell in it has text. A
//! spanning cell with text that would otherwise disappear keeps one extra
//! row or column: its top row when it already reaches a kept column, its
//! left column when it already reaches a kept row, and its anchor row and
//! column when it reaches neither.
//!
//! Overlapping spans can leave a cell covering an irregular set of slots,
//! so the decision looks at the slots a cell really holds rather than at its
//! bounding box.

use fxhash::FxHashMap;
use indexmap::IndexMap;

use super::cell::{CellId, Spanned};
use super::grid::Grid;

/// One compaction pass over `grid`.
///
/// `has_text` is the visible-text oracle; it is asked at most once per cell.
pub fn compact_once<C, F>(grid: &Grid, cells: &[C], has_text: &mut F) -> Grid
where
    C: Spanned,
    F: FnMut(CellId) -> bool,
{
    let mut row_has_text = vec![false; grid.row_count()];
    let mut column_has_text = vec![false; grid.column_count()];
    let mut text_cache: FxHashMap<CellId, bool> = FxHashMap::default();
    // Slots of each visible spanning cell, row-major; the first is the anchor
    let mut spanning: IndexMap<CellId, Vec<(usize, usize)>> = IndexMap::new();

    for (row, column, slot) in grid.positions() {
        let Some(id) = slot else { continue };
        let visible = *text_cache.entry(id).or_insert_with(|| has_text(id));
        if !visible {
            continue;
        }

        if cells[id.index()].is_spanning() {
            spanning.entry(id).or_default().push((row, column));
        } else {
            row_has_text[row] = true;
            column_has_text[column] = true;
        }
    }

    // Anchors are first seen in row-major order, so this is row-major too.
    for (id, slots) in &spanning {
        let Some(&(anchor_row, anchor_column)) = slots.first() else {
            continue;
        };
        let shown = slots
            .iter()
            .any(|&(row, column)| row_has_text[row] && column_has_text[column]);
        if shown {
            continue;
        }

        let in_kept_column = slots.iter().find(|&&(_, column)| column_has_text[column]);
        let in_kept_row = slots.iter().find(|&&(row, _)| row_has_text[row]);
        match (in_kept_column, in_kept_row) {
            (Some(&(row, _)), _) => row_has_text[row] = true,
            (None, Some(&(_, column))) => column_has_text[column] = true,
            (None, None) => {
                row_has_text[anchor_row] = true;
                column_has_text[anchor_column] = true;
            }
        }
        log::trace!("spanning cell {} needs an extra row or column", id);
    }

    let rows: Vec<usize> = marked_indices(&row_has_text);
    let columns: Vec<usize> = marked_indices(&column_has_text);
    grid.select(&rows, &columns)
}

/// Compact until nothing more can be removed.
///
/// The result is a fixpoint, so compacting it again returns it unchanged.
pub fn compact<C, F>(grid: &Grid, cells: &[C], mut has_text: F) -> Grid
where
    C: Spanned,
    F: FnMut(CellId) -> bool,
{
    let mut current = compact_once(grid, cells, &mut has_text);
    loop {
        let next = compact_once(&current, cells, &mut has_text);
        if next.row_count() == current.row_count()
            && next.column_count() == current.column_count()
        {
            break;
        }
        current = next;
    }

    log::debug!(
        "compacted {}x{} grid to {}x{}",
        grid.row_count(),
        grid.column_count(),
        current.row_count(),
        current.column_count()
    );
    current
}

fn marked_indices(marks: &[bool]) -> Vec<usize> {
    marks
        .iter()
        .enumerate()
        .filter_map(|(index, &marked)| marked.then_some(index))
        .collect()
}
