//! Dense cell grid and the span-aware grid builder

use super::cell::{CellId, Spanned};
use crate::utils::error::{TableError, TableResult};

/// Rectangular grid of cell handles, stored row-major.
///
/// `None` marks a slot no declared cell reaches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    columns: usize,
    slots: Vec<Option<CellId>>,
}

impl Grid {
    /// Create an empty `rows x columns` grid
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            slots: vec![None; rows * columns],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot lookup; `None` when the coordinate is outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<Option<CellId>> {
        if row < self.rows && column < self.columns {
            Some(self.slots[row * self.columns + column])
        } else {
            None
        }
    }

    /// Checked slot lookup
    pub fn cell_at(&self, row: usize, column: usize) -> TableResult<Option<CellId>> {
        self.get(row, column)
            .ok_or_else(|| TableError::out_of_range(row, column, self.rows, self.columns))
    }

    /// One row of slots; `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[Option<CellId>]> {
        (row < self.rows).then(|| self.row_slots(row))
    }

    /// Rows in order, each exactly `column_count` long
    pub fn rows(&self) -> impl Iterator<Item = &[Option<CellId>]> + '_ {
        (0..self.rows).map(move |row| self.row_slots(row))
    }

    fn row_slots(&self, row: usize) -> &[Option<CellId>] {
        &self.slots[row * self.columns..(row + 1) * self.columns]
    }

    /// Every slot with its coordinate, row-major
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize, Option<CellId>)> + '_ {
        self.slots.iter().enumerate().map(move |(index, slot)| {
            (index / self.columns, index % self.columns, *slot)
        })
    }

    fn slot_mut(&mut self, row: usize, column: usize) -> &mut Option<CellId> {
        &mut self.slots[row * self.columns + column]
    }

    /// New grid holding only the given rows and columns, in the given order
    pub fn select(&self, rows: &[usize], columns: &[usize]) -> Grid {
        let mut selected = Grid::new(rows.len(), columns.len());
        for (new_row, &row) in rows.iter().enumerate() {
            for (new_column, &column) in columns.iter().enumerate() {
                *selected.slot_mut(new_row, new_column) = self.slots[row * self.columns + column];
            }
        }
        selected
    }
}

// ============================================================================
// Grid construction
// ============================================================================

/// Lay declared rows out on a rectangular grid.
///
/// `rows` lists, per declared row, the handles of its cells in declaration
/// order; `cells` is the arena those handles index.
///
/// The width is the largest number of slots any row needs once the cells
/// spanning down into it from earlier rows are counted. Each cell is
/// anchored at the first free column of its row and covers the rectangle of
/// its spans, clipped to the grid.
pub fn build_grid<C: Spanned>(cells: &[C], rows: &[Vec<CellId>]) -> Grid {
    let total_rows = rows.len();

    // Sizing pass
    let mut columns_required = vec![0usize; total_rows];
    for (i, row) in rows.iter().enumerate() {
        for &id in row {
            let cell = &cells[id.index()];
            let spanned_rows = cell.row_span().min(total_rows - i);
            for required in &mut columns_required[i..i + spanned_rows] {
                *required += cell.col_span();
            }
        }
    }
    let column_count = columns_required.iter().copied().max().unwrap_or(0);

    // Placement pass
    let mut grid = Grid::new(total_rows, column_count);
    for (i, row) in rows.iter().enumerate() {
        let mut cursor = 0;
        for &id in row {
            while cursor < column_count && grid.get(i, cursor).flatten().is_some() {
                cursor += 1;
            }
            if cursor >= column_count {
                log::trace!("cell {} in row {} has no free column, dropped", id, i);
                continue;
            }

            let cell = &cells[id.index()];
            let spanned_rows = cell.row_span().min(total_rows - i);
            let spanned_columns = cell.col_span().min(column_count - cursor);
            if spanned_rows < cell.row_span() || spanned_columns < cell.col_span() {
                log::trace!(
                    "cell {} at ({}, {}) clipped from {}x{} to {}x{}",
                    id,
                    i,
                    cursor,
                    cell.row_span(),
                    cell.col_span(),
                    spanned_rows,
                    spanned_columns
                );
            }

            for k in 0..spanned_rows {
                for l in 0..spanned_columns {
                    let slot = grid.slot_mut(i + k, cursor + l);
                    if slot.is_none() {
                        *slot = Some(id);
                    } else {
                        log::trace!(
                            "cell {} overlaps an earlier span at ({}, {})",
                            id,
                            i + k,
                            cursor + l
                        );
                    }
                }
            }
            cursor += spanned_columns;
        }
    }

    grid
}
