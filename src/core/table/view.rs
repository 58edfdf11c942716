//! Consumer-facing table view
//!
//! A [`TableView`] borrows a `<table>` element and lazily lays its cells out
//! on a grid the first time a structural question is asked. The grid state
//! moves `Uncomputed -> Built -> Compacted`; compacting an uncomputed table
//! builds it first.

use std::fmt;

use fxhash::FxHashSet;

use super::cell::{Cell, CellId};
use super::compact::compact;
use super::extract::{extract_cells, extract_rows};
use super::grid::{build_grid, Grid};
use crate::core::dom::DomNode;
use crate::data::tags::TABLE_TAG;
use crate::utils::error::{TableError, TableResult};
use crate::utils::text::is_blank_text;

/// Where a table is in its grid lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Uncomputed,
    Built,
    Compacted,
}

/// A table's cell arena together with its current grid
#[derive(Debug, Clone)]
pub struct TableGrid<'a> {
    cells: Vec<Cell<'a>>,
    grid: Grid,
}

impl<'a> TableGrid<'a> {
    /// Extract rows and cells from `table` and lay them out
    pub fn build(table: &'a DomNode) -> Self {
        let mut cells = Vec::new();
        let mut rows = Vec::new();

        for row in extract_rows(table) {
            let ids = extract_cells(row)
                .into_iter()
                .map(|element| {
                    let id = CellId(cells.len());
                    cells.push(Cell::from_element(element));
                    id
                })
                .collect();
            rows.push(ids);
        }

        let grid = build_grid(&cells, &rows);
        log::debug!(
            "built {}x{} grid from {} declared cells",
            grid.row_count(),
            grid.column_count(),
            cells.len()
        );
        TableGrid { cells, grid }
    }

    /// Same cells, compacted grid
    fn compacted(self) -> Self {
        let cells = self.cells;
        let grid = compact(&self.grid, &cells, |id| {
            !is_blank_text(&cells[id.index()].text())
        });
        TableGrid { cells, grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Handle at a coordinate; `Ok(None)` for an empty slot
    pub fn cell_at(&self, row: usize, column: usize) -> TableResult<Option<CellId>> {
        self.grid.cell_at(row, column)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell<'a>> {
        self.cells.get(id.index())
    }

    /// Rendered text at a coordinate; empty for an empty slot
    pub fn cell_as_text(&self, row: usize, column: usize) -> TableResult<String> {
        Ok(self
            .cell_at(row, column)?
            .map(|id| self.cells[id.index()].text())
            .unwrap_or_default())
    }

    /// First cell, row-major, whose `id` attribute is exactly `id`
    pub fn cell_with_id(&self, id: &str) -> Option<CellId> {
        self.grid
            .positions()
            .filter_map(|(_, _, slot)| slot)
            .find(|&handle| self.cells[handle.index()].id() == Some(id))
    }

    /// The whole grid as text
    pub fn as_text(&self) -> Vec<Vec<String>> {
        self.grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|slot| {
                        slot.map(|id| self.cells[id.index()].text())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Distinct cells in row-major order of first appearance
    pub fn distinct_cells(&self) -> Vec<CellId> {
        let mut seen = FxHashSet::default();
        self.grid
            .positions()
            .filter_map(|(_, _, slot)| slot)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Text of the first slot, row-major, that renders non-blank
    pub fn first_non_blank_text(&self) -> Option<String> {
        self.distinct_cells()
            .into_iter()
            .map(|id| self.cells[id.index()].text())
            .find(|text| !is_blank_text(text))
    }
}

impl fmt::Display for TableGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.as_text() {
            writeln!(f, "{}", row.join(" | "))?;
        }
        Ok(())
    }
}

/// A `<table>` element and its lazily built grid
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    element: &'a DomNode,
    phase: GridPhase,
    /// `None` exactly while the phase is `Uncomputed`
    grid: Option<TableGrid<'a>>,
}

impl<'a> TableView<'a> {
    /// View over a `<table>` element
    pub fn new(element: &'a DomNode) -> TableResult<Self> {
        if element.is_element_named(TABLE_TAG) {
            Ok(Self::from_table_element(element))
        } else {
            let found = match element.tag_name() {
                Some(tag) => format!("<{}>", tag),
                None => "a non-element node".to_string(),
            };
            Err(TableError::not_a_table(found))
        }
    }

    pub(crate) fn from_table_element(element: &'a DomNode) -> Self {
        TableView {
            element,
            phase: GridPhase::Uncomputed,
            grid: None,
        }
    }

    pub fn element(&self) -> &'a DomNode {
        self.element
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.get_attribute(name)
    }

    pub fn id(&self) -> Option<&'a str> {
        self.attribute("id")
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.attribute("summary")
    }

    pub fn class_name(&self) -> Option<&'a str> {
        self.attribute("class")
    }

    pub fn title(&self) -> Option<&'a str> {
        self.attribute("title")
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    /// The current grid, building it on first use
    pub fn grid(&mut self) -> &TableGrid<'a> {
        let element = self.element;
        let phase = &mut self.phase;
        self.grid.get_or_insert_with(|| {
            *phase = GridPhase::Built;
            TableGrid::build(element)
        })
    }

    pub fn row_count(&mut self) -> usize {
        self.grid().row_count()
    }

    pub fn column_count(&mut self) -> usize {
        self.grid().column_count()
    }

    pub fn cell_at(&mut self, row: usize, column: usize) -> TableResult<Option<CellId>> {
        self.grid().cell_at(row, column)
    }

    pub fn cell(&mut self, id: CellId) -> Option<&Cell<'a>> {
        self.grid().cell(id)
    }

    pub fn cell_as_text(&mut self, row: usize, column: usize) -> TableResult<String> {
        self.grid().cell_as_text(row, column)
    }

    pub fn cell_with_id(&mut self, id: &str) -> Option<&Cell<'a>> {
        let grid = self.grid();
        grid.cell_with_id(id).and_then(|handle| grid.cell(handle))
    }

    pub fn as_text(&mut self) -> Vec<Vec<String>> {
        self.grid().as_text()
    }

    /// Drop rows and columns that show no text, keeping spanning cells
    /// visible. Repeating the call changes nothing.
    pub fn purge_empty_cells(&mut self) {
        let element = self.element;
        let grid = self
            .grid
            .take()
            .unwrap_or_else(|| TableGrid::build(element));
        self.grid = Some(grid.compacted());
        self.phase = GridPhase::Compacted;
    }

    /// Tables nested in this table's cells: cells in row-major order of
    /// first appearance, each cell's tables in document order
    pub fn nested_tables(&mut self) -> Vec<TableView<'a>> {
        let grid = self.grid();
        grid.distinct_cells()
            .into_iter()
            .filter_map(|id| grid.cell(id))
            .flat_map(|cell| cell.tables())
            .collect()
    }
}
