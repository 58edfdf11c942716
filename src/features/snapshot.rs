//! Owned renderings of table grids

use std::fmt;

use crate::core::table::TableView;

/// A table's attributes and grid text, detached from the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableSnapshot {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<String>>,
}

impl TableSnapshot {
    /// Capture the table's current grid (built, or compacted if it was)
    pub fn capture(table: &mut TableView<'_>) -> Self {
        TableSnapshot {
            id: table.id().map(str::to_string),
            summary: table.summary().map(str::to_string),
            rows: table.row_count(),
            columns: table.column_count(),
            cells: table.as_text(),
        }
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table")?;
        if let Some(ref id) = self.id {
            write!(f, " #{}", id)?;
        }
        if let Some(ref summary) = self.summary {
            write!(f, " \"{}\"", summary)?;
        }
        writeln!(f, " ({}x{})", self.rows, self.columns)?;

        // Pad each column to its widest cell
        let widths: Vec<usize> = (0..self.columns)
            .map(|column| {
                self.cells
                    .iter()
                    .map(|row| row[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &self.cells {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(text, &width)| format!("{:<width$}", text, width = width))
                .collect();
            writeln!(f, "| {} |", padded.join(" | "))?;
        }
        Ok(())
    }
}

impl TableView<'_> {
    /// Owned snapshot of the current grid
    pub fn snapshot(&mut self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::parse_html;
    use crate::core::table::extract_tables;

    #[test]
    fn test_snapshot_display() {
        let root = parse_html(
            r#"<table id="colors"><tr><td colspan="2">Colors</td></tr><tr><td>Red</td><td>rot</td></tr></table>"#,
        );
        let mut table = TableView::new(extract_tables(&root)[0]).unwrap();
        let snapshot = table.snapshot();

        assert_eq!(snapshot.rows, 2);
        assert_eq!(snapshot.columns, 2);
        assert_eq!(
            snapshot.to_string(),
            "table #colors (2x2)\n| Colors | Colors |\n| Red    | rot    |\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_json() {
        let root = parse_html("<table><tr><td>a</td></tr></table>");
        let mut table = TableView::new(extract_tables(&root)[0]).unwrap();
        let json = table.snapshot().to_json().unwrap();
        assert!(json.contains("\"cells\""));
        assert!(json.contains("\"a\""));
    }
}
