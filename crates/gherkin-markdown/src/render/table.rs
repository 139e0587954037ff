//! Width-aligned pipe tables for data tables and examples.

use super::Renderer;
use crate::model::Table;

impl Renderer<'_> {
    /// Emit the header, a separator and every body row.
    ///
    /// A table without rows emits nothing.
    pub(super) fn render_table(&mut self, table: &Table) {
        let Some(header) = table.header() else {
            return;
        };
        let widths = column_widths(table);

        self.write_line(&format_row(header, &widths));
        self.write_line(&separator_row(&widths));
        for row in table.body() {
            self.write_line(&format_row(row, &widths));
        }
    }
}

/// Character width of each header column across every row.
///
/// Cells beyond the header's column count do not contribute.
pub(super) fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0; table.header().map_or(0, <[String]>::len)];
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or_default();
        line.push_str(&format!(" {cell:<width$} |"));
    }
    line
}

fn separator_row(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line
}
