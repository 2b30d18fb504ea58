use super::{HeatmapPanel, Renderer};
use crate::error::HeatmapError;
use ndarray::Array2;

/// Space between two columns of a text table.
const SEP: &str = "  ";

fn label(labels: &[String], i: usize) -> &str {
    labels.get(i).map(String::as_str).unwrap_or("")
}

/// Renders heatmaps as fixed-width text tables.
///
/// Each cell is printed with `precision` decimal places and right-aligned;
/// row labels are left-aligned. The output only depends on its inputs.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    precision: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl TextRenderer {
    /// Creates a renderer printing `precision` decimal places.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Number of decimal places of a cell.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Renders a single table with row and column headers.
    ///
    /// Missing labels are rendered as empty strings.
    pub fn render_matrix(
        &self,
        values: &Array2<f64>,
        row_labels: &[String],
        col_labels: &[String],
    ) -> String {
        let cells = values
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:.*}", self.precision, v))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let row_width = (0..values.nrows())
            .map(|i| label(row_labels, i).chars().count())
            .max()
            .unwrap_or(0);
        let cell_width = (0..values.ncols())
            .map(|j| label(col_labels, j).chars().count())
            .chain(cells.iter().flatten().map(|c| c.len()))
            .max()
            .unwrap_or(0);

        let mut out = " ".repeat(row_width);
        for j in 0..values.ncols() {
            out.push_str(SEP);
            out.push_str(&format!("{:>w$}", label(col_labels, j), w = cell_width));
        }
        out.push('\n');

        for (i, row) in cells.iter().enumerate() {
            out.push_str(&format!("{:<w$}", label(row_labels, i), w = row_width));
            for cell in row {
                out.push_str(SEP);
                out.push_str(&format!("{:>w$}", cell, w = cell_width));
            }
            out.push('\n');
        }
        out
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    /// Renders the panels one below the other, separated by a blank line.
    /// Empty titles are omitted.
    fn render(&mut self, panels: &[HeatmapPanel]) -> Result<String, HeatmapError> {
        let tables = panels
            .iter()
            .map(|panel| {
                let table =
                    self.render_matrix(panel.values(), panel.row_labels(), panel.col_labels());
                match panel.title() {
                    "" => table,
                    title => format!("{}\n{}", title, table),
                }
            })
            .collect::<Vec<_>>();
        Ok(tables.join("\n"))
    }
}
