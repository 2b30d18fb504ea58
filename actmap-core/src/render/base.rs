use crate::error::HeatmapError;
use ndarray::Array2;

/// A single heatmap to be rendered.
///
/// `values` has one row per entry of `row_labels` and one column per entry
/// of `col_labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPanel {
    title: String,
    values: Array2<f64>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    x_label: String,
    y_label: String,
}

impl HeatmapPanel {
    /// Creates a panel, checking the labels against the shape of `values`.
    pub fn new(
        title: impl Into<String>,
        values: Array2<f64>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> Result<Self, HeatmapError> {
        if values.nrows() != row_labels.len() || values.ncols() != col_labels.len() {
            return Err(HeatmapError::Render(format!(
                "{} x {} labels for a {:?} panel",
                row_labels.len(),
                col_labels.len(),
                values.shape()
            )));
        }
        Ok(Self {
            title: title.into(),
            values,
            row_labels,
            col_labels,
            x_label: "".to_string(),
            y_label: "".to_string(),
        })
    }

    /// Sets the descriptions of the horizontal and the vertical axis.
    pub fn axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Title of the panel.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cell values.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Tick labels of the rows.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Tick labels of the columns.
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Description of the horizontal axis.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Description of the vertical axis.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Largest value of the panel, `0.0` for an empty panel.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Renders heatmap panels.
pub trait Renderer {
    /// Rendered output.
    type Output;

    /// Renders the panels side by side, in the given order.
    fn render(&mut self, panels: &[HeatmapPanel]) -> Result<Self::Output, HeatmapError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_label_shape_check() {
        let values = array![[0.1, 0.2], [0.3, 0.4], [0.0, 0.0]];
        let rows = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let cols = vec!["1".to_string(), "2".to_string()];
        assert!(HeatmapPanel::new("", values.clone(), rows.clone(), cols.clone()).is_ok());
        assert!(matches!(
            HeatmapPanel::new("", values, cols, rows),
            Err(HeatmapError::Render(_))
        ));
    }

    #[test]
    fn test_max_value() {
        let values = array![[0.1, 0.7], [0.3, 0.4]];
        let panel = HeatmapPanel::new(
            "t",
            values,
            vec!["a".into(), "b".into()],
            vec!["1".into(), "2".into()],
        )
        .unwrap();
        assert_eq!(panel.max_value(), 0.7);
    }
}
