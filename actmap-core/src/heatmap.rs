//! Frameskip/action heatmap of a rollout.
use crate::{
    config::HeatmapConfig,
    error::HeatmapError,
    matrix::FrequencyMatrix,
    record::ObservationRecord,
    render::{HeatmapPanel, Renderer},
};
use log::info;
use ndarray::Array2;

/// Counts of a rollout together with their two normalized views.
///
/// The views are computed once on construction; the counts are not
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct Heatmap {
    matrix: FrequencyMatrix,
    global: Array2<f64>,
    action_normalized: Array2<f64>,
}

impl Heatmap {
    /// Normalizes the given counts.
    pub fn new(matrix: FrequencyMatrix) -> Self {
        let global = matrix.normalize_global();
        let action_normalized = matrix.normalize_by_action();
        Self {
            matrix,
            global,
            action_normalized,
        }
    }

    /// Counts and normalizes the observations of a record.
    pub fn from_record(
        record: &ObservationRecord,
        config: &HeatmapConfig,
    ) -> Result<Self, HeatmapError> {
        let matrix = FrequencyMatrix::build_with(
            record.frameskips(),
            record.actions(),
            None,
            config.min_bit_width,
        )?;
        let domain = matrix.domain();
        info!(
            "{} observations, frameskips in [{}, {}], {} actions ({} labels)",
            record.len(),
            domain.min_frameskip(),
            domain.max_frameskip(),
            matrix.action_count(),
            matrix.labels().len()
        );
        Ok(Self::new(matrix))
    }

    /// The raw counts.
    pub fn matrix(&self) -> &FrequencyMatrix {
        &self.matrix
    }

    /// Counts divided by the number of observations.
    pub fn global(&self) -> &Array2<f64> {
        &self.global
    }

    /// Counts divided by the number of times each action was taken.
    pub fn action_normalized(&self) -> &Array2<f64> {
        &self.action_normalized
    }

    /// Frameskip values as column labels.
    pub fn frameskip_labels(&self) -> Vec<String> {
        self.matrix
            .domain()
            .frameskip_values()
            .map(|f| f.to_string())
            .collect()
    }

    /// The two views as panels with actions as rows and frameskips as
    /// columns, globally normalized first.
    pub fn panels(&self, config: &HeatmapConfig) -> Result<Vec<HeatmapPanel>, HeatmapError> {
        let row_labels = self.matrix.labels().as_slice().to_vec();
        let col_labels = self.frameskip_labels();
        [
            (&config.title, &self.global),
            (&config.action_normalized_title, &self.action_normalized),
        ]
        .into_iter()
        .map(|(title, values)| -> Result<HeatmapPanel, HeatmapError> {
            Ok(HeatmapPanel::new(
                title.as_str(),
                values.t().to_owned(),
                row_labels.clone(),
                col_labels.clone(),
            )?
            .axis_labels(config.x_label.as_str(), config.y_label.as_str()))
        })
        .collect()
    }

    /// Renders both panels with `renderer`.
    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        config: &HeatmapConfig,
    ) -> Result<R::Output, HeatmapError> {
        renderer.render(&self.panels(config)?)
    }
}
