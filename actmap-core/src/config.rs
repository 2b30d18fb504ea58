//! Configuration of heatmap rendering.
use crate::labels::MIN_BIT_WIDTH;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of a heatmap.
///
/// Fields missing from a YAML file take their default values.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Number of decimal places of text cells.
    pub precision: usize,

    /// Smallest number of bits of action labels.
    pub min_bit_width: usize,

    /// Title of the globally normalized panel.
    pub title: String,

    /// Title of the action-normalized panel.
    pub action_normalized_title: String,

    /// Description of the horizontal axis.
    pub x_label: String,

    /// Description of the vertical axis.
    pub y_label: String,

    /// Side length of a heatmap cell in pixels.
    pub cell_size: u32,

    /// Font size of tick labels in pixels.
    pub font_size: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            min_bit_width: MIN_BIT_WIDTH,
            title: "".to_string(),
            action_normalized_title: "Action-wise normalized".to_string(),
            x_label: "frameskip".to_string(),
            y_label: "action".to_string(),
            cell_size: 40,
            font_size: 12,
        }
    }
}

impl HeatmapConfig {
    /// Sets the number of decimal places of text cells.
    pub fn precision(mut self, v: usize) -> Self {
        self.precision = v;
        self
    }

    /// Sets the smallest number of bits of action labels.
    pub fn min_bit_width(mut self, v: usize) -> Self {
        self.min_bit_width = v;
        self
    }

    /// Sets the titles of the two panels.
    pub fn titles(mut self, title: impl Into<String>, action_normalized_title: impl Into<String>) -> Self {
        self.title = title.into();
        self.action_normalized_title = action_normalized_title.into();
        self
    }

    /// Sets the side length of a heatmap cell in pixels.
    pub fn cell_size(mut self, v: u32) -> Self {
        self.cell_size = v;
        self
    }

    /// Sets the font size of tick labels.
    pub fn font_size(mut self, v: u32) -> Self {
        self.font_size = v;
        self
    }

    /// Constructs [`HeatmapConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`HeatmapConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
