#![warn(missing_docs)]
//! Frameskip/action heatmaps of reinforcement learning rollouts.
//!
//! A rollout records, for every decision point, how many emulator frames the
//! chosen action was held for and which action it was. This crate counts the
//! co-occurrences of both into a [`FrequencyMatrix`], normalizes it globally
//! and per action, and renders the result through a [`Renderer`].
//!
//! ```rust
//! use actmap_core::{Heatmap, HeatmapConfig, ObservationRecord, TextRenderer};
//!
//! let record = ObservationRecord::new(vec![1, 1, 2, 2, 2], vec![0, 1, 0, 0, 1]).unwrap();
//! let config = HeatmapConfig::default();
//! let heatmap = Heatmap::from_record(&record, &config).unwrap();
//! let text = heatmap.render(&mut TextRenderer::new(config.precision), &config).unwrap();
//! assert!(text.starts_with("              1     2\n(0, 0, 0)  0.20  0.40\n"));
//! ```
pub mod error;
pub mod labels;
pub mod matrix;
pub mod record;
pub mod render;

mod config;
pub use config::HeatmapConfig;

mod heatmap;
pub use heatmap::Heatmap;

pub use error::HeatmapError;
pub use labels::ActionLabels;
pub use matrix::{FrequencyMatrix, ObservationDomain};
pub use record::{ObservationRecord, ObservationRecorder, RecordFormat};
pub use render::{HeatmapPanel, Renderer, TextRenderer};
