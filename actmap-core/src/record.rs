//! Observation records collected during rollouts.
//!
//! A rollout that wants to be inspected with a heatmap stores, for every
//! decision point, the frameskip value the emulator used and the index of the
//! action the agent took. This module provides:
//!
//! * [`ObservationRecord`] - the two equal-length sequences, with loading and
//!   saving in several encodings
//! * [`RecordFormat`] - the supported encodings (JSON, YAML, bincode, CSV)
//! * [`ObservationRecorder`] - accumulates observations step by step
//!
//! # Basic Usage
//!
//! ```rust
//! use actmap_core::record::{ObservationRecorder, RecordFormat};
//!
//! let mut recorder = ObservationRecorder::new();
//! recorder.push(4, 0);
//! recorder.push(2, 3);
//!
//! let record = recorder.into_record();
//! let mut buf = Vec::new();
//! record.to_writer(&mut buf, RecordFormat::Json).unwrap();
//! ```
mod base;
mod format;
mod recorder;

pub use base::ObservationRecord;
pub use format::RecordFormat;
pub use recorder::ObservationRecorder;
