//! Frequency matrices of frameskip/action observations.
//!
//! * [`ObservationDomain`] - frameskip and action ranges covered by a matrix
//! * [`FrequencyMatrix`] - co-occurrence counts over a domain
//! * [`normalize_global`] / [`normalize_by_action`] - normalized views
//!
//! ```rust
//! use actmap_core::matrix::FrequencyMatrix;
//!
//! let m = FrequencyMatrix::build(&[1, 1, 2, 2, 2], &[0, 1, 0, 0, 1]).unwrap();
//! assert_eq!(m.total(), 5);
//!
//! let by_action = m.normalize_by_action();
//! assert!((by_action[[1, 0]] - 2.0 / 3.0).abs() < 1e-9);
//! ```
mod domain;
mod frequency;
mod normalize;

pub use domain::ObservationDomain;
pub use frequency::{FrequencyMatrix, MAX_MATRIX_CELLS};
pub use normalize::{normalize_by_action, normalize_global};
