//! Co-occurrence counts of frameskips and actions.
use super::{normalize_by_action, normalize_global, ObservationDomain};
use crate::{
    error::HeatmapError,
    labels::{ActionLabels, MIN_BIT_WIDTH},
};
use log::debug;
use ndarray::{Array2, Axis};

/// Largest number of cells of a [`FrequencyMatrix`], `2^22`.
pub const MAX_MATRIX_CELLS: usize = 1 << 22;

/// Counts of `(frameskip, action)` pairs.
///
/// Rows are frameskip offsets (`frameskip - min_frameskip`), columns are
/// action indices. There is one column per action label, so the matrix is
/// `frameskip_range_size × 2^bit_width`; columns at or past
/// [`action_count`](Self::action_count) are never incremented.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMatrix {
    counts: Array2<u64>,
    domain: ObservationDomain,
    labels: ActionLabels,
}

impl FrequencyMatrix {
    /// Counts observations over the domain derived from the observations.
    pub fn build(frameskips: &[i64], actions: &[i64]) -> Result<Self, HeatmapError> {
        Self::build_with(frameskips, actions, None, MIN_BIT_WIDTH)
    }

    /// Counts observations over an explicitly given domain.
    ///
    /// Observations outside of `domain` are rejected with
    /// [`HeatmapError::IndexOutOfRange`].
    pub fn build_with_domain(
        frameskips: &[i64],
        actions: &[i64],
        domain: ObservationDomain,
    ) -> Result<Self, HeatmapError> {
        Self::build_with(frameskips, actions, Some(domain), MIN_BIT_WIDTH)
    }

    /// Counts observations.
    ///
    /// If `domain` is `None` it is derived from the observations.
    /// `min_bit_width` is the smallest width of the action labels.
    /// Matrices of more than [`MAX_MATRIX_CELLS`] cells are rejected with
    /// [`HeatmapError::MatrixTooLarge`].
    pub fn build_with(
        frameskips: &[i64],
        actions: &[i64],
        domain: Option<ObservationDomain>,
        min_bit_width: usize,
    ) -> Result<Self, HeatmapError> {
        if frameskips.len() != actions.len() {
            return Err(HeatmapError::LengthMismatch {
                frameskips: frameskips.len(),
                actions: actions.len(),
            });
        }
        if frameskips.is_empty() {
            return Err(HeatmapError::EmptyInput);
        }
        let domain = match domain {
            Some(domain) => domain,
            None => ObservationDomain::from_observations(frameskips, actions)?,
        };
        let labels = ActionLabels::with_min_bit_width(domain.action_count(), min_bit_width)?;
        let (rows, cols) = (domain.frameskip_range_size(), labels.len());
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_MATRIX_CELLS => {}
            _ => {
                return Err(HeatmapError::MatrixTooLarge {
                    rows,
                    cols,
                    limit: MAX_MATRIX_CELLS,
                })
            }
        }
        let mut counts = Array2::<u64>::zeros((rows, cols));

        for (&f, &a) in frameskips.iter().zip(actions.iter()) {
            let row = domain.frameskip_offset(f)?;
            let col = domain.action_index(a)?;
            counts[[row, col]] += 1;
        }
        debug!(
            "Counted {} observations into a {:?} matrix",
            frameskips.len(),
            counts.shape()
        );

        Ok(Self {
            counts,
            domain,
            labels,
        })
    }

    /// Raw counts, `frameskip_range_size × labels().len()`.
    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Domain of the matrix.
    pub fn domain(&self) -> &ObservationDomain {
        &self.domain
    }

    /// Labels of the action columns.
    pub fn labels(&self) -> &ActionLabels {
        &self.labels
    }

    /// Number of reachable action columns, `max_action + 1`.
    pub fn action_count(&self) -> usize {
        self.domain.action_count()
    }

    /// Number of counted observations.
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Count of a single `(frameskip, action)` pair, zero outside of the domain.
    pub fn get(&self, frameskip: i64, action: i64) -> u64 {
        match (
            self.domain.frameskip_offset(frameskip),
            self.domain.action_index(action),
        ) {
            (Ok(row), Ok(col)) => self.counts[[row, col]],
            _ => 0,
        }
    }

    /// Count of every action, summed over frameskips.
    pub fn action_totals(&self) -> Vec<u64> {
        self.counts.sum_axis(Axis(0)).to_vec()
    }

    /// Counts divided by the number of observations.
    pub fn normalize_global(&self) -> Array2<f64> {
        normalize_global(&self.counts)
    }

    /// Counts divided by the number of times each action was taken.
    pub fn normalize_by_action(&self) -> Array2<f64> {
        normalize_by_action(&self.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let m = FrequencyMatrix::build(&[1, 1, 2, 2, 2], &[0, 1, 0, 0, 1]).unwrap();
        assert_eq!(m.counts().shape(), &[2, 8]);
        assert_eq!(m.get(1, 0), 1);
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.get(2, 0), 2);
        assert_eq!(m.get(2, 1), 1);
        assert_eq!(m.total(), 5);
        assert_eq!(m.action_count(), 2);
        assert_eq!(m.action_totals(), vec![3, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_gaps_in_frameskips() {
        let m = FrequencyMatrix::build(&[2, 6], &[3, 3]).unwrap();
        assert_eq!(m.counts().nrows(), 5);
        assert_eq!(m.counts().row(0).sum(), 1);
        assert_eq!(m.counts().row(2).sum(), 0);
        assert_eq!(m.counts().row(4).sum(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            FrequencyMatrix::build(&[], &[]),
            Err(HeatmapError::EmptyInput)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            FrequencyMatrix::build(&[1, 2], &[0]),
            Err(HeatmapError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_explicit_domain() {
        let domain = ObservationDomain::new(1, 4, 2).unwrap();
        let m = FrequencyMatrix::build_with_domain(&[1, 4], &[0, 2], domain).unwrap();
        assert_eq!(m.counts().shape(), &[4, 8]);

        let e = FrequencyMatrix::build_with_domain(&[1, 4], &[0, 3], domain).unwrap_err();
        assert!(matches!(
            e,
            HeatmapError::IndexOutOfRange {
                what: "action",
                value: 3,
                ..
            }
        ));

        let e = FrequencyMatrix::build_with_domain(&[0], &[0], domain).unwrap_err();
        assert!(matches!(
            e,
            HeatmapError::IndexOutOfRange {
                what: "frameskip",
                ..
            }
        ));
    }

    #[test]
    fn test_wide_inputs() {
        assert!(matches!(
            FrequencyMatrix::build(&[i64::MIN, i64::MAX], &[0, 0]),
            Err(HeatmapError::IndexOutOfRange {
                what: "max_frameskip",
                ..
            })
        ));
        assert!(matches!(
            FrequencyMatrix::build(&[0, 10_000_000_000], &[0, 0]),
            Err(HeatmapError::IndexOutOfRange { .. })
        ));
        // 2^20 frameskips x 8 labels
        assert!(matches!(
            FrequencyMatrix::build(&[0, (1 << 20) - 1], &[0, 0]),
            Err(HeatmapError::MatrixTooLarge {
                rows: 1_048_576,
                cols: 8,
                ..
            })
        ));
        assert!(matches!(
            FrequencyMatrix::build(&[1], &[i64::MAX]),
            Err(HeatmapError::IndexOutOfRange {
                what: "bit_width",
                ..
            })
        ));
        assert!(matches!(
            FrequencyMatrix::build_with(&[1], &[0], None, 64),
            Err(HeatmapError::IndexOutOfRange {
                what: "bit_width",
                ..
            })
        ));

        let m = FrequencyMatrix::build(&[0, (1 << 19) - 1], &[0, 7]).unwrap();
        assert_eq!(m.counts().len(), MAX_MATRIX_CELLS);
    }

    #[test]
    fn test_negative_action() {
        assert!(matches!(
            FrequencyMatrix::build(&[1, 1], &[2, -1]),
            Err(HeatmapError::IndexOutOfRange { what: "action", .. })
        ));
    }
}
