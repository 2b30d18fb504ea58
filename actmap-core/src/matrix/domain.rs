//! Index domain of a frequency matrix.
use super::MAX_MATRIX_CELLS;
use crate::error::HeatmapError;
use serde::{Deserialize, Serialize};

/// Ranges of frameskip values and action indices covered by a matrix.
///
/// Frameskips span `[min_frameskip, max_frameskip]`, actions span
/// `[0, max_action]`. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObservationDomain {
    min_frameskip: i64,
    max_frameskip: i64,
    max_action: i64,
}

impl ObservationDomain {
    /// Creates a domain from explicit bounds.
    ///
    /// The frameskip range may hold at most [`MAX_MATRIX_CELLS`] values.
    pub fn new(min_frameskip: i64, max_frameskip: i64, max_action: i64) -> Result<Self, HeatmapError> {
        if min_frameskip > max_frameskip
            || max_frameskip.abs_diff(min_frameskip) >= MAX_MATRIX_CELLS as u64
        {
            let upper = if min_frameskip > max_frameskip {
                i64::MAX
            } else {
                min_frameskip.saturating_add(MAX_MATRIX_CELLS as i64 - 1)
            };
            return Err(HeatmapError::IndexOutOfRange {
                what: "max_frameskip",
                value: max_frameskip,
                lower: min_frameskip,
                upper,
            });
        }
        if max_action < 0 {
            return Err(HeatmapError::IndexOutOfRange {
                what: "max_action",
                value: max_action,
                lower: 0,
                upper: i64::MAX,
            });
        }
        Ok(Self {
            min_frameskip,
            max_frameskip,
            max_action,
        })
    }

    /// Derives the smallest domain covering the given observations.
    pub fn from_observations(frameskips: &[i64], actions: &[i64]) -> Result<Self, HeatmapError> {
        let (min_frameskip, max_frameskip) = frameskips
            .iter()
            .fold(None, |acc: Option<(i64, i64)>, &f| match acc {
                None => Some((f, f)),
                Some((lo, hi)) => Some((lo.min(f), hi.max(f))),
            })
            .ok_or(HeatmapError::EmptyInput)?;
        let max_action = *actions.iter().max().ok_or(HeatmapError::EmptyInput)?;
        Self::new(min_frameskip, max_frameskip, max_action)
    }

    /// Smallest frameskip value.
    pub fn min_frameskip(&self) -> i64 {
        self.min_frameskip
    }

    /// Largest frameskip value.
    pub fn max_frameskip(&self) -> i64 {
        self.max_frameskip
    }

    /// Largest action index.
    pub fn max_action(&self) -> i64 {
        self.max_action
    }

    /// Number of frameskip values, `max_frameskip - min_frameskip + 1`.
    pub fn frameskip_range_size(&self) -> usize {
        usize::try_from(self.max_frameskip.abs_diff(self.min_frameskip))
            .unwrap_or(usize::MAX)
            .saturating_add(1)
    }

    /// Number of actions, `max_action + 1`.
    pub fn action_count(&self) -> usize {
        usize::try_from(self.max_action.max(0))
            .unwrap_or(usize::MAX)
            .saturating_add(1)
    }

    /// All frameskip values of the domain in increasing order.
    pub fn frameskip_values(&self) -> impl Iterator<Item = i64> {
        self.min_frameskip..=self.max_frameskip
    }

    /// Row of the matrix holding `frameskip`.
    pub fn frameskip_offset(&self, frameskip: i64) -> Result<usize, HeatmapError> {
        if frameskip < self.min_frameskip || frameskip > self.max_frameskip {
            return Err(HeatmapError::IndexOutOfRange {
                what: "frameskip",
                value: frameskip,
                lower: self.min_frameskip,
                upper: self.max_frameskip,
            });
        }
        Ok(frameskip.abs_diff(self.min_frameskip) as usize)
    }

    /// Column of the matrix holding `action`.
    pub fn action_index(&self, action: i64) -> Result<usize, HeatmapError> {
        if action < 0 || action > self.max_action {
            return Err(HeatmapError::IndexOutOfRange {
                what: "action",
                value: action,
                lower: 0,
                upper: self.max_action,
            });
        }
        Ok(action as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_observations() {
        let domain = ObservationDomain::from_observations(&[4, 2, 7, 2], &[0, 5, 1, 1]).unwrap();
        assert_eq!(domain.min_frameskip(), 2);
        assert_eq!(domain.max_frameskip(), 7);
        assert_eq!(domain.frameskip_range_size(), 6);
        assert_eq!(domain.action_count(), 6);
        assert_eq!(domain.frameskip_values().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            ObservationDomain::from_observations(&[], &[]),
            Err(HeatmapError::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(ObservationDomain::new(5, 4, 0).is_err());
        assert!(ObservationDomain::new(1, 4, -1).is_err());
        assert!(ObservationDomain::new(-3, -3, 0).is_ok());
    }

    #[test]
    fn test_wide_frameskip_range() {
        let last = MAX_MATRIX_CELLS as i64 - 1;
        assert_eq!(
            ObservationDomain::new(0, last, 0).unwrap().frameskip_range_size(),
            MAX_MATRIX_CELLS
        );
        for (lo, hi) in [(0, last + 1), (0, 10_000_000_000), (i64::MIN, i64::MAX)] {
            assert!(matches!(
                ObservationDomain::new(lo, hi, 0),
                Err(HeatmapError::IndexOutOfRange {
                    what: "max_frameskip",
                    ..
                })
            ));
        }
        assert!(ObservationDomain::from_observations(&[i64::MIN, i64::MAX], &[0, 0]).is_err());
    }

    #[test]
    fn test_offsets() {
        let domain = ObservationDomain::new(-2, 3, 4).unwrap();
        assert_eq!(domain.frameskip_offset(-2).unwrap(), 0);
        assert_eq!(domain.frameskip_offset(3).unwrap(), 5);
        assert!(domain.frameskip_offset(4).is_err());
        assert_eq!(domain.action_index(4).unwrap(), 4);
        assert!(matches!(
            domain.action_index(-1),
            Err(HeatmapError::IndexOutOfRange { what: "action", .. })
        ));
    }
}
