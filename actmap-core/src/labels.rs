//! Human-readable labels of actions.
//!
//! Actions of the emulator control scheme are combinations of pressed
//! buttons. An action index is labelled with the tuple of button bits it
//! stands for, e.g. `(0, 1, 1)`, using a fixed bit width for all actions.
use crate::error::HeatmapError;
use itertools::Itertools;

/// Smallest number of button bits used for labels.
pub const MIN_BIT_WIDTH: usize = 3;

/// Largest number of button bits, `2^16` labels.
pub const MAX_BIT_WIDTH: usize = 16;

/// Number of bits needed to label `action_count` actions,
/// `max(min_bit_width, ceil(log2(action_count)))`.
pub fn bit_width(action_count: usize, min_bit_width: usize) -> usize {
    let needed = if action_count <= 1 {
        0
    } else {
        (usize::BITS - (action_count - 1).leading_zeros()) as usize
    };
    needed.max(min_bit_width)
}

/// Formats the bits of `index` as a tuple, most significant bit first.
fn tuple_label(index: usize, bit_width: usize) -> String {
    let bits = (0..bit_width)
        .rev()
        .map(|b| (index >> b) & 1)
        .collect::<Vec<_>>();
    match bits.len() {
        1 => format!("({},)", bits[0]),
        _ => format!("({})", bits.iter().join(", ")),
    }
}

/// Labels of all `2^bit_width` button combinations, in binary counting order.
///
/// The set is not truncated to the number of actions actually observed:
/// labels past `action_count - 1` are kept and name actions that never
/// occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    bit_width: usize,
    labels: Vec<String>,
}

impl ActionLabels {
    /// Labels for `action_count` actions with at least [`MIN_BIT_WIDTH`] bits.
    pub fn new(action_count: usize) -> Result<Self, HeatmapError> {
        Self::with_min_bit_width(action_count, MIN_BIT_WIDTH)
    }

    /// Labels for `action_count` actions with at least `min_bit_width` bits.
    ///
    /// Fails with [`HeatmapError::IndexOutOfRange`] if more than
    /// [`MAX_BIT_WIDTH`] bits would be needed.
    pub fn with_min_bit_width(
        action_count: usize,
        min_bit_width: usize,
    ) -> Result<Self, HeatmapError> {
        let bit_width = bit_width(action_count, min_bit_width);
        if bit_width > MAX_BIT_WIDTH {
            return Err(HeatmapError::IndexOutOfRange {
                what: "bit_width",
                value: bit_width as i64,
                lower: 0,
                upper: MAX_BIT_WIDTH as i64,
            });
        }
        let labels = (0..1usize << bit_width)
            .map(|i| tuple_label(i, bit_width))
            .collect();
        Ok(Self { bit_width, labels })
    }

    /// Number of bits of each label.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Number of labels, `2^bit_width`.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`, there is at least one label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of action `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// All labels.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Iterates over the labels.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.labels.iter()
    }
}
