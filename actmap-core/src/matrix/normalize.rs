//! Normalized views of a count matrix.
use ndarray::Array2;

/// Divides every cell by the sum of all cells.
///
/// A matrix without any count is returned as zeros.
pub fn normalize_global(counts: &Array2<u64>) -> Array2<f64> {
    let total = counts.sum();
    if total == 0 {
        return Array2::zeros(counts.raw_dim());
    }
    let total = total as f64;
    counts.mapv(|c| c as f64 / total)
}

/// Divides every column (action) by its own sum.
///
/// Columns summing to zero are left at zero.
pub fn normalize_by_action(counts: &Array2<u64>) -> Array2<f64> {
    let mut out = counts.mapv(|c| c as f64);
    for mut column in out.columns_mut() {
        let s = column.sum();
        if s != 0.0 {
            column.mapv_inplace(|v| v / s);
        }
    }
    out
}
