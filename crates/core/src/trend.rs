//! Deterioration-trend analysis over an ordered reading sequence.
//!
//! Readings are not timestamped; the slope is a rate of change per
//! observation, fitted against the reading index. Both functions are pure
//! and total: too-short input yields a neutral result instead of an error,
//! since a single reading is a valid (if less informative) state.

/// Ordinary least-squares slope of `values` against their indices.
///
/// Returns `0.0` when fewer than two readings exist (no trend is
/// determinable from a single point) and exactly `0.0` for a constant
/// series.
pub fn slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    // Exact zero for a flat series; the summation below could otherwise
    // leave rounding residue.
    if values.windows(2).all(|pair| pair[0] == pair[1]) {
        return 0.0;
    }

    let count = n as f64;
    let mean_x = (count - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / count;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (index, &value) in values.iter().enumerate() {
        let dx = index as f64 - mean_x;
        covariance += dx * (value - mean_y);
        variance += dx * dx;
    }

    covariance / variance
}

/// Change from baseline: the latest reading minus the first-ever reading.
///
/// The baseline is the first recorded reading of the encounter, not a
/// rolling window. Returns `0.0` for an empty series.
pub fn delta(values: &[f64]) -> f64 {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    }
}
