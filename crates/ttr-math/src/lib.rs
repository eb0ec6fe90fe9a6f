//! Deterministic numeric and statistical helpers.

#![forbid(unsafe_code)]

/// Return `numer / denom` and guard division by zero.
///
/// Unlike a display ratio this is never rounded: `ratio(1, 5)` is exactly
/// the same `f64` as the literal `0.2`.
#[must_use]
pub fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Return `numer / sqrt(denom)`, or `0.0` when `denom` is zero.
#[must_use]
pub fn root_ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / (denom as f64).sqrt()
    }
}

/// Return `ln(numer) / ln(denom)`.
///
/// The denominator vanishes for `denom <= 1`, and `ln(0)` is undefined, so
/// both cases yield `0.0`.
#[must_use]
pub fn log_ratio(numer: usize, denom: usize) -> f64 {
    if denom <= 1 || numer == 0 {
        0.0
    } else {
        (numer as f64).ln() / (denom as f64).ln()
    }
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`), or `None` for an empty slice.
#[must_use]
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mu;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

/// Smallest and largest value, or `None` for an empty slice.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
}

/// Differences between consecutive values: `values[i + 1] - values[i]`.
#[must_use]
pub fn consecutive_diffs(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Mean, spread and extrema of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize a non-empty series.
///
/// The mean is clamped into `[min, max]`: summing `n` copies of `0.1` and
/// dividing by `n` can land one ulp above `0.1`.
#[must_use]
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let (min, max) = min_max(values)?;
    let mean = mean(values)?.clamp(min, max);
    let std_dev = std_dev(values)?;
    Some(Summary {
        mean,
        std_dev,
        min,
        max,
    })
}
