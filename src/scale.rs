//! Value-axis scale: data domain to pixels, with headroom and ticks.

use std::f64::consts::TAU;

use crate::error::DataError;

/// Default multiplier above the largest value.
pub const DEFAULT_HEADROOM: f64 = 1.1;
/// Default number of tick intervals.
pub const DEFAULT_TICK_COUNT: usize = 5;
/// Scale maximum used when the data has nothing above zero.
pub const MIN_SCALE_MAX: f64 = 1e-6;

/// Value-axis extent and tick values, from 0 to `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            max: MIN_SCALE_MAX,
            ticks: tick_values(MIN_SCALE_MAX, DEFAULT_TICK_COUNT),
        }
    }
}

impl Scale {
    /// Number of tick intervals (gridlines minus one).
    pub fn tick_count(&self) -> usize {
        self.ticks.len().saturating_sub(1)
    }

    /// Offset from the top of a plot `plot_height` tall.
    pub fn pixel(&self, value: f64, plot_height: f64) -> f64 {
        value_to_pixel(value, self.max, plot_height)
    }

    /// Bar height for `value`, clamped to the plot. Values at or below zero give 0.
    pub fn bar_height(&self, value: f64, plot_height: f64) -> f64 {
        (plot_height * (value / self.max)).clamp(0.0, plot_height)
    }
}

/// Build a scale over `values` with the given headroom and tick count.
///
/// Fails on any NaN or infinite value rather than coercing it.
pub fn compute_scale(
    values: &[f64],
    headroom: f64,
    tick_count: usize,
) -> Result<Scale, DataError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DataError::NonFinite {
            series: String::new(),
            index,
            value: values.get(index).copied().unwrap_or(f64::NAN),
        });
    }

    let largest = values.iter().copied().fold(0.0_f64, f64::max);
    // Headroom can push values near f64::MAX past the representable range
    let mut max = (largest * headroom).min(f64::MAX);
    if max <= 0.0 {
        max = MIN_SCALE_MAX;
    }

    Ok(Scale {
        max,
        ticks: tick_values(max, tick_count),
    })
}

fn tick_values(max: f64, tick_count: usize) -> Vec<f64> {
    let n = tick_count.max(1);
    (0..=n)
        .map(|i| (max * (i as f64 / n as f64)).round())
        .collect()
}

/// `plot_height * (1 - value / max)`: distance from the plot top for a value
/// measured up from the plot bottom.
pub fn value_to_pixel(value: f64, max: f64, plot_height: f64) -> f64 {
    plot_height * (1.0 - value / max)
}

/// Angular share of `value` in a ring whose values sum to `total`.
pub fn value_to_angle(value: f64, total: f64) -> f64 {
    TAU * value / total
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_headroom() {
        let scale = compute_scale(&[100.0], DEFAULT_HEADROOM, DEFAULT_TICK_COUNT).unwrap();
        assert!((scale.max - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_are_rounded_and_evenly_spaced() {
        let scale = compute_scale(&[30000.0, 60000.0], 1.1, 5).unwrap();
        assert_eq!(
            scale.ticks,
            vec![0.0, 13200.0, 26400.0, 39600.0, 52800.0, 66000.0]
        );
        assert_eq!(scale.tick_count(), 5);
    }

    #[test]
    fn test_empty_and_zero_use_epsilon() {
        for values in [&[][..], &[0.0, 0.0][..], &[-5.0][..]] {
            let scale = compute_scale(values, 1.1, 5).unwrap();
            assert!(scale.max > 0.0);
            assert!(scale.max <= MIN_SCALE_MAX);
            assert_eq!(scale.ticks.len(), 6);
        }
    }

    #[test]
    fn test_headroom_overflow_clamps_to_f64_max() {
        let scale = compute_scale(&[1e307, 1.7e308], DEFAULT_HEADROOM, 5).unwrap();
        assert_eq!(scale.max, f64::MAX);
        assert!(scale.ticks.iter().all(|t| t.is_finite()));
        assert_eq!(scale.ticks[5], f64::MAX);
        assert!(scale.bar_height(1e307, 200.0) < scale.bar_height(1.7e308, 200.0));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = compute_scale(&[1.0, f64::INFINITY], 1.1, 5).unwrap_err();
        assert!(matches!(err, DataError::NonFinite { index: 1, .. }));
        assert!(compute_scale(&[f64::NAN], 1.1, 5).is_err());
    }

    #[test]
    fn test_value_to_pixel() {
        assert_eq!(value_to_pixel(0.0, 100.0, 200.0), 200.0);
        assert_eq!(value_to_pixel(100.0, 100.0, 200.0), 0.0);
        assert_eq!(value_to_pixel(50.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn test_bar_height_clamps_negative() {
        let scale = compute_scale(&[10.0], 1.0, 5).unwrap();
        assert_eq!(scale.bar_height(-3.0, 50.0), 0.0);
        assert_eq!(scale.bar_height(10.0, 50.0), 50.0);
    }

    #[test]
    fn test_value_to_angle() {
        assert!((value_to_angle(1.0, 4.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
