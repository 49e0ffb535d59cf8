//! Noise covariance estimation for tuning a filter
//!
//! Rk is measured, not guessed: record the sensor while the true value is
//! steady (e.g. a thermometer in a still room) and take the variance of the
//! readings. Qk is a design choice, smaller means smoother but slower to
//! follow real changes. [`steady_state_gain`] shows where a given pair
//! settles.

use super::core::variance;
use crate::numeric::Numeric;

/// Estimate Rk from readings of a steady signal
///
/// Returns the population variance, or `None` with fewer than two samples.
///
/// # Examples
///
/// ```
/// use scalar_kalman::stats::estimate_measurement_noise;
///
/// let readings = [21.50f64, 21.56, 21.44, 21.50];
/// let rk = estimate_measurement_noise(&readings).unwrap();
/// assert!((rk - 0.0018).abs() < 1e-9);
/// ```
#[inline]
pub fn estimate_measurement_noise<T: Numeric>(readings: &[T]) -> Option<T> {
    if readings.len() < 2 {
        return None;
    }
    Some(variance(readings))
}

/// Error covariance the filter converges to on any input
///
/// The covariance recurrence does not depend on the measurements. Its fixed
/// point satisfies `P = (1 - K) (P + Qk)` with `K = (P + Qk) / (Rk + P + Qk)`,
/// which gives `P + Qk = (Qk + sqrt(Qk² + 4 Qk Rk)) / 2`.
///
/// With `Qk == 0` the covariance decays to 0 and the filter stops listening
/// to new measurements.
#[inline]
pub fn steady_state_covariance<T: Numeric>(measurement_noise: T, process_noise: T) -> T {
    let (r, q) = (measurement_noise, process_noise);
    let four = T::from_f64(4.0);
    let half = T::from_f64(0.5);
    let p_pred = (q + (q * q + four * q * r).sqrt()) * half;
    p_pred - q
}

/// Kalman gain at steady state
///
/// Equivalent to the smoothing factor of an exponential moving average that
/// tracks the signal the same way once the filter has settled.
#[inline]
pub fn steady_state_gain<T: Numeric>(measurement_noise: T, process_noise: T) -> T {
    let p_pred = steady_state_covariance(measurement_noise, process_noise) + process_noise;
    p_pred / (measurement_noise + p_pred)
}
