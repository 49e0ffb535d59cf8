//! Filter configuration
//!
//! A plain-data description of a filter: the two noise covariances plus the
//! optional initial state. With the `serde` feature enabled it can be read
//! from any serde format; the initial state fields may be omitted.
//!
//! ```toml
//! measurement_noise = 0.0047
//! process_noise = 0.00001
//! ```

use crate::error::{KalmanError, Result};
use crate::numeric::Numeric;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KalmanConfig<T: Numeric = f32> {
    /// Rk, variance of the sensor readings
    pub measurement_noise: T,

    /// Qk, expected drift of the true value per step
    pub process_noise: T,

    #[cfg_attr(feature = "serde", serde(default = "default_estimate"))]
    pub initial_estimate: T,

    #[cfg_attr(feature = "serde", serde(default = "default_covariance"))]
    pub initial_covariance: T,
}

#[cfg(feature = "serde")]
fn default_estimate<T: Numeric>() -> T {
    T::zero()
}

#[cfg(feature = "serde")]
fn default_covariance<T: Numeric>() -> T {
    T::one()
}

impl<T: Numeric> KalmanConfig<T> {
    #[inline]
    pub fn new(measurement_noise: T, process_noise: T) -> Self {
        Self {
            measurement_noise,
            process_noise,
            initial_estimate: T::zero(),
            initial_covariance: T::one(),
        }
    }

    /// Start from a known value instead of 0
    ///
    /// Seeding with a plausible reading (e.g. room temperature) and a small
    /// covariance avoids the initial ramp up from zero.
    #[inline]
    pub fn with_initial_state(mut self, estimate: T, covariance: T) -> Self {
        self.initial_estimate = estimate;
        self.initial_covariance = covariance;
        self
    }

    /// Check the values a well-behaved filter needs
    pub fn validate(&self) -> Result<()> {
        check_covariance("measurement_noise", self.measurement_noise)?;
        check_covariance("process_noise", self.process_noise)?;
        check_finite("initial_estimate", self.initial_estimate)?;
        check_covariance("initial_covariance", self.initial_covariance)?;

        if self.measurement_noise == T::zero() && self.process_noise == T::zero() {
            return Err(KalmanError::DegenerateNoise);
        }
        Ok(())
    }
}

pub(crate) fn check_finite<T: Numeric>(name: &'static str, value: T) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KalmanError::NonFinite {
            name,
            value: value.to_f64(),
        })
    }
}

pub(crate) fn check_covariance<T: Numeric>(name: &'static str, value: T) -> Result<()> {
    check_finite(name, value)?;
    if value < T::zero() {
        return Err(KalmanError::NegativeCovariance {
            name,
            value: value.to_f64(),
        });
    }
    Ok(())
}
