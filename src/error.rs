//! Errors reported by the checking layer
//!
//! [`ScalarKalmanFilter`](crate::filters::ScalarKalmanFilter) never returns
//! these; it lets NaN/Inf propagate. Only
//! [`ValidatedKalmanFilter`](crate::filters::ValidatedKalmanFilter) and
//! [`KalmanConfig::validate`](crate::config::KalmanConfig::validate) do.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KalmanError {
    /// A covariance parameter is below zero
    #[error("{name} must be non-negative, got {value}")]
    NegativeCovariance { name: &'static str, value: f64 },

    /// A parameter or measurement is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Rk and Qk are both zero, the gain is 0/0 once the covariance collapses
    #[error("measurement and process noise are both zero")]
    DegenerateNoise,

    /// An update left the filter with a non-finite or negative state
    #[error("update diverged: estimate {estimate}, covariance {covariance}")]
    Diverged { estimate: f64, covariance: f64 },
}

pub type Result<T> = core::result::Result<T, KalmanError>;
