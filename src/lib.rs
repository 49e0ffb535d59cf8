//! # Scalar Kalman
//!
//! Unidimensional Kalman filter for smoothing noisy sensor readings
//! (temperature, pressure, ADC samples) on constrained targets.
//!
//! ## Design Philosophy
//!
//! - **Generic precision**: `f32` on microcontrollers, `f64` on hosts, same code
//! - **Four fields**: the whole filter is four `T` values, `Copy`, no heap
//! - **No validation on the fast path**: NaN/Inf propagate per IEEE-754
//! - **Checked wrapper for tuning**: [`ValidatedKalmanFilter`] is a separate type
//! - **`no_std`**: disable the default `std` feature
//!
//! ## Modules
//!
//! - `numeric`: precision abstraction
//! - `filters`: the filter and its checked wrapper
//! - `config`: serde-friendly filter configuration
//! - `stats`: measurement noise estimation, steady state analysis
//! - `error`: errors from the checked layer
//!
//! ## Example
//!
//! ```rust
//! use scalar_kalman::prelude::*;
//!
//! let mut kf = ScalarKalmanFilter::<f32>::new(4.7e-3, 1e-5);
//!
//! let filtered = kf.update(25.0);
//! assert!((filtered - 24.883).abs() < 1e-3);
//! assert_eq!(kf.get(), filtered);
//!
//! kf.reset_default();
//! assert_eq!(kf.get(), 0.0);
//! ```
//!
//! [`ValidatedKalmanFilter`]: filters::ValidatedKalmanFilter

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod numeric;
pub mod config;
pub mod error;
pub mod filters;
pub mod stats;

/// Common imports
pub mod prelude {
    pub use crate::numeric::Numeric;

    pub use crate::config::KalmanConfig;
    pub use crate::error::KalmanError;

    pub use crate::filters::{
        KalmanF32,
        KalmanF64,
        ScalarKalmanFilter,
        ValidatedKalmanFilter,
    };

    pub use crate::stats::{
        estimate_measurement_noise,
        steady_state_covariance,
        steady_state_gain,
    };
}
