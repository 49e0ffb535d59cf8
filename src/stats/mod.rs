//! Sample statistics for calibrating a filter
//!
//! # Examples
//!
//! ```
//! use scalar_kalman::filters::ScalarKalmanFilter;
//! use scalar_kalman::stats::{estimate_measurement_noise, steady_state_gain};
//!
//! // Readings taken while the temperature was steady
//! let warmup = [21.48f32, 21.55, 21.51, 21.46, 21.50];
//! let rk = estimate_measurement_noise(&warmup).unwrap();
//! let qk = 1e-5;
//!
//! let mut kf = ScalarKalmanFilter::new(rk, qk);
//! kf.reset(warmup[warmup.len() - 1], rk);
//! assert!(steady_state_gain(rk, qk) < 0.2);
//! ```

pub mod core;
mod calibration;

pub use self::core::{mean, variance};
pub use calibration::{estimate_measurement_noise, steady_state_covariance, steady_state_gain};
