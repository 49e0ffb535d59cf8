use crate::config::KalmanConfig;
use crate::numeric::Numeric;

/// Unidimensional Kalman filter (optimized for speed)
///
/// Smooths a noisy scalar signal, e.g. a temperature sensor, assuming the
/// true value is constant between samples. The model is fixed: no control
/// input, unit state transition, unit observation gain.
///
/// Memory footprint is exactly four `T` values. `update` is a fixed sequence
/// of scalar operations with no branches and no allocation.
///
/// Nothing is validated. Negative noise covariances are accepted, and an
/// innovation covariance of zero (`Rk == 0` with a collapsed error
/// covariance) divides by zero, so NaN/Inf flow into the state and every
/// later `update`/`get`. Use [`ValidatedKalmanFilter`] while tuning.
///
/// # Examples
///
/// ```
/// use scalar_kalman::filters::ScalarKalmanFilter;
///
/// let mut kf = ScalarKalmanFilter::<f32>::new(4.7e-3, 1e-5);
///
/// for raw in [21.3, 21.6, 21.2, 21.5] {
///     let filtered = kf.update(raw);
///     assert!(filtered.is_finite());
/// }
/// assert!(kf.get() > 20.0);
/// ```
///
/// [`ValidatedKalmanFilter`]: crate::filters::ValidatedKalmanFilter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarKalmanFilter<T: Numeric = f32> {
    /// Measurement noise covariance (Rk)
    r: T,

    /// Process noise covariance (Qk)
    q: T,

    /// Last a posteriori state estimate (xk_last)
    x: T,

    /// Last a posteriori error covariance (Pk_last)
    p: T,
}

impl<T: Numeric> ScalarKalmanFilter<T> {
    /// State estimate after construction or [`reset_default`](Self::reset_default)
    pub const INITIAL_ESTIMATE: f64 = 0.0;

    /// Error covariance after construction or [`reset_default`](Self::reset_default)
    pub const INITIAL_COVARIANCE: f64 = 1.0;

    /// Create new Kalman filter
    ///
    /// # Arguments
    /// * `measurement_noise` - Rk, variance of the sensor readings
    /// * `process_noise` - Qk, how much the true value drifts per step
    ///
    /// Starts from estimate 0 with error covariance 1.
    #[inline]
    pub fn new(measurement_noise: T, process_noise: T) -> Self {
        Self {
            r: measurement_noise,
            q: process_noise,
            x: T::from_f64(Self::INITIAL_ESTIMATE),
            p: T::from_f64(Self::INITIAL_COVARIANCE),
        }
    }

    /// Create from a configuration, including its initial state
    #[inline]
    pub fn from_config(config: &KalmanConfig<T>) -> Self {
        let mut kf = Self::new(config.measurement_noise, config.process_noise);
        kf.reset(config.initial_estimate, config.initial_covariance);
        kf
    }

    /// Feed one measurement, returns the new estimate
    #[inline(always)]
    pub fn update(&mut self, measurement: T) -> T {
        // A priori state: x = F * x + B * u with F = 1, B * u = 0
        let x_pred = self.x;

        // A priori covariance: p = F * p * F' + q
        let p_pred = self.p + self.q;

        // Innovation: y = z - H * x
        let innovation = measurement - x_pred;

        // Innovation covariance: s = r + H * p * H'
        let s = self.r + p_pred;

        // Kalman gain: k = p * H' / s
        let k = p_pred / s;

        // A posteriori state and covariance
        self.x = x_pred + k * innovation;
        self.p = (T::one() - k) * p_pred;

        self.x
    }

    /// Get last estimated value
    #[inline(always)]
    pub fn get(&self) -> T {
        self.x
    }

    /// Get last error covariance (estimate uncertainty)
    #[inline(always)]
    pub fn error_covariance(&self) -> T {
        self.p
    }

    /// Configured measurement noise covariance (Rk)
    #[inline(always)]
    pub fn measurement_noise(&self) -> T {
        self.r
    }

    /// Configured process noise covariance (Qk)
    #[inline(always)]
    pub fn process_noise(&self) -> T {
        self.q
    }

    /// Gain the next `update` will apply, without mutating the filter
    #[inline]
    pub fn gain(&self) -> T {
        let p_pred = self.p + self.q;
        p_pred / (self.r + p_pred)
    }

    /// Overwrite the state estimate and error covariance
    #[inline]
    pub fn reset(&mut self, estimate: T, covariance: T) {
        self.x = estimate;
        self.p = covariance;
    }

    /// Restart from a known value with the default error covariance of 1
    ///
    /// Handy when the first reading is a better prior than zero.
    #[inline]
    pub fn reset_estimate(&mut self, estimate: T) {
        self.reset(estimate, T::from_f64(Self::INITIAL_COVARIANCE));
    }

    /// Reset to estimate 0, error covariance 1
    #[inline]
    pub fn reset_default(&mut self) {
        self.reset(
            T::from_f64(Self::INITIAL_ESTIMATE),
            T::from_f64(Self::INITIAL_COVARIANCE),
        );
    }

    /// Filter a buffer in place, replacing each sample with its estimate
    ///
    /// Returns the last estimate, or `None` (filter untouched) when `samples`
    /// is empty.
    pub fn smooth_in_place(&mut self, samples: &mut [T]) -> Option<T> {
        for sample in samples.iter_mut() {
            *sample = self.update(*sample);
        }
        samples.last().copied()
    }
}

/// Single precision filter, the usual choice on microcontrollers
pub type KalmanF32 = ScalarKalmanFilter<f32>;

/// Double precision filter
pub type KalmanF64 = ScalarKalmanFilter<f64>;
