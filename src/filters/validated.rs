use crate::config::{check_covariance, check_finite, KalmanConfig};
use crate::error::{KalmanError, Result};
use crate::filters::ScalarKalmanFilter;
use crate::numeric::Numeric;

/// Checked wrapper around [`ScalarKalmanFilter`] for development and tuning
///
/// Rejects negative or non-finite parameters up front, refuses non-finite
/// measurements, and rolls back any update that would leave the state
/// non-finite or the covariance negative. Every rejection is logged at
/// `warn` level.
///
/// The arithmetic is the same as the unchecked filter's; swap the types once
/// the noise parameters are settled.
///
/// # Examples
///
/// ```
/// use scalar_kalman::filters::ValidatedKalmanFilter;
///
/// assert!(ValidatedKalmanFilter::<f64>::new(-0.1, 1e-5).is_err());
///
/// let mut kf = ValidatedKalmanFilter::<f64>::new(4.7e-3, 1e-5).unwrap();
/// assert!(kf.update(25.0).is_ok());
/// assert!(kf.update(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedKalmanFilter<T: Numeric = f32> {
    inner: ScalarKalmanFilter<T>,
}

impl<T: Numeric> ValidatedKalmanFilter<T> {
    pub fn new(measurement_noise: T, process_noise: T) -> Result<Self> {
        Self::from_config(&KalmanConfig::new(measurement_noise, process_noise))
    }

    pub fn from_config(config: &KalmanConfig<T>) -> Result<Self> {
        config.validate().inspect_err(|err| {
            log::warn!("rejected kalman filter configuration: {err}");
        })?;
        Ok(Self {
            inner: ScalarKalmanFilter::from_config(config),
        })
    }

    /// Feed one measurement
    ///
    /// On error the filter keeps its previous state.
    pub fn update(&mut self, measurement: T) -> Result<T> {
        check_finite("measurement", measurement).inspect_err(|err| {
            log::warn!("dropping measurement: {err}");
        })?;

        let previous = self.inner;
        let estimate = self.inner.update(measurement);
        let covariance = self.inner.error_covariance();

        if !estimate.is_finite() || !covariance.is_finite() || covariance < T::zero() {
            self.inner = previous;
            let err = KalmanError::Diverged {
                estimate: estimate.to_f64(),
                covariance: covariance.to_f64(),
            };
            log::warn!("rolled back kalman update: {err}");
            return Err(err);
        }

        log::trace!("z={measurement:?} x={estimate:?} p={covariance:?}");
        Ok(estimate)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.inner.get()
    }

    #[inline]
    pub fn error_covariance(&self) -> T {
        self.inner.error_covariance()
    }

    /// Overwrite the state, rejecting non-finite values and negative covariance
    pub fn reset(&mut self, estimate: T, covariance: T) -> Result<()> {
        check_finite("estimate", estimate)
            .and_then(|()| check_covariance("covariance", covariance))
            .inspect_err(|err| log::warn!("rejected reset: {err}"))?;
        self.inner.reset(estimate, covariance);
        Ok(())
    }

    #[inline]
    pub fn reset_default(&mut self) {
        self.inner.reset_default();
    }

    #[inline]
    pub fn inner(&self) -> &ScalarKalmanFilter<T> {
        &self.inner
    }

    /// Drop the checks and keep the tuned filter
    #[inline]
    pub fn into_inner(self) -> ScalarKalmanFilter<T> {
        self.inner
    }
}

impl<T: Numeric> TryFrom<KalmanConfig<T>> for ValidatedKalmanFilter<T> {
    type Error = KalmanError;

    fn try_from(config: KalmanConfig<T>) -> Result<Self> {
        Self::from_config(&config)
    }
}
