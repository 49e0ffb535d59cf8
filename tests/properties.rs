use approx::assert_relative_eq;
use scalar_kalman::prelude::*;

#[test]
fn test_converges_monotonically_on_constant_input() {
    let (rk, qk) = (0.5, 1e-3);
    let mut kf = KalmanF64::new(rk, qk);
    let target = 12.0;

    let mut last_estimate = kf.get();
    let mut last_covariance = kf.error_covariance();

    for _ in 0..100 {
        let estimate = kf.update(target);
        let covariance = kf.error_covariance();

        assert!(estimate >= last_estimate && estimate <= target);
        assert!(covariance <= last_covariance);

        last_estimate = estimate;
        last_covariance = covariance;
    }

    for _ in 0..1000 {
        kf.update(target);
    }

    // Fixed point: P = (1 - K) (P + Qk), K = (P + Qk) / (Rk + P + Qk)
    let p = kf.error_covariance();
    let k = (p + qk) / (rk + p + qk);
    assert_relative_eq!(p, (1.0 - k) * (p + qk), max_relative = 1e-9);
    assert_relative_eq!(p, steady_state_covariance(rk, qk), max_relative = 1e-9);
    assert_relative_eq!(kf.get(), target, max_relative = 1e-9);
}

#[test]
fn test_long_constant_sequence_is_stable() {
    let mut single = KalmanF32::new(4.7e-3, 1e-5);
    let mut double = KalmanF64::new(4.7e-3, 1e-5);

    for _ in 0..1000 {
        let a = single.update(20.0);
        let b = double.update(20.0);
        assert!(a.is_finite() && b.is_finite());
        assert!(a <= 20.0 && b <= 20.0);
    }

    assert_relative_eq!(single.get(), 20.0, max_relative = 1e-5);
    assert_relative_eq!(double.get(), 20.0, max_relative = 1e-9);
    assert!(single.error_covariance() > 0.0);
    assert!(double.error_covariance() > 0.0);
}

#[test]
fn test_zero_process_noise_moves_partway() {
    let mut kf = KalmanF64::new(0.25, 0.0);
    kf.reset(10.0, 0.25);

    let estimate = kf.update(14.0);
    assert!(estimate > 10.0 && estimate < 14.0);
    assert_eq!(estimate, 12.0);
}

#[test]
fn test_reset_overrides_history() {
    let mut kf = KalmanF32::new(0.1, 0.01);
    for z in [5.0, 6.0, 7.0, 1e6, -3.0] {
        kf.update(z);
    }

    kf.reset(-2.5, 4.0);
    assert_eq!(kf.get(), -2.5);
    assert_eq!(kf.error_covariance(), 4.0);

    kf.reset_default();
    assert_eq!(kf.get(), 0.0);
    assert_eq!(kf.error_covariance(), 1.0);
}

#[test]
fn test_degenerate_inputs_propagate() {
    // Rk = Qk = 0 with collapsed covariance: 0 / 0
    let mut kf = KalmanF64::new(0.0, 0.0);
    kf.reset(5.0, 0.0);
    assert!(kf.update(6.0).is_nan());
    assert!(kf.get().is_nan());

    // Negative noise is accepted without complaint
    let mut kf = KalmanF64::new(-1.0, 0.0);
    let estimate = kf.update(1.0);
    assert!(estimate.is_infinite() || estimate.is_nan());

    // The checked wrapper refuses both configurations
    assert_eq!(
        ValidatedKalmanFilter::<f64>::new(0.0, 0.0),
        Err(KalmanError::DegenerateNoise)
    );
    assert!(ValidatedKalmanFilter::<f64>::new(-1.0, 0.0).is_err());
}
