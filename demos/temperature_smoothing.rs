//! Temperature Smoothing Demonstration
//!
//! Simulates a DS18B20-style thermometer (0.0625 °C resolution, Gaussian
//! noise) in a room that slowly warms up, calibrates Rk from the first
//! readings, and prints raw and filtered values as CSV.
//!
//! # Running
//!
//! ```bash
//! cargo run --example temperature_smoothing --release > samples.csv
//!
//! # With the checked filter's trace output on stderr
//! RUST_LOG=trace cargo run --example temperature_smoothing --release
//! ```

use rand::prelude::*;
use rand_distr::Normal;
use scalar_kalman::prelude::*;
use std::time::Instant;

const SAMPLES: usize = 600;
const WARMUP: usize = 60;
const RESOLUTION: f32 = 0.0625;
const PROCESS_NOISE: f32 = 1e-5;

/// True room temperature at sample `i`: flat, then a slow ramp
fn room_temperature(i: usize) -> f32 {
    let start = 21.0;
    if i < SAMPLES / 2 {
        start
    } else {
        start + (i - SAMPLES / 2) as f32 * 0.005
    }
}

/// One sensor reading, quantized like the real part
fn read_sensor(i: usize, rng: &mut StdRng, noise: &Normal<f32>) -> f32 {
    let raw = room_temperature(i) + noise.sample(rng);
    (raw / RESOLUTION).round() * RESOLUTION
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2018);
    let noise = Normal::new(0.0, 0.08).expect("valid standard deviation");

    let readings: Vec<f32> = (0..SAMPLES).map(|i| read_sensor(i, &mut rng, &noise)).collect();

    // === Calibration ===
    let warmup = &readings[..WARMUP];
    let rk = estimate_measurement_noise(warmup).expect("warm-up window has samples");
    eprintln!("Rk={rk:.6} Qk={PROCESS_NOISE:e}");
    eprintln!(
        "steady state: gain={:.4} covariance={:.6}",
        steady_state_gain(rk, PROCESS_NOISE),
        steady_state_covariance(rk, PROCESS_NOISE)
    );

    let config = KalmanConfig::new(rk, PROCESS_NOISE).with_initial_state(warmup[0], rk);
    let mut kf = match ValidatedKalmanFilter::from_config(&config) {
        Ok(kf) => kf,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            std::process::exit(1);
        }
    };

    // === Filtering ===
    println!("sample,true,raw,filtered");
    let start = Instant::now();
    for (i, &z) in readings.iter().enumerate() {
        match kf.update(z) {
            Ok(estimate) => println!("{i},{:.4},{z:.4},{estimate:.4}", room_temperature(i)),
            Err(err) => eprintln!("sample {i}: {err}"),
        }
    }
    let elapsed = start.elapsed();

    eprintln!(
        "{} updates in {:?} ({} bytes of filter state)",
        SAMPLES,
        elapsed,
        std::mem::size_of::<ScalarKalmanFilter<f32>>()
    );
}
