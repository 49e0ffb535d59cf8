use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scalar_kalman::prelude::*;

fn bench_update(c: &mut Criterion) {
    let mut single = KalmanF32::new(4.7e-3, 1e-5);
    c.bench_function("kalman_update_f32", |b| {
        b.iter(|| black_box(single.update(black_box(21.5))))
    });

    let mut double = KalmanF64::new(4.7e-3, 1e-5);
    c.bench_function("kalman_update_f64", |b| {
        b.iter(|| black_box(double.update(black_box(21.5))))
    });

    let mut checked = ValidatedKalmanFilter::<f32>::new(4.7e-3, 1e-5).unwrap();
    c.bench_function("validated_update_f32", |b| {
        b.iter(|| black_box(checked.update(black_box(21.5))))
    });
}

fn bench_smooth(c: &mut Criterion) {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("smooth_in_place");

    for len in [64, 1024, 16384] {
        let readings: Vec<f32> = (0..len)
            .map(|_| 21.5 + rng.gen_range(-0.2..0.2))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &readings, |b, readings| {
            let mut kf = KalmanF32::new(4.7e-3, 1e-5);
            let mut buffer = readings.clone();
            b.iter(|| {
                buffer.copy_from_slice(readings);
                black_box(kf.smooth_in_place(black_box(&mut buffer)))
            });
        });
    }

    group.finish();
}

fn bench_calibration(c: &mut Criterion) {
    let readings: Vec<f64> = (0..1000).map(|i| 21.5 + ((i % 7) as f64 - 3.0) * 0.01).collect();

    c.bench_function("estimate_measurement_noise_1000", |b| {
        b.iter(|| black_box(estimate_measurement_noise(black_box(readings.as_slice()))))
    });
    c.bench_function("steady_state_gain", |b| {
        b.iter(|| black_box(steady_state_gain(black_box(4.7e-3f64), black_box(1e-5))))
    });
}

criterion_group!(benches, bench_update, bench_smooth, bench_calibration);
criterion_main!(benches);
