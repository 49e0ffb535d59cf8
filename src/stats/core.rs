// src/stats/core.rs

use crate::numeric::Numeric;

#[inline]
fn count<T: Numeric>(data: &[T]) -> T {
    T::from_f64(data.len() as f64)
}

/// Arithmetic mean, NaN for an empty slice
#[inline]
pub fn mean<T: Numeric>(data: &[T]) -> T {
    let mut sum = T::zero();
    for &v in data {
        sum += v;
    }
    sum / count(data)
}

/// Population variance (divides by n), NaN for an empty slice
#[inline]
pub fn variance<T: Numeric>(data: &[T]) -> T {
    let m = mean(data);
    let mut sum_sq = T::zero();
    for &v in data {
        let diff = v - m;
        sum_sq += diff * diff;
    }
    sum_sq / count(data)
}
