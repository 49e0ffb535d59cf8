mod kalman;
mod validated;

pub use kalman::{KalmanF32, KalmanF64, ScalarKalmanFilter};
pub use validated::ValidatedKalmanFilter;
