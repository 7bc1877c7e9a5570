use ndarray::Array1;

/// Builds `count` evenly spaced positions `start + i * step`.
///
/// Positions are computed from the index rather than by accumulating `step`,
/// so the length is exactly `count` and no rounding error builds up along the
/// axis.
pub fn evenly_spaced(start: f64, step: f64, count: usize) -> Array1<f64> {
    Array1::from_shape_fn(count, |index| start + index as f64 * step)
}
