use crate::generator::{ensure_finite, ensure_sample_count};
use crate::math::axis::evenly_spaced;
use crate::prelude::{SignalError, SignalResult, SignalSource};
use crate::signal::{Signal, SignalAxis};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for [`generate_cycles`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CycleParams {
    /// Number of full periods spanned by the signal.
    pub cycle_count: f64,
    /// Number of samples taken across that span.
    pub resolution: usize,
}

impl SignalSource for CycleParams {
    fn generate(&self) -> SignalResult<Signal> {
        generate_cycles(self.cycle_count, self.resolution)
    }

    fn describe(&self) -> String {
        format!(
            "sine {} cycles @ {} samples",
            self.cycle_count, self.resolution
        )
    }
}

/// Samples `cycle_count` periods of a unit sine at `resolution` evenly spaced
/// angles, from 0 up to but excluding `2π * cycle_count`.
///
/// A non-positive `cycle_count` yields an empty signal.
pub fn generate_cycles(cycle_count: f64, resolution: usize) -> SignalResult<Signal> {
    if resolution == 0 {
        return Err(SignalError::InvalidArgument(
            "resolution must be positive".into(),
        ));
    }
    ensure_finite("cycle_count", cycle_count)?;
    ensure_sample_count(resolution as f64)?;

    if cycle_count <= 0.0 {
        debug!("cycle_count {} yields an empty signal", cycle_count);
        return Ok(Signal::new(Vec::new(), SignalAxis::Angular { step: 0.0 }));
    }

    let span = 2.0 * PI * cycle_count;
    let step = span / resolution as f64;
    if !span.is_finite() || !step.is_finite() {
        return Err(SignalError::InvalidArgument(format!(
            "cycle_count {} overflows the angular span",
            cycle_count
        )));
    }
    let samples = evenly_spaced(0.0, step, resolution)
        .mapv(f64::sin)
        .into_raw_vec();

    debug!(
        "generated {} cycles over {} samples (step {:.6} rad)",
        cycle_count, resolution, step
    );
    Ok(Signal::new(samples, SignalAxis::Angular { step }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MAX_SAMPLES;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn one_cycle_at_four_samples_hits_quadrants() {
        let signal = generate_cycles(1.0, 4).unwrap();
        let expected = [0.0, 1.0, 0.0, -1.0];
        assert_eq!(signal.len(), expected.len());
        for (value, expected) in signal.samples().iter().zip(expected) {
            assert_abs_diff_eq!(*value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn axis_excludes_span_endpoint() {
        let signal = generate_cycles(2.0, 8).unwrap();
        let last = signal.position(7).unwrap();
        assert!(last < 4.0 * PI);
        assert_abs_diff_eq!(last, 4.0 * PI * 7.0 / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = generate_cycles(1.0, 0).unwrap_err();
        assert!(matches!(err, SignalError::InvalidArgument(_)));
    }

    #[test]
    fn non_positive_cycle_count_is_empty() {
        assert!(generate_cycles(0.0, 16).unwrap().is_empty());
        assert!(generate_cycles(-3.0, 16).unwrap().is_empty());
    }

    #[test]
    fn non_finite_cycle_count_is_rejected() {
        assert!(generate_cycles(f64::NAN, 16).is_err());
        assert!(generate_cycles(f64::INFINITY, 16).is_err());
    }

    #[test]
    fn overflowing_span_is_rejected() {
        let err = generate_cycles(1.0e308, 4).unwrap_err();
        assert!(matches!(err, SignalError::InvalidArgument(_)));
    }

    #[test]
    fn huge_finite_cycle_count_stays_in_range() {
        let signal = generate_cycles(1.0e300, 4).unwrap();
        assert!(signal.samples().iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        for resolution in [MAX_SAMPLES + 1, 1usize << 40, 1usize << 62] {
            let err = generate_cycles(1.0, resolution).unwrap_err();
            assert!(matches!(err, SignalError::InvalidArgument(_)));
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = generate_cycles(3.7, 1000).unwrap();
        let second = generate_cycles(3.7, 1000).unwrap();
        let first_bits: Vec<u64> = first.samples().iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.samples().iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn params_delegate_to_generator() {
        let params = CycleParams {
            cycle_count: 1.0,
            resolution: 4,
        };
        assert_eq!(params.generate().unwrap(), generate_cycles(1.0, 4).unwrap());
        assert_eq!(params.describe(), "sine 1 cycles @ 4 samples");
    }

    proptest! {
        #[test]
        fn length_matches_resolution(cycles in 0.001f64..100.0, resolution in 1usize..4096) {
            let signal = generate_cycles(cycles, resolution).unwrap();
            prop_assert_eq!(signal.len(), resolution);
        }

        #[test]
        fn samples_stay_within_unit_range(cycles in 0.001f64..100.0, resolution in 1usize..4096) {
            let signal = generate_cycles(cycles, resolution).unwrap();
            prop_assert!(signal.samples().iter().all(|v| (-1.0..=1.0).contains(v)));
        }
    }
}
