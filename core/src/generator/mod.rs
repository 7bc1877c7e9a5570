//! Stateless sine generators.
//!
//! Both generators build an index-based axis first and evaluate the sinusoid
//! over it, so repeated calls with the same parameters are bit-identical.

pub mod cycles;
pub mod spec;
pub mod timed;

pub use cycles::{generate_cycles, CycleParams};
pub use spec::WaveSpec;
pub use timed::{generate_timed_wave, TimedWaveParams};

use crate::prelude::{SignalError, SignalResult};

/// Upper bound on the number of samples a single generator call may hold.
pub const MAX_SAMPLES: usize = 1 << 24;

pub(crate) fn ensure_sample_count(count: f64) -> SignalResult<()> {
    if count <= MAX_SAMPLES as f64 {
        Ok(())
    } else {
        Err(SignalError::InvalidArgument(format!(
            "{} samples requested, limit is {}",
            count, MAX_SAMPLES
        )))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> SignalResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SignalError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}
