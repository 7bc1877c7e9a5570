use crate::generator::{ensure_finite, ensure_sample_count};
use crate::math::axis::evenly_spaced;
use crate::prelude::{SignalError, SignalResult, SignalSource};
use crate::signal::{Signal, SignalAxis};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for [`generate_timed_wave`].
///
/// Missing fields fall back to a one-second, 100 Hz unit sine sampled at
/// 1 kHz with no phase offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimedWaveParams {
    pub start_time: f64,
    pub end_time: f64,
    pub sample_rate: f64,
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
}

impl Default for TimedWaveParams {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 1.0,
            sample_rate: 1000.0,
            frequency: 100.0,
            amplitude: 1.0,
            phase: 0.0,
        }
    }
}

impl SignalSource for TimedWaveParams {
    fn generate(&self) -> SignalResult<Signal> {
        generate_timed_wave(
            self.start_time,
            self.end_time,
            self.sample_rate,
            self.frequency,
            self.amplitude,
            self.phase,
        )
    }

    fn describe(&self) -> String {
        format!(
            "sine {} Hz, amplitude {}, phase {} rad, {}..{} s @ {} Hz",
            self.frequency,
            self.amplitude,
            self.phase,
            self.start_time,
            self.end_time,
            self.sample_rate
        )
    }
}

/// Evaluates `amplitude * sin(2π * frequency * t + phase)` on the time axis
/// `t = start_time + i / sample_rate`, from `start_time` up to but excluding
/// `end_time`.
///
/// The signal holds `round((end_time - start_time) * sample_rate)` samples;
/// `end_time <= start_time` yields an empty signal.
pub fn generate_timed_wave(
    start_time: f64,
    end_time: f64,
    sample_rate: f64,
    frequency: f64,
    amplitude: f64,
    phase: f64,
) -> SignalResult<Signal> {
    if !(sample_rate > 0.0) || !sample_rate.is_finite() {
        return Err(SignalError::InvalidArgument(format!(
            "sample_rate must be positive, got {}",
            sample_rate
        )));
    }
    ensure_finite("start_time", start_time)?;
    ensure_finite("end_time", end_time)?;
    ensure_finite("frequency", frequency)?;
    ensure_finite("amplitude", amplitude)?;
    ensure_finite("phase", phase)?;

    let interval = 1.0 / sample_rate;
    let axis = SignalAxis::Temporal {
        start: start_time,
        interval,
    };

    if end_time <= start_time {
        debug!(
            "time window {}..{} is empty, no samples generated",
            start_time, end_time
        );
        return Ok(Signal::new(Vec::new(), axis));
    }

    let count = ((end_time - start_time) * sample_rate).round();
    ensure_sample_count(count)?;
    let count = count as usize;

    // Largest sine argument reached anywhere on the axis must stay finite.
    let angular_frequency = 2.0 * PI * frequency;
    let max_argument =
        angular_frequency.abs() * start_time.abs().max(end_time.abs()) + phase.abs();
    if !angular_frequency.is_finite() || !max_argument.is_finite() {
        return Err(SignalError::InvalidArgument(format!(
            "frequency {} over {}..{} s overflows the sine argument",
            frequency, start_time, end_time
        )));
    }
    let samples = evenly_spaced(start_time, interval, count)
        .mapv(|t| amplitude * (angular_frequency * t + phase).sin())
        .into_raw_vec();

    debug!(
        "generated {} samples of {} Hz at {} samples/s",
        count, frequency, sample_rate
    );
    Ok(Signal::new(samples, axis))
}
