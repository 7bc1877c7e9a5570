//! Deterministic sine-signal generation for the sinewave workspace.
//!
//! The generator functions are pure: the same parameters always yield the same
//! samples. Rendering is delegated to a [`render::VisualizationSink`], which
//! receives the samples in generation order together with a figure layout.

pub mod generator;
pub mod math;
pub mod prelude;
pub mod render;
pub mod signal;
pub mod telemetry;

pub use generator::{generate_cycles, generate_timed_wave, CycleParams, TimedWaveParams, WaveSpec};
pub use prelude::{SignalError, SignalResult, SignalSource};
pub use render::{FigureConfig, SignalPayload, VisualizationSink};
pub use signal::{Signal, SignalAxis};
