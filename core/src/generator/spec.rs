use crate::generator::{CycleParams, TimedWaveParams};
use crate::prelude::{SignalResult, SignalSource};
use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// One generation request, tagged by `mode` when serialized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WaveSpec {
    Cycles(CycleParams),
    Timed(TimedWaveParams),
}

impl WaveSpec {
    pub fn label(&self) -> String {
        self.describe()
    }
}

impl Default for WaveSpec {
    fn default() -> Self {
        WaveSpec::Timed(TimedWaveParams::default())
    }
}

impl SignalSource for WaveSpec {
    fn generate(&self) -> SignalResult<Signal> {
        match self {
            WaveSpec::Cycles(params) => params.generate(),
            WaveSpec::Timed(params) => params.generate(),
        }
    }

    fn describe(&self) -> String {
        match self {
            WaveSpec::Cycles(params) => params.describe(),
            WaveSpec::Timed(params) => params.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::SignalError;

    #[test]
    fn timed_mode_fills_missing_fields_with_defaults() {
        let spec: WaveSpec = serde_json::from_str(r#"{"mode":"timed","frequency":50.0}"#).unwrap();
        match spec {
            WaveSpec::Timed(params) => {
                assert_eq!(params.frequency, 50.0);
                assert_eq!(params.sample_rate, 1000.0);
                assert_eq!(params.end_time, 1.0);
            }
            other => panic!("unexpected spec {:?}", other),
        }
    }

    #[test]
    fn cycles_mode_dispatches_to_cycle_generator() {
        let spec: WaveSpec =
            serde_json::from_str(r#"{"mode":"cycles","cycle_count":2.0,"resolution":64}"#)
                .unwrap();
        assert_eq!(spec.generate().unwrap().len(), 64);
    }

    #[test]
    fn invalid_request_surfaces_invalid_argument() {
        let spec = WaveSpec::Cycles(CycleParams {
            cycle_count: 1.0,
            resolution: 0,
        });
        assert!(matches!(
            spec.generate(),
            Err(SignalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn default_spec_is_reference_timed_wave() {
        let spec = WaveSpec::default();
        assert_eq!(spec.generate().unwrap().len(), 1000);
        assert!(spec.label().starts_with("sine 100 Hz"));
    }
}
