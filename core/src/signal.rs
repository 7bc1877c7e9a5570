use serde::{Deserialize, Serialize};

/// Maps a sample index onto the axis the signal was generated along.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalAxis {
    /// Radians, starting at zero.
    Angular { step: f64 },
    /// Seconds, starting at `start`.
    Temporal { start: f64, interval: f64 },
}

impl SignalAxis {
    pub fn position(&self, index: usize) -> f64 {
        match *self {
            SignalAxis::Angular { step } => index as f64 * step,
            SignalAxis::Temporal { start, interval } => start + index as f64 * interval,
        }
    }
}

/// Finite, ordered sequence of generated samples.
///
/// A signal is created by exactly one generator call and never mutated
/// afterwards; consumers either borrow the samples or take them with
/// [`Signal::into_samples`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    axis: SignalAxis,
}

impl Signal {
    pub(crate) fn new(samples: Vec<f64>, axis: SignalAxis) -> Self {
        Self { samples, axis }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn axis(&self) -> SignalAxis {
        self.axis
    }

    /// Axis position of the sample at `index`.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.samples.len()).then(|| self.axis.position(index))
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples.len()).map(move |index| self.axis.position(index))
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporal_axis_offsets_from_start() {
        let signal = Signal::new(
            vec![0.0, 0.5, 1.0],
            SignalAxis::Temporal {
                start: 2.0,
                interval: 0.25,
            },
        );
        assert_eq!(signal.position(0), Some(2.0));
        assert_eq!(signal.position(2), Some(2.5));
        assert_eq!(signal.position(3), None);
    }

    #[test]
    fn positions_follow_sample_order() {
        let signal = Signal::new(vec![0.0; 4], SignalAxis::Angular { step: 0.5 });
        let positions: Vec<f64> = signal.positions().collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn signal_serializes_axis_kind() {
        let signal = Signal::new(vec![1.0], SignalAxis::Angular { step: 1.0 });
        let json = serde_json::to_string(&signal).unwrap();
        assert!(json.contains("\"kind\":\"angular\""));
        let decoded: Signal = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, signal);
    }
}
