use crate::render::FigureConfig;
use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// Everything a sink needs to draw one signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SignalPayload {
    pub label: String,
    pub samples: Vec<f64>,
    #[serde(default)]
    pub figure: FigureConfig,
}

impl SignalPayload {
    pub fn new(label: impl Into<String>, signal: &Signal, figure: FigureConfig) -> Self {
        Self {
            label: label.into(),
            samples: signal.samples().to_vec(),
            figure,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
