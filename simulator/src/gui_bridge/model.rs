use serde::{Deserialize, Serialize};
use wavecore::math::StatsHelper;
use wavecore::SignalPayload;

/// State served to the visualizer: the latest payload plus summary figures.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VisualizationModel {
    pub payload: SignalPayload,
    pub sample_count: usize,
    pub rms: f64,
    pub peak: f64,
    pub notes: Vec<String>,
}

impl VisualizationModel {
    pub fn from_payload(payload: &SignalPayload) -> Self {
        let rms = StatsHelper::rms(&payload.samples);
        let peak = StatsHelper::peak(&payload.samples);
        let (width, height) = payload.figure.pixel_size();
        Self {
            payload: payload.clone(),
            sample_count: payload.samples.len(),
            rms,
            peak,
            notes: vec![
                format!("rms {:.4}", rms),
                format!("peak {:.4}", peak),
                format!("figure {}x{} px", width, height),
            ],
        }
    }
}
