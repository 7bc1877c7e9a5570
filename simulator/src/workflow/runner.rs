use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use std::sync::Arc;
use wavecore::math::StatsHelper;
use wavecore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use wavecore::{Signal, SignalPayload, SignalSource, WaveSpec};

pub struct WorkflowResult {
    pub label: String,
    pub signal: Signal,
    pub rms: f64,
    pub peak: f64,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runs the wave described by the workflow config under its display label.
    pub fn execute_configured(&self) -> anyhow::Result<WorkflowResult> {
        self.run(&self.config.wave, self.config.display_label())
    }

    pub fn execute(&self, wave: &WaveSpec) -> anyhow::Result<WorkflowResult> {
        self.run(wave, wave.label())
    }

    pub fn payload(&self, result: &WorkflowResult) -> SignalPayload {
        SignalPayload::new(result.label.clone(), &result.signal, self.config.figure)
    }

    fn run(&self, wave: &WaveSpec, label: String) -> anyhow::Result<WorkflowResult> {
        let logger = LogManager::new();
        let signal = match wave.generate() {
            Ok(signal) => signal,
            Err(err) => {
                self.metrics.record_rejected();
                return Err(err).with_context(|| format!("generating '{}'", label));
            }
        };
        self.metrics.record_generated(signal.len());
        logger.record_signal(&label, &signal);

        let rms = StatsHelper::rms(signal.samples());
        let peak = StatsHelper::peak(signal.samples());
        let notes = vec![
            format!("samples {}", signal.len()),
            format!("rms {:.4}", rms),
            format!("peak {:.4}", peak),
        ];

        Ok(WorkflowResult {
            label,
            signal,
            rms,
            peak,
            notes,
        })
    }
}
