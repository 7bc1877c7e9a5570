use crate::prelude::SignalResult;
use crate::render::SignalPayload;
use crate::telemetry::LogManager;

/// Consumer of generated signals, typically something that plots them.
///
/// Samples arrive in generation order. Implementations validate the figure
/// layout and report failures as [`crate::SignalError::Sink`].
pub trait VisualizationSink {
    fn render(&mut self, payload: &SignalPayload) -> SignalResult<()>;
}

/// Sink that keeps every rendered payload in memory.
#[derive(Default)]
pub struct MemorySink {
    rendered: Vec<SignalPayload>,
    logger: LogManager,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &[SignalPayload] {
        &self.rendered
    }

    pub fn latest(&self) -> Option<&SignalPayload> {
        self.rendered.last()
    }
}

impl VisualizationSink for MemorySink {
    fn render(&mut self, payload: &SignalPayload) -> SignalResult<()> {
        payload.figure.validate()?;
        self.logger.record(&format!(
            "MemorySink rendered '{}' ({} samples)",
            payload.label,
            payload.samples.len()
        ));
        self.rendered.push(payload.clone());
        Ok(())
    }
}
