pub mod figure;
pub mod payload;
pub mod sink;

pub use figure::FigureConfig;
pub use payload::SignalPayload;
pub use sink::{MemorySink, VisualizationSink};
