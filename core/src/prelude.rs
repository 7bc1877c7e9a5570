use crate::signal::Signal;

/// Common error type for signal generation and rendering.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("sink failure: {0}")]
    Sink(String),
}

pub type SignalResult<T> = Result<T, SignalError>;

/// Anything that can produce a complete [`Signal`] in one call.
pub trait SignalSource {
    fn generate(&self) -> SignalResult<Signal>;

    /// Short description used for plot labels and log lines.
    fn describe(&self) -> String;
}
