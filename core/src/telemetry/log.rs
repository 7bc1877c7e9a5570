use crate::signal::Signal;
use log::{debug, info};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_signal(&self, label: &str, signal: &Signal) {
        info!("{} -> {} samples", label, signal.len());
        debug!("{} axis {:?}", label, signal.axis());
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
