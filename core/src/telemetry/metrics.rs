use std::sync::Mutex;

/// Counts generation outcomes across calls; safe to share between threads.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub generated: usize,
    pub rejected: usize,
    pub samples: usize,
}

struct Metrics {
    generated: usize,
    rejected: usize,
    samples: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                generated: 0,
                rejected: 0,
                samples: 0,
            }),
        }
    }

    pub fn record_generated(&self, sample_count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.generated += 1;
            metrics.samples += sample_count;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                generated: metrics.generated,
                rejected: metrics.rejected,
                samples: metrics.samples,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
