use metrics::Label;

use crate::registry::MetricRegistry;

/// A destination for emitted metrics.
///
/// This is the capability handed to code that wants to emit metrics without
/// owning any metric storage itself: callers describe the measurement (name
/// plus tags) and the sink decides where it lands. Implementations must be
/// safe to share across threads.
pub trait MetricSink: Send + Sync {
    /// Increments the counter identified by the given name and tags.
    fn record(&self, name: &str, tags: &[Label]);

    /// Records a duration, in milliseconds, against the distribution
    /// identified by the given name and tags.
    fn record_duration(&self, name: &str, duration_ms: u64, tags: &[Label]);
}

/// A [`MetricSink`] backed by a [`MetricRegistry`].
///
/// Counters and histograms are created on first use and reused afterwards,
/// via the registry's get-or-create semantics.
pub struct RegistrySink {
    registry: MetricRegistry,
}

impl RegistrySink {
    /// Creates a `RegistrySink` with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: MetricRegistry::new(),
        }
    }
}

impl MetricSink for RegistrySink {
    fn record(&self, name: &str, tags: &[Label]) {
        self.registry.counter(name, tags).increment(1);
    }

    fn record_duration(&self, name: &str, duration_ms: u64, tags: &[Label]) {
        self.registry.histogram(name, tags).record(duration_ms as f64);
    }
}

#[cfg(test)]
mod tests {
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    use super::*;

    #[test]
    fn record_increments_counter() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let sink = RegistrySink::new();
            let tags = vec![Label::new("workflow_name", "checkout")];

            sink.record("test_counter", &tags);
            sink.record("test_counter", &tags);
            sink.record_duration("test_latency", 42, &tags);
        });

        let metrics = snapshotter.snapshot().into_vec();
        assert_eq!(metrics.len(), 2);

        let counter = metrics
            .iter()
            .find(|(k, _, _, _)| k.key().name() == "test_counter")
            .map(|(_, _, _, value)| value)
            .expect("counter should have been emitted");
        match counter {
            DebugValue::Counter(value) => assert_eq!(*value, 2),
            other => panic!("expected a counter, got: {:?}", other),
        }

        let latency = metrics
            .iter()
            .find(|(k, _, _, _)| k.key().name() == "test_latency")
            .map(|(_, _, _, value)| value)
            .expect("histogram should have been emitted");
        match latency {
            DebugValue::Histogram(values) => assert_eq!(values.len(), 1),
            other => panic!("expected a histogram, got: {:?}", other),
        }
    }
}
