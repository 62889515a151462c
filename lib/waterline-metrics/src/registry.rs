use metrics::{counter, histogram, Counter, Histogram, Label};
use waterline_common::collections::FastConcurrentHashMap;

/// Identity of a registered metric handle: its name plus its full tag set.
///
/// Labels are kept sorted so that tag order at the call site does not create
/// duplicate handles for the same logical metric.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct InstrumentKey {
    name: String,
    labels: Vec<Label>,
}

impl InstrumentKey {
    fn new(name: &str, labels: &[Label]) -> Self {
        let mut labels = labels.to_vec();
        labels.sort_by(|a, b| (a.key(), a.value()).cmp(&(b.key(), b.value())));

        Self {
            name: name.to_string(),
            labels,
        }
    }
}

/// A registry of metric handles keyed by name and tag set.
///
/// Provides idempotent get-or-create semantics: the first request for a given
/// (name, tags) pair registers the handle with the installed metrics recorder,
/// and subsequent requests return the same handle. Lookups are lock-free
/// concurrent map reads, so the hot path of an already-registered metric does
/// not contend.
pub struct MetricRegistry {
    counters: FastConcurrentHashMap<InstrumentKey, Counter>,
    histograms: FastConcurrentHashMap<InstrumentKey, Histogram>,
}

impl MetricRegistry {
    /// Creates an empty `MetricRegistry`.
    pub fn new() -> Self {
        Self {
            counters: FastConcurrentHashMap::default(),
            histograms: FastConcurrentHashMap::default(),
        }
    }

    /// Gets or creates the counter for the given name and tags.
    pub fn counter(&self, name: &str, tags: &[Label]) -> Counter {
        let key = InstrumentKey::new(name, tags);
        self.counters
            .pin()
            .get_or_insert_with(key, || counter!(name.to_string(), tags.to_vec()))
            .clone()
    }

    /// Gets or creates the histogram for the given name and tags.
    pub fn histogram(&self, name: &str, tags: &[Label]) -> Histogram {
        let key = InstrumentKey::new(name, tags);
        self.histograms
            .pin()
            .get_or_insert_with(key, || histogram!(name.to_string(), tags.to_vec()))
            .clone()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::new()
    }
}
