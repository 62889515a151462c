//! Metric emission primitives.
//!
//! Provides the capability surface the workflow layer records through: a
//! [`MetricSink`] trait for counter/duration emission, a [`MetricRegistry`]
//! with idempotent get-or-create semantics for metric handles keyed by name
//! and tag set, and tag conversion helpers. Everything here is instance-based
//! and injectable; there are no process-wide caches.
#![deny(warnings)]
#![deny(missing_docs)]

mod registry;
mod sink;
mod tags;

pub use self::registry::MetricRegistry;
pub use self::sink::{MetricSink, RegistrySink};
pub use self::tags::{into_labels, MetricTag};
