//! Cumulative latency binning.
//!
//! Classifies a scalar observation (a duration, in whole milliseconds)
//! against a user-supplied linear bucket range, producing the set of
//! cumulative SLO bucket labels the observation satisfies. A validated
//! [`BinConfig`] describes the range; [`compute_bins`] performs the
//! classification. Both are pure: no shared state, no locking, safe to call
//! from any number of threads.
#![deny(warnings)]
#![deny(missing_docs)]

mod binner;
mod config;

pub use self::binner::{compute_bins, OVERFLOW_BIN};
pub use self::config::{BinConfig, BinConfigError, MAX_BINS};
