//! Common helpers shared across Waterline crates.
#![deny(warnings)]
#![deny(missing_docs)]

pub mod collections;
pub mod hash;
