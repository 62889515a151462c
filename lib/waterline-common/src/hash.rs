//! Hashing primitives.

/// A fast, non-cryptographic hasher.
///
/// Suitable for hash tables where throughput matters and keys are not
/// attacker-controlled in a way that requires a keyed cryptographic hash.
/// Backed by [`foldhash`][foldhash].
///
/// [foldhash]: http://github.com/orlp/foldhash
pub type FastHasher = foldhash::quality::FoldHasher;

/// [`BuildHasher`][std::hash::BuildHasher] implementation for [`FastHasher`].
pub type FastBuildHasher = foldhash::quality::RandomState;
