use snafu::Snafu;

/// Maximum number of bins a single configuration may describe.
///
/// Every bin label becomes a distinct tag value on the emitted metric, so the
/// cap bounds the cardinality a single workflow definition can generate.
pub const MAX_BINS: i64 = 16;

/// A bin configuration error.
///
/// All variants are recoverable: the expected handling is to log a warning
/// and skip bin emission for the offending invocation, never to abort the
/// surrounding workflow handling.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum BinConfigError {
    /// Step was zero or negative.
    #[snafu(display("bin step must be positive, got {}", step))]
    InvalidStep {
        /// The rejected step value.
        step: i64,
    },

    /// The high bound of the range was below the low bound.
    #[snafu(display("bin range is inverted: low {} exceeds high {}", low, high))]
    InvalidRange {
        /// Low bound of the rejected range.
        low: i64,

        /// High bound of the rejected range.
        high: i64,
    },

    /// More bins were requested than the supported maximum.
    #[snafu(display("{} bins requested, but at most {} are supported", requested, MAX_BINS))]
    TooManyBins {
        /// Number of bins the configuration would have produced.
        requested: i64,
    },

    /// The range is not evenly divisible by the step.
    #[snafu(display("range [{}, {}] cannot be split into equal bins of width {}", low, high, step))]
    UnequalBins {
        /// Low bound of the rejected range.
        low: i64,

        /// High bound of the rejected range.
        high: i64,

        /// Step of the rejected range.
        step: i64,
    },
}

/// A validated description of a linear bucket range.
///
/// Holds the low and high bounds of the range along with the step between
/// adjacent bucket thresholds. Construction validates the triple; once built,
/// the configuration is an immutable value with no identity beyond its
/// fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BinConfig {
    low: i64,
    high: i64,
    step: i64,
}

impl BinConfig {
    /// Creates a `BinConfig` from the given bounds and step.
    ///
    /// # Errors
    ///
    /// If the step is not positive, the range is inverted, the range would
    /// produce more than [`MAX_BINS`] bins, or the range is not evenly
    /// divisible by the step, an error is returned. Degenerate inputs are
    /// always rejected here rather than surfacing later as an arithmetic
    /// fault during classification.
    pub fn new(low: i64, high: i64, step: i64) -> Result<Self, BinConfigError> {
        if step <= 0 {
            return Err(BinConfigError::InvalidStep { step });
        }

        let range = match high.checked_sub(low) {
            Some(range) if range >= 0 => range,
            _ => return Err(BinConfigError::InvalidRange { low, high }),
        };

        let requested = range / step;
        if requested > MAX_BINS {
            return Err(BinConfigError::TooManyBins { requested });
        }

        if range % step > 0 {
            return Err(BinConfigError::UnequalBins { low, high, step });
        }

        Ok(Self { low, high, step })
    }

    /// Returns the low bound of the range.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the high bound of the range.
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns the step between adjacent bucket thresholds.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns an iterator over the bucket thresholds, from the low bound to
    /// the high bound inclusive.
    pub fn thresholds(&self) -> impl Iterator<Item = i64> {
        (self.low..=self.high).step_by(self.step as usize)
    }
}
