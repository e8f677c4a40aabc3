//! Error types for bopt-dr
//!
//! Only caller contract violations are errors. An asset that is not good
//! enough for distribution is reported as data in its report, never as an error.

use thiserror::Error;

/// Revenue split contract violation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Percentages do not add up to 100 (within 0.01)
    #[error("Split percentages sum to {total:.2}%, expected 100%")]
    SplitSumMismatch { total: f64 },

    /// A single percentage outside [0, 100] or not a number
    #[error("Split {index} has percentage {percentage}, outside [0, 100]")]
    PercentageOutOfRange { index: usize, percentage: f64 },
}
