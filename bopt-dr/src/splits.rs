//! Revenue split fan-out calculator
//!
//! Distributes one revenue amount (integer cents) across a track's writer
//! splits by percentage.
//!
//! # Rounding
//! Each share is `floor(total * percentage / 100)`. Flooring never
//! over-distributes; the leftover cents stay with the platform and are
//! reported as `retained_cents` by [`distribute`].
//!
//! # Pending invitations
//! A split whose `writer_profile_id` is `None` belongs to an invitation not
//! yet accepted. It counts toward the 100% check but is skipped at payout.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Allowed drift of the percentage sum away from 100
pub const SUM_TOLERANCE: f64 = 0.01;

/// One writer's share of a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterSplit {
    #[serde(default)]
    pub writer_profile_id: Option<i64>,
    pub percentage: f64,
}

impl WriterSplit {
    pub fn new(writer_profile_id: i64, percentage: f64) -> Self {
        Self {
            writer_profile_id: Some(writer_profile_id),
            percentage,
        }
    }

    /// Split held for a writer who has not accepted the invitation yet
    pub fn pending(percentage: f64) -> Self {
        Self {
            writer_profile_id: None,
            percentage,
        }
    }
}

/// Amount owed to one writer for one revenue event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterEarning {
    pub writer_profile_id: i64,
    pub earnings_cents: u64,
}

/// Validated fan-out of one revenue event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub earnings: Vec<WriterEarning>,
    pub distributed_cents: u64,
    /// Rounding dust plus shares of pending invitations
    pub retained_cents: u64,
}

/// Check a track's full split set
///
/// Every percentage must lie in `[0, 100]` and the sum must be within
/// [`SUM_TOLERANCE`] of 100. Pending splits are included.
pub fn validate_splits(splits: &[WriterSplit]) -> Result<(), ValidationError> {
    for (index, split) in splits.iter().enumerate() {
        if !(0.0..=100.0).contains(&split.percentage) {
            return Err(ValidationError::PercentageOutOfRange {
                index,
                percentage: split.percentage,
            });
        }
    }

    let total: f64 = splits.iter().map(|s| s.percentage).sum();
    if (total - 100.0).abs() > SUM_TOLERANCE {
        return Err(ValidationError::SplitSumMismatch { total });
    }

    Ok(())
}

/// Each payable writer's floored share of `total_revenue_cents`
///
/// Skips pending splits and non-positive percentages. Does not validate;
/// call [`validate_splits`] first or use [`distribute`].
pub fn fan_out(total_revenue_cents: u64, splits: &[WriterSplit]) -> Vec<WriterEarning> {
    let mut distributed: u64 = 0;

    splits
        .iter()
        .filter_map(|split| match split.writer_profile_id {
            Some(id) if split.percentage > 0.0 => Some((id, split.percentage)),
            _ => None,
        })
        .map(|(writer_profile_id, percentage)| {
            let share = (total_revenue_cents as f64 * percentage / 100.0).floor();
            let mut earnings_cents = share as u64;

            // Only reachable when the sum overshoots 100 within tolerance
            let remaining = total_revenue_cents - distributed;
            if earnings_cents > remaining {
                warn!(
                    writer_profile_id,
                    share = earnings_cents,
                    remaining,
                    "Capping writer share at remaining revenue"
                );
                earnings_cents = remaining;
            }
            distributed += earnings_cents;

            WriterEarning {
                writer_profile_id,
                earnings_cents,
            }
        })
        .collect()
}

/// Validate, then fan out
pub fn distribute(
    total_revenue_cents: u64,
    splits: &[WriterSplit],
) -> Result<Payout, ValidationError> {
    validate_splits(splits)?;

    let earnings = fan_out(total_revenue_cents, splits);
    let distributed_cents: u64 = earnings.iter().map(|e| e.earnings_cents).sum();
    let retained_cents = total_revenue_cents - distributed_cents;

    debug!(
        total = total_revenue_cents,
        writers = earnings.len(),
        distributed = distributed_cents,
        retained = retained_cents,
        "Revenue fan-out complete"
    );

    Ok(Payout {
        earnings,
        distributed_cents,
        retained_cents,
    })
}
