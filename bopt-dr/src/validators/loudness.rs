//! Loudness readiness evaluator
//!
//! Decides whether a master's integrated loudness and true peak fit a DSP's
//! loudness profile.
//!
//! # Rules (applied in order)
//! 1. True peak above the DSP ceiling: not ready. Peak exactly at the ceiling passes.
//! 2. Integrated loudness above `target + tolerance`: too loud. Exactly at the bound passes.
//! 3. Integrated loudness at or below `target - 4 LU`: too quiet.
//! 4. Otherwise ready.
//!
//! The quiet floor is a fixed 4 LU below target for every platform rather than
//! the DSP's own tolerance. Platforms turn quiet tracks up but cannot repair a
//! hot master, so the lower bound is looser than the upper one.

use crate::types::{DspReadinessResult, LoudnessMeasurement};
use bopt_common::{DspCatalog, DspLoudnessTarget};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Distance below target (LU) at which a track counts as too quiet
pub const QUIET_FLOOR_LU: f64 = 4.0;

/// Bottom of the loudness gauge (LUFS)
pub const GAUGE_MIN_LUFS: f64 = -24.0;

/// Top of the loudness gauge (LUFS)
pub const GAUGE_MAX_LUFS: f64 = -6.0;

/// Why a master is or is not ready for one DSP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoudnessVerdict {
    Ready,
    TruePeakOverCeiling,
    TooLoud,
    TooQuiet,
    /// Loudness or true peak missing or not a finite number
    Unmeasured,
}

impl LoudnessVerdict {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoudnessVerdict::Ready)
    }
}

/// Classify one master against one DSP target
pub fn evaluate_dsp(lufs: f64, true_peak_dbtp: f64, target: &DspLoudnessTarget) -> LoudnessVerdict {
    if !lufs.is_finite() || !true_peak_dbtp.is_finite() {
        return LoudnessVerdict::Unmeasured;
    }

    // True-peak ceiling is a hard gate regardless of loudness
    if true_peak_dbtp > target.max_true_peak_dbtp {
        return LoudnessVerdict::TruePeakOverCeiling;
    }

    if lufs > target.target_lufs + target.tolerance_lufs {
        return LoudnessVerdict::TooLoud;
    }

    if lufs <= target.target_lufs - QUIET_FLOOR_LU {
        return LoudnessVerdict::TooQuiet;
    }

    LoudnessVerdict::Ready
}

/// Whether a master is ready for one DSP
pub fn is_dsp_ready(lufs: f64, true_peak_dbtp: f64, target: &DspLoudnessTarget) -> bool {
    evaluate_dsp(lufs, true_peak_dbtp, target).is_ready()
}

/// Readiness for every catalog DSP, keyed by DSP id
pub fn compute_all_dsp_readiness(
    lufs: f64,
    true_peak_dbtp: f64,
    catalog: &DspCatalog,
) -> BTreeMap<String, bool> {
    catalog
        .loudness_targets()
        .iter()
        .map(|target| (target.id.clone(), is_dsp_ready(lufs, true_peak_dbtp, target)))
        .collect()
}

/// Verdict per catalog DSP for a measurement, in catalog order
///
/// A missing integrated loudness or true peak makes every DSP `Unmeasured`.
pub fn evaluate_measurement<'a>(
    measurement: &LoudnessMeasurement,
    catalog: &'a DspCatalog,
) -> Vec<(&'a DspLoudnessTarget, LoudnessVerdict)> {
    catalog
        .loudness_targets()
        .iter()
        .map(|target| {
            let verdict = match (measurement.integrated_lufs, measurement.true_peak_dbtp) {
                (Some(lufs), Some(peak)) => evaluate_dsp(lufs, peak, target),
                _ => LoudnessVerdict::Unmeasured,
            };
            debug!(
                dsp = %target.id,
                lufs = ?measurement.integrated_lufs,
                true_peak = ?measurement.true_peak_dbtp,
                verdict = ?verdict,
                "DSP loudness verdict"
            );
            (target, verdict)
        })
        .collect()
}

/// Per-DSP readiness flags for a measurement, in catalog order
pub fn measurement_readiness(
    measurement: &LoudnessMeasurement,
    catalog: &DspCatalog,
) -> Vec<DspReadinessResult> {
    evaluate_measurement(measurement, catalog)
        .into_iter()
        .map(|(target, verdict)| DspReadinessResult {
            dsp_id: target.id.clone(),
            ready: verdict.is_ready(),
        })
        .collect()
}

/// Position of a loudness value on the -24..-6 LUFS gauge, as 0..100
pub fn lufs_to_percent(lufs: f64) -> f64 {
    if lufs.is_nan() {
        return 0.0;
    }
    let span = GAUGE_MAX_LUFS - GAUGE_MIN_LUFS;
    ((lufs - GAUGE_MIN_LUFS) / span * 100.0).clamp(0.0, 100.0)
}
