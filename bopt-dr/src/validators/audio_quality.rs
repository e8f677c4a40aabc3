//! Audio quality tier classifier
//!
//! Combines the technical profile, per-DSP loudness verdicts and clipping
//! detection into one [`AudioQualityReport`].
//!
//! # Tier Determination
//! - **rejected**: technical profile missing or invalid (zero sample rate,
//!   zero channels, non-positive duration), or clipping with zero DSPs ready
//! - **distribution_ready**: every DSP ready, no clipping, valid profile
//! - **boptone_only**: everything else
//!
//! Warnings are grouped by reason, so five DSPs failing for the same reason
//! produce one warning naming all five. Every warning that blocks distribution
//! has a matching recommendation.
//!
//! # Example
//! ```rust
//! use bopt_common::DspCatalog;
//! use bopt_dr::types::{LoudnessMeasurement, QualityTier, TechnicalAudioProfile};
//! use bopt_dr::validators::AudioQualityClassifier;
//!
//! let catalog = DspCatalog::builtin();
//! let classifier = AudioQualityClassifier::new(&catalog);
//! let profile = TechnicalAudioProfile {
//!     format: "wav".to_string(),
//!     sample_rate_hz: 48000,
//!     bit_depth: Some(24),
//!     channels: 2,
//!     duration_seconds: 215.0,
//!     is_lossless: true,
//! };
//! let loudness = LoudnessMeasurement::new(-14.0, -2.0).with_clipping(true);
//!
//! let report = classifier.classify(Some(&profile), Some(&loudness));
//! assert_ne!(report.quality_tier, QualityTier::DistributionReady);
//! ```

use crate::types::{
    AudioQualityReport, DspReadinessResult, LoudnessMeasurement, QualityTier,
    TechnicalAudioProfile,
};
use crate::validators::loudness::{evaluate_measurement, LoudnessVerdict, QUIET_FLOOR_LU};
use bopt_common::{DspCatalog, DspLoudnessTarget};
use tracing::debug;

/// Sample rate below which a master is flagged as sub-CD quality (Hz)
const CD_SAMPLE_RATE_HZ: u32 = 44_100;

/// Bit depth below which a lossless master is flagged as sub-CD quality
const CD_BIT_DEPTH: u16 = 16;

/// Warnings and their actionable counterparts, collected in evaluation order
#[derive(Debug, Default)]
struct Findings {
    warnings: Vec<String>,
    recommendations: Vec<String>,
}

impl Findings {
    fn push(&mut self, warning: String, recommendation: String) {
        self.warnings.push(warning);
        self.recommendations.push(recommendation);
    }
}

/// Audio quality classifier
///
/// Borrows the DSP catalog it evaluates against.
pub struct AudioQualityClassifier<'a> {
    catalog: &'a DspCatalog,
}

impl<'a> AudioQualityClassifier<'a> {
    pub fn new(catalog: &'a DspCatalog) -> Self {
        Self { catalog }
    }

    /// Classify one audio asset
    ///
    /// Never fails: missing inputs degrade the tier and add a warning.
    pub fn classify(
        &self,
        technical_profile: Option<&TechnicalAudioProfile>,
        loudness: Option<&LoudnessMeasurement>,
    ) -> AudioQualityReport {
        let mut findings = Findings::default();

        let profile_valid = match technical_profile {
            Some(profile) => check_profile(profile, &mut findings),
            None => {
                findings.push(
                    "Technical profile unavailable: the audio file could not be analyzed"
                        .to_string(),
                    "Re-upload the audio file so its format can be analyzed".to_string(),
                );
                false
            }
        };

        let measurement = loudness.cloned().unwrap_or_default();
        let verdicts = evaluate_measurement(&measurement, self.catalog);
        let total = verdicts.len();
        let ready_count = verdicts.iter().filter(|(_, v)| v.is_ready()).count();

        describe_loudness(&measurement, &verdicts, &mut findings);

        let clipping = measurement.is_clipping;
        if clipping {
            findings.push(
                "Clipping detected: the master contains clipped samples".to_string(),
                "Re-master to eliminate clipping before resubmission".to_string(),
            );
        }

        let quality_tier = if !profile_valid || (ready_count == 0 && clipping) {
            QualityTier::Rejected
        } else if total > 0 && ready_count == total && !clipping {
            QualityTier::DistributionReady
        } else {
            QualityTier::BoptoneOnly
        };

        let summary = summarize(
            quality_tier,
            profile_valid,
            clipping,
            measurement.integrated_lufs.is_some(),
            ready_count,
            total,
        );

        debug!(
            tier = %quality_tier,
            ready = ready_count,
            total = total,
            clipping = clipping,
            warnings = findings.warnings.len(),
            "Audio quality classification complete"
        );

        let dsp_readiness = verdicts
            .iter()
            .map(|(target, verdict)| DspReadinessResult {
                dsp_id: target.id.clone(),
                ready: verdict.is_ready(),
            })
            .collect();

        AudioQualityReport {
            quality_tier,
            is_distribution_ready: quality_tier.is_distribution_ready(),
            summary,
            warnings: findings.warnings,
            recommendations: findings.recommendations,
            loudness: loudness.cloned(),
            technical_profile: technical_profile.cloned(),
            dsp_readiness,
        }
    }
}

/// Record profile problems; returns false when the profile fails a hard gate
fn check_profile(profile: &TechnicalAudioProfile, findings: &mut Findings) -> bool {
    let mut valid = true;

    if profile.sample_rate_hz == 0 {
        valid = false;
        findings.push(
            "Invalid technical profile: sample rate is 0 Hz".to_string(),
            "Re-export the master with a valid sample rate (44.1 kHz or higher)".to_string(),
        );
    }

    if !profile.duration_seconds.is_finite() || profile.duration_seconds <= 0.0 {
        valid = false;
        findings.push(
            "Invalid technical profile: duration is zero or unreadable".to_string(),
            "Re-export the file; the decoded audio has no playable duration".to_string(),
        );
    }

    if profile.channels == 0 {
        valid = false;
        findings.push(
            "Invalid technical profile: no audio channels".to_string(),
            "Re-export the master as mono or stereo audio".to_string(),
        );
    }

    if !valid {
        return false;
    }

    // Advisory only from here on
    if !profile.is_lossless {
        findings.push(
            format!("Lossy source ({}) may limit quality", profile.format),
            "Upload a lossless master (WAV or FLAC) for hi-fi platforms".to_string(),
        );
    }

    if profile.sample_rate_hz < CD_SAMPLE_RATE_HZ {
        findings.push(
            format!(
                "Sample rate {} Hz is below CD quality (44.1 kHz)",
                profile.sample_rate_hz
            ),
            "Export at 44.1 kHz or higher".to_string(),
        );
    }

    if let Some(bits) = profile.bit_depth {
        if profile.is_lossless && bits < CD_BIT_DEPTH {
            findings.push(
                format!("Bit depth {}-bit is below CD quality (16-bit)", bits),
                "Export at 16-bit or higher (24-bit preferred)".to_string(),
            );
        }
    }

    true
}

/// One warning and recommendation per failing reason class
fn describe_loudness(
    measurement: &LoudnessMeasurement,
    verdicts: &[(&DspLoudnessTarget, LoudnessVerdict)],
    findings: &mut Findings,
) {
    let with = |wanted: LoudnessVerdict| -> Vec<&DspLoudnessTarget> {
        verdicts
            .iter()
            .filter(|(_, v)| *v == wanted)
            .map(|(t, _)| *t)
            .collect()
    };

    let unmeasured = with(LoudnessVerdict::Unmeasured);
    if !unmeasured.is_empty() {
        let what = match (measurement.integrated_lufs, measurement.true_peak_dbtp) {
            (None, _) => "Loudness not measured",
            (Some(_), None) => "True peak not measured",
            _ => "Loudness measurement unreadable",
        };
        findings.push(
            format!(
                "{}: readiness could not be verified for {}",
                what,
                names(&unmeasured)
            ),
            "Run loudness analysis (integrated LUFS and true peak) before submitting for distribution"
                .to_string(),
        );
    }

    let over_ceiling = with(LoudnessVerdict::TruePeakOverCeiling);
    if !over_ceiling.is_empty() {
        let peak = measurement.true_peak_dbtp.unwrap_or_default();
        let strictest = over_ceiling
            .iter()
            .map(|t| t.max_true_peak_dbtp)
            .fold(f64::INFINITY, f64::min);
        findings.push(
            format!(
                "True peak {:.1} dBTP exceeds the ceiling for {}",
                peak,
                names(&over_ceiling)
            ),
            format!(
                "Apply a true-peak limiter so peaks stay at or below {:.1} dBTP",
                strictest
            ),
        );
    }

    let lufs = measurement.integrated_lufs.unwrap_or_default();

    let too_loud = with(LoudnessVerdict::TooLoud);
    if !too_loud.is_empty() {
        let targets: Vec<String> = too_loud
            .iter()
            .map(|t| {
                format!(
                    "{} {:.1} ±{:.1} LUFS",
                    t.display_name, t.target_lufs, t.tolerance_lufs
                )
            })
            .collect();
        findings.push(
            format!(
                "Too loud for {}: integrated loudness {:.1} LUFS",
                names(&too_loud),
                lufs
            ),
            format!(
                "Reduce integrated loudness to around target ±tolerance ({})",
                targets.join(", ")
            ),
        );
    }

    let too_quiet = with(LoudnessVerdict::TooQuiet);
    if !too_quiet.is_empty() {
        let targets: Vec<String> = too_quiet
            .iter()
            .map(|t| format!("{} {:.1} LUFS", t.display_name, t.target_lufs))
            .collect();
        findings.push(
            format!(
                "Too quiet for {}: integrated loudness {:.1} LUFS is {} LU or more below target",
                names(&too_quiet),
                lufs,
                QUIET_FLOOR_LU
            ),
            format!(
                "Raise integrated loudness toward the platform target ({})",
                targets.join(", ")
            ),
        );
    }
}

fn names(targets: &[&DspLoudnessTarget]) -> String {
    targets
        .iter()
        .map(|t| t.display_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize(
    tier: QualityTier,
    profile_valid: bool,
    clipping: bool,
    measured: bool,
    ready_count: usize,
    total: usize,
) -> String {
    match tier {
        QualityTier::DistributionReady => {
            format!("Ready for distribution to all {} streaming platforms", total)
        }
        QualityTier::Rejected if !profile_valid => {
            "Rejected: the technical profile is missing or invalid".to_string()
        }
        QualityTier::Rejected => {
            "Rejected: clipping detected and no streaming platform accepts this master".to_string()
        }
        QualityTier::BoptoneOnly if !measured => {
            "Available on Boptone only: loudness not measured".to_string()
        }
        QualityTier::BoptoneOnly if clipping => format!(
            "Available on Boptone only: clipping detected ({} of {} platforms otherwise ready)",
            ready_count, total
        ),
        QualityTier::BoptoneOnly => format!(
            "Available on Boptone only: ready for {} of {} streaming platforms",
            ready_count, total
        ),
    }
}
