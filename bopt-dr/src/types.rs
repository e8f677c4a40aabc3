//! Input measurements and output reports for distribution readiness
//!
//! Inputs arrive already decoded from an upstream measurement step. Outputs are
//! plain values built fresh on every evaluation and handed to storage and UI
//! layers unchanged.
//!
//! Field names serialize in camelCase and tier literals as
//! `distribution_ready` / `boptone_only` / `rejected`. Report renderers read
//! these verbatim.

use serde::{Deserialize, Serialize};

// ============================================================================
// Quality Tier
// ============================================================================

/// Overall distribution eligibility of an asset
///
/// Ordered by severity: `Rejected < BoptoneOnly < DistributionReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Fails a hard gate; cannot be published anywhere
    Rejected,
    /// Usable on Boptone but not deliverable to every DSP
    BoptoneOnly,
    /// Passes every configured DSP
    DistributionReady,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Rejected => "rejected",
            QualityTier::BoptoneOnly => "boptone_only",
            QualityTier::DistributionReady => "distribution_ready",
        }
    }

    pub fn is_distribution_ready(&self) -> bool {
        matches!(self, QualityTier::DistributionReady)
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Audio
// ============================================================================

/// Loudness facts for one audio asset
///
/// `None` means "not measured". Evaluators degrade on it instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoudnessMeasurement {
    #[serde(default)]
    pub integrated_lufs: Option<f64>,
    #[serde(default)]
    pub true_peak_dbtp: Option<f64>,
    #[serde(default)]
    pub loudness_range_lu: Option<f64>,
    #[serde(default)]
    pub is_clipping: bool,
}

impl LoudnessMeasurement {
    pub fn new(integrated_lufs: f64, true_peak_dbtp: f64) -> Self {
        Self {
            integrated_lufs: Some(integrated_lufs),
            true_peak_dbtp: Some(true_peak_dbtp),
            loudness_range_lu: None,
            is_clipping: false,
        }
    }

    pub fn with_clipping(mut self, is_clipping: bool) -> Self {
        self.is_clipping = is_clipping;
        self
    }
}

/// Readiness of one asset for one DSP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DspReadinessResult {
    pub dsp_id: String,
    pub ready: bool,
}

/// Encoding facts for one audio asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAudioProfile {
    /// Container/codec name as reported by the probe (e.g. "wav", "mp3")
    pub format: String,
    pub sample_rate_hz: u32,
    /// Absent for lossy codecs that have no fixed sample width
    #[serde(default)]
    pub bit_depth: Option<u16>,
    pub channels: u16,
    pub duration_seconds: f64,
    pub is_lossless: bool,
}

/// Result of classifying one audio asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioQualityReport {
    pub quality_tier: QualityTier,
    /// Always equal to `quality_tier == DistributionReady`
    pub is_distribution_ready: bool,
    pub summary: String,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub loudness: Option<LoudnessMeasurement>,
    pub technical_profile: Option<TechnicalAudioProfile>,
    /// Per-DSP loudness readiness, in catalog order
    #[serde(default)]
    pub dsp_readiness: Vec<DspReadinessResult>,
}

// ============================================================================
// Cover Art
// ============================================================================

/// Technical facts for one cover image; `None` means undetermined
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverArtMeasurement {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub color_space: Option<String>,
    #[serde(default)]
    pub file_size_bytes: Option<u64>,
    #[serde(default)]
    pub has_alpha_channel: Option<bool>,
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One finding about an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable machine-readable code (e.g. "CMYK_COLOR_SPACE")
    pub code: String,
    pub severity: Severity,
    pub message: String,
    /// DSP ids, matching `DspArtworkCompliance::dsp_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_dsps: Option<Vec<String>>,
}

impl Issue {
    pub fn new(code: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity,
            message: message.into(),
            affected_dsps: None,
        }
    }

    pub fn with_dsps(mut self, dsps: Vec<String>) -> Self {
        self.affected_dsps = Some(dsps);
        self
    }
}

/// Artwork verdict for one DSP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DspArtworkCompliance {
    pub dsp_id: String,
    /// Display name of the platform
    pub name: String,
    pub ready: bool,
    /// The failing dimension, present only when not ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of evaluating one cover image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverArtReport {
    pub quality_tier: QualityTier,
    pub is_distribution_ready: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Normalized format name when recognized, raw probe value otherwise
    pub format: Option<String>,
    pub color_space: Option<String>,
    pub file_size_bytes: Option<u64>,
    pub has_alpha_channel: Option<bool>,
    /// Error-severity findings
    pub issues: Vec<Issue>,
    /// Warning- and info-severity findings
    pub warnings: Vec<Issue>,
    pub dsp_compliance: Vec<DspArtworkCompliance>,
    pub recommendation: Option<String>,
}
