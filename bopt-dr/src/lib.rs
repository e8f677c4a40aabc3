//! bopt-dr library interface
//!
//! Distribution readiness engine: turns decoded audio and artwork
//! measurements into per-DSP verdicts, a quality tier, and warnings with
//! recommendations; fans royalty revenue out across writer splits.
//!
//! Everything here is synchronous and side-effect free apart from logging.
//! Callers pass the [`DspCatalog`](bopt_common::DspCatalog) in explicitly.

pub mod error;
pub mod input;
pub mod splits;
pub mod types;
pub mod validators;

pub use crate::error::ValidationError;
pub use crate::splits::{distribute, fan_out, validate_splits, Payout, WriterEarning, WriterSplit};
pub use crate::types::{
    AudioQualityReport, CoverArtMeasurement, CoverArtReport, DspArtworkCompliance,
    DspReadinessResult, Issue, LoudnessMeasurement, QualityTier, Severity, TechnicalAudioProfile,
};
pub use crate::validators::{AudioQualityClassifier, CoverArtEvaluator};
