//! Readiness evaluators
//!
//! Pure functions of their inputs and the DSP catalog: no I/O, no shared
//! mutable state, identical output for identical input.
//!
//! # Evaluators
//! 1. **loudness** - Per-DSP loudness and true-peak readiness
//! 2. **audio_quality** - Overall audio tier with warnings and recommendations
//! 3. **cover_art** - Artwork compliance per DSP and overall tier

pub mod audio_quality;
pub mod cover_art;
pub mod loudness;

// Re-exports for convenience
pub use audio_quality::AudioQualityClassifier;
pub use cover_art::{ColorSpace, CoverArtEvaluator};
pub use loudness::{
    compute_all_dsp_readiness, evaluate_dsp, evaluate_measurement, is_dsp_ready,
    lufs_to_percent, measurement_readiness, LoudnessVerdict,
};
