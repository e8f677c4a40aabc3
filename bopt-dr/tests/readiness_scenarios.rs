//! Distribution readiness scenarios
//!
//! Runs the evaluators end to end against the builtin DSP catalog and checks
//! the JSON contract that report renderers depend on.

use bopt_common::DspCatalog;
use bopt_dr::validators::{compute_all_dsp_readiness, is_dsp_ready, lufs_to_percent};
use bopt_dr::{
    AudioQualityClassifier, CoverArtEvaluator, CoverArtMeasurement, LoudnessMeasurement,
    QualityTier, TechnicalAudioProfile,
};

fn wav_profile() -> TechnicalAudioProfile {
    TechnicalAudioProfile {
        format: "wav".to_string(),
        sample_rate_hz: 44_100,
        bit_depth: Some(24),
        channels: 2,
        duration_seconds: 184.2,
        is_lossless: true,
    }
}

fn square_cover(size: u32) -> CoverArtMeasurement {
    CoverArtMeasurement {
        width: Some(size),
        height: Some(size),
        format: Some("jpeg".to_string()),
        color_space: Some("rgb".to_string()),
        file_size_bytes: Some(4 * 1024 * 1024),
        has_alpha_channel: Some(false),
    }
}

// =============================================================================
// Loudness properties
// =============================================================================

#[test]
fn target_point_at_ceiling_is_ready_for_every_dsp() {
    let catalog = DspCatalog::builtin();
    for target in catalog.loudness_targets() {
        assert!(
            is_dsp_ready(target.target_lufs, target.max_true_peak_dbtp, target),
            "{} should accept its own target at its ceiling",
            target.id
        );
    }
}

#[test]
fn above_upper_bound_is_never_ready() {
    let catalog = DspCatalog::builtin();
    for target in catalog.loudness_targets() {
        let too_loud = target.upper_bound_lufs() + 0.1;
        for peak in [-6.0, -3.0, target.max_true_peak_dbtp] {
            assert!(!is_dsp_ready(too_loud, peak, target), "{} at {}", target.id, peak);
        }
    }
}

#[test]
fn over_ceiling_is_never_ready() {
    let catalog = DspCatalog::builtin();
    for target in catalog.loudness_targets() {
        let hot_peak = target.max_true_peak_dbtp + 0.1;
        for lufs in [-30.0, target.target_lufs, -6.0] {
            assert!(!is_dsp_ready(lufs, hot_peak, target), "{} at {}", target.id, lufs);
        }
    }
}

#[test]
fn spotify_scenarios() {
    let catalog = DspCatalog::builtin();
    let spotify = catalog.loudness_target("spotify").unwrap();

    assert!(is_dsp_ready(-14.0, -1.5, spotify));
    assert!(!is_dsp_ready(-12.9, -1.5, spotify));
    // Clipping peak overrides acceptable loudness
    assert!(!is_dsp_ready(-14.0, 0.0, spotify));
}

#[test]
fn gauge_positions() {
    assert_eq!(lufs_to_percent(-24.0), 0.0);
    assert_eq!(lufs_to_percent(-6.0), 100.0);
    assert_eq!(lufs_to_percent(-15.0), 50.0);
}

#[test]
fn readiness_map_is_keyed_by_every_catalog_dsp() {
    let catalog = DspCatalog::builtin();
    let readiness = compute_all_dsp_readiness(-16.0, -2.5, &catalog);
    let keys: Vec<&str> = readiness.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["amazon_music", "apple_music", "deezer", "spotify", "tidal", "youtube"]
    );
    assert!(readiness.values().all(|ready| *ready));
}

// =============================================================================
// Audio classification
// =============================================================================

#[test]
fn master_inside_every_window_is_distribution_ready() {
    let catalog = DspCatalog::builtin();
    let report = AudioQualityClassifier::new(&catalog).classify(
        Some(&wav_profile()),
        Some(&LoudnessMeasurement::new(-16.0, -2.5)),
    );

    assert_eq!(report.quality_tier, QualityTier::DistributionReady);
    assert!(report.is_distribution_ready);
    assert!(report.warnings.is_empty());
    assert!(report.recommendations.is_empty());
    assert_eq!(report.dsp_readiness.len(), catalog.loudness_targets().len());
}

#[test]
fn clipping_never_yields_distribution_ready() {
    let catalog = DspCatalog::builtin();
    let classifier = AudioQualityClassifier::new(&catalog);

    let report = classifier.classify(
        Some(&wav_profile()),
        Some(&LoudnessMeasurement::new(-16.0, -2.5).with_clipping(true)),
    );
    assert_ne!(report.quality_tier, QualityTier::DistributionReady);
    assert!(!report.is_distribution_ready);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r == "Re-master to eliminate clipping before resubmission"));

    // Clipping with no platform ready is a hard reject
    let report = classifier.classify(
        Some(&wav_profile()),
        Some(&LoudnessMeasurement::new(-8.0, 0.5).with_clipping(true)),
    );
    assert_eq!(report.quality_tier, QualityTier::Rejected);
}

#[test]
fn missing_profile_is_rejected() {
    let catalog = DspCatalog::builtin();
    let report = AudioQualityClassifier::new(&catalog)
        .classify(None, Some(&LoudnessMeasurement::new(-16.0, -2.5)));
    assert_eq!(report.quality_tier, QualityTier::Rejected);
}

#[test]
fn missing_loudness_stays_on_boptone() {
    let catalog = DspCatalog::builtin();
    let report = AudioQualityClassifier::new(&catalog).classify(Some(&wav_profile()), None);
    assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
    assert!(report.dsp_readiness.iter().all(|r| !r.ready));
}

#[test]
fn audio_report_json_contract() {
    let catalog = DspCatalog::builtin();
    let report = AudioQualityClassifier::new(&catalog).classify(
        Some(&wav_profile()),
        Some(&LoudnessMeasurement::new(-14.0, -1.5)),
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["qualityTier"], "boptone_only");
    assert_eq!(json["isDistributionReady"], false);
    assert!(json["summary"].is_string());
    assert!(json["warnings"].is_array());
    assert!(json["recommendations"].is_array());
    assert_eq!(json["loudness"]["integratedLufs"], -14.0);
    assert_eq!(json["technicalProfile"]["sampleRateHz"], 44_100);
    assert_eq!(json["dspReadiness"][0]["dspId"], "spotify");
}

#[test]
fn evaluators_are_idempotent() {
    let catalog = DspCatalog::builtin();
    let classifier = AudioQualityClassifier::new(&catalog);
    let loudness = LoudnessMeasurement::new(-13.2, -0.4).with_clipping(true);
    let first = serde_json::to_string(&classifier.classify(Some(&wav_profile()), Some(&loudness)))
        .unwrap();
    let second = serde_json::to_string(&classifier.classify(Some(&wav_profile()), Some(&loudness)))
        .unwrap();
    assert_eq!(first, second);

    let evaluator = CoverArtEvaluator::new(&catalog);
    let cover = CoverArtMeasurement {
        width: Some(1600),
        height: Some(1500),
        ..square_cover(1600)
    };
    let first = serde_json::to_string(&evaluator.evaluate(&cover)).unwrap();
    let second = serde_json::to_string(&evaluator.evaluate(&cover)).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Cover art
// =============================================================================

#[test]
fn full_resolution_cover_is_distribution_ready() {
    let catalog = DspCatalog::builtin();
    let report = CoverArtEvaluator::new(&catalog).evaluate(&square_cover(3000));

    assert_eq!(report.quality_tier, QualityTier::DistributionReady);
    assert!(report.issues.is_empty());
    assert!(report.dsp_compliance.iter().all(|c| c.ready && c.reason.is_none()));
    assert_eq!(report.recommendation, None);
}

#[test]
fn mid_resolution_cover_ready_for_some_dsps() {
    let catalog = DspCatalog::builtin();
    let report = CoverArtEvaluator::new(&catalog).evaluate(&square_cover(1400));

    assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
    let ready: Vec<&str> = report
        .dsp_compliance
        .iter()
        .filter(|c| c.ready)
        .map(|c| c.dsp_id.as_str())
        .collect();
    assert_eq!(ready, vec!["youtube", "deezer"]);
}

#[test]
fn cmyk_cover_is_rejected() {
    let catalog = DspCatalog::builtin();
    let cover = CoverArtMeasurement {
        color_space: Some("CMYK".to_string()),
        ..square_cover(3000)
    };
    let report = CoverArtEvaluator::new(&catalog).evaluate(&cover);

    assert_eq!(report.quality_tier, QualityTier::Rejected);
    assert!(!report.is_distribution_ready);
}

#[test]
fn cover_report_json_contract() {
    let catalog = DspCatalog::builtin();
    let report = CoverArtEvaluator::new(&catalog).evaluate(&square_cover(800));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["qualityTier"], "rejected");
    assert_eq!(json["isDistributionReady"], false);
    assert_eq!(json["issues"][0]["code"], "RESOLUTION_BELOW_MINIMUM");
    assert_eq!(json["issues"][0]["severity"], "error");
    assert!(json["dspCompliance"].is_array());
    assert_eq!(json["dspCompliance"][0]["dspId"], "spotify");
}
