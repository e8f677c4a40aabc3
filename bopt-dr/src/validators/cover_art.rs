//! Cover art compliance evaluator
//!
//! Checks a cover image's technical facts against the platform-agnostic
//! artwork policy and each DSP's artwork gate.
//!
//! # Hard disqualifiers (tier `rejected`)
//! - Format outside the whitelist (JPEG, PNG by default)
//! - CMYK color space
//! - Shorter side below the Boptone floor, or dimensions undetermined
//!
//! # Per-DSP gates (tier `boptone_only` when any fail)
//! - Minimum dimension, square aspect, RGB color space, file size ceiling
//!
//! An alpha channel is only a warning; flattening is recommended.
//! Each DSP verdict carries the first failing dimension as its `reason`.

use crate::types::{
    CoverArtMeasurement, CoverArtReport, DspArtworkCompliance, Issue, QualityTier, Severity,
};
use bopt_common::{ArtworkPolicy, DspArtworkRequirement, DspCatalog, ImageFormat};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

const MIB: f64 = 1024.0 * 1024.0;

/// Color space as reported by an image probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Cmyk,
    Grayscale,
    Other(String),
}

impl ColorSpace {
    /// Case-insensitive; RGB-family profiles (sRGB, Adobe RGB, Display P3) all map to `Rgb`
    pub fn parse(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "rgb" | "srgb" | "rgba" | "adobergb" | "displayp3" | "p3" => ColorSpace::Rgb,
            "cmyk" => ColorSpace::Cmyk,
            "gray" | "grey" | "grayscale" | "greyscale" | "l" | "luminance" => {
                ColorSpace::Grayscale
            }
            _ => ColorSpace::Other(s.trim().to_string()),
        }
    }

    fn label(&self) -> String {
        match self {
            ColorSpace::Rgb => "RGB".to_string(),
            ColorSpace::Cmyk => "CMYK".to_string(),
            ColorSpace::Grayscale => "grayscale".to_string(),
            ColorSpace::Other(raw) => raw.clone(),
        }
    }
}

/// One failed artwork check
#[derive(Debug, Clone, PartialEq)]
enum Gate {
    FormatUnknown,
    FormatNotAllowed(String),
    Cmyk,
    NonRgb(String),
    DimensionsUnknown,
    BelowMinimum { width: u32, height: u32, min: u32 },
    NotSquare { width: u32, height: u32 },
    TooLarge { size: u64, max: u64 },
}

impl Gate {
    fn reason(&self) -> String {
        match self {
            Gate::FormatUnknown => "format could not be determined".to_string(),
            Gate::FormatNotAllowed(raw) => format!("format '{}' is not accepted", raw),
            Gate::Cmyk => "CMYK color space is not accepted".to_string(),
            Gate::NonRgb(label) => format!("{} color space; RGB required", label),
            Gate::DimensionsUnknown => "dimensions could not be determined".to_string(),
            Gate::BelowMinimum { width, height, min } => format!(
                "resolution {}x{} is below the {}x{} minimum",
                width, height, min, min
            ),
            Gate::NotSquare { width, height } => {
                format!("artwork must be square ({}x{})", width, height)
            }
            Gate::TooLarge { size, max } => format!(
                "file size {:.1} MB exceeds the {:.1} MB limit",
                *size as f64 / MIB,
                *max as f64 / MIB
            ),
        }
    }
}

/// Format as reported, with its whitelist verdict
#[derive(Debug, Clone, Copy)]
struct FormatProbe<'m> {
    raw: &'m str,
    parsed: Option<ImageFormat>,
    allowed: bool,
}

/// Parsed view of a measurement shared by every DSP check
struct Probe<'m> {
    format: Option<FormatProbe<'m>>,
    color_space: Option<ColorSpace>,
    dimensions: Option<(u32, u32)>,
    file_size: Option<u64>,
}

impl<'m> Probe<'m> {
    fn new(m: &'m CoverArtMeasurement, policy: &ArtworkPolicy) -> Self {
        Self {
            format: m.format.as_deref().map(|raw| {
                let parsed = ImageFormat::parse(raw);
                FormatProbe {
                    raw,
                    parsed,
                    allowed: parsed.map(|f| policy.allows(f)).unwrap_or(false),
                }
            }),
            color_space: m.color_space.as_deref().map(ColorSpace::parse),
            dimensions: m.width.zip(m.height),
            file_size: m.file_size_bytes,
        }
    }
}

/// Cover art compliance evaluator
pub struct CoverArtEvaluator<'a> {
    catalog: &'a DspCatalog,
}

impl<'a> CoverArtEvaluator<'a> {
    pub fn new(catalog: &'a DspCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluate one cover image
    ///
    /// Never fails: undetermined fields degrade the result with an explanatory issue.
    pub fn evaluate(&self, measurement: &CoverArtMeasurement) -> CoverArtReport {
        let policy = self.catalog.artwork_policy();
        let probe = Probe::new(measurement, policy);

        let mut issues = Vec::new();
        let mut warnings = Vec::new();
        let mut recommendations: Vec<String> = Vec::new();

        // Hard disqualifiers
        let allowed_list = policy
            .allowed_formats
            .iter()
            .map(|f| f.as_str().to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" or ");

        if let Some(format) = probe.format.filter(|f| !f.allowed) {
            issues.push(Issue::new(
                "FORMAT_NOT_ALLOWED",
                Severity::Error,
                format!(
                    "Image format '{}' is not allowed; use {}",
                    format.raw, allowed_list
                ),
            ));
            recommendations.push(format!("Convert the artwork to {}", allowed_list));
        }

        if probe.color_space == Some(ColorSpace::Cmyk) {
            issues.push(Issue::new(
                "CMYK_COLOR_SPACE",
                Severity::Error,
                "CMYK artwork is not supported; streaming platforms require RGB",
            ));
            recommendations.push("Convert the artwork to the RGB color space".to_string());
        }

        let largest_dsp_min = self
            .catalog
            .artwork_requirements()
            .iter()
            .map(|r| r.min_dimension)
            .max()
            .unwrap_or(policy.boptone_min_dimension);

        match probe.dimensions {
            Some((width, height)) if width.min(height) < policy.boptone_min_dimension => {
                issues.push(Issue::new(
                    "RESOLUTION_BELOW_MINIMUM",
                    Severity::Error,
                    format!(
                        "Artwork is {}x{}; the minimum is {}x{} pixels",
                        width,
                        height,
                        policy.boptone_min_dimension,
                        policy.boptone_min_dimension
                    ),
                ));
                recommendations.push(format!(
                    "Upload artwork of at least {}x{} pixels ({}x{} for full distribution)",
                    policy.boptone_min_dimension,
                    policy.boptone_min_dimension,
                    largest_dsp_min,
                    largest_dsp_min
                ));
            }
            Some(_) => {}
            None => {
                issues.push(Issue::new(
                    "DIMENSIONS_UNKNOWN",
                    Severity::Error,
                    "Artwork dimensions could not be determined",
                ));
                recommendations
                    .push("Re-upload the artwork so its dimensions can be read".to_string());
            }
        }

        // Per-DSP gates
        let per_dsp: Vec<(&DspArtworkRequirement, Vec<Gate>)> = self
            .catalog
            .artwork_requirements()
            .iter()
            .map(|req| (req, check_dsp(req, &probe)))
            .collect();

        let failing = |pred: fn(&Gate) -> bool| -> Vec<&DspArtworkRequirement> {
            per_dsp
                .iter()
                .filter(|(_, gates)| gates.iter().any(pred))
                .map(|(req, _)| *req)
                .collect()
        };

        let format_unknown = failing(|g| matches!(g, Gate::FormatUnknown));
        if !format_unknown.is_empty() {
            warnings.push(
                Issue::new(
                    "FORMAT_UNKNOWN",
                    Severity::Warning,
                    "Image format could not be determined",
                )
                .with_dsps(ids(&format_unknown)),
            );
            recommendations.push(format!("Re-upload the artwork as a {} file", allowed_list));
        }

        // Only reported once the image clears the Boptone floor
        if !issues.iter().any(|i| i.code == "RESOLUTION_BELOW_MINIMUM") {
            let below = failing(|g| matches!(g, Gate::BelowMinimum { .. }));
            if let (false, Some((width, height))) = (below.is_empty(), probe.dimensions) {
                // Grouped by each platform's own minimum, smallest first
                let mut by_min: BTreeMap<u32, Vec<&DspArtworkRequirement>> = BTreeMap::new();
                for req in &below {
                    by_min.entry(req.min_dimension).or_default().push(*req);
                }
                let requirements = by_min
                    .iter()
                    .map(|(min, reqs)| {
                        format!("{} require at least {}x{}", names(reqs), min, min)
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                warnings.push(
                    Issue::new(
                        "RESOLUTION_BELOW_DISTRIBUTION",
                        Severity::Warning,
                        format!("Artwork is {}x{}; {} pixels", width, height, requirements),
                    )
                    .with_dsps(ids(&below)),
                );
                recommendations.push(format!(
                    "Upload artwork of at least {}x{} pixels for full distribution",
                    largest_dsp_min, largest_dsp_min
                ));
            }
        }

        let not_square = failing(|g| matches!(g, Gate::NotSquare { .. }));
        if let (false, Some((width, height))) = (not_square.is_empty(), probe.dimensions) {
            warnings.push(
                Issue::new(
                    "NOT_SQUARE",
                    Severity::Warning,
                    format!("Artwork is {}x{}; a 1:1 aspect ratio is required", width, height),
                )
                .with_dsps(ids(&not_square)),
            );
            recommendations.push("Crop the artwork to a square aspect ratio".to_string());
        }

        let non_rgb = failing(|g| matches!(g, Gate::NonRgb(_)));
        if let (false, Some(space)) = (non_rgb.is_empty(), &probe.color_space) {
            warnings.push(
                Issue::new(
                    "NON_RGB_COLOR_SPACE",
                    Severity::Warning,
                    format!("Artwork uses the {} color space; RGB is required", space.label()),
                )
                .with_dsps(ids(&non_rgb)),
            );
            recommendations.push("Convert the artwork to the RGB color space".to_string());
        }

        let too_large = failing(|g| matches!(g, Gate::TooLarge { .. }));
        if let (false, Some(size)) = (too_large.is_empty(), probe.file_size) {
            let smallest_limit = per_dsp
                .iter()
                .filter_map(|(req, _)| req.max_file_size_bytes)
                .filter(|max| size > *max)
                .min()
                .unwrap_or(size);
            warnings.push(
                Issue::new(
                    "FILE_TOO_LARGE",
                    Severity::Warning,
                    format!(
                        "Artwork file is {:.1} MB, above the limit for {}",
                        size as f64 / MIB,
                        names(&too_large)
                    ),
                )
                .with_dsps(ids(&too_large)),
            );
            recommendations.push(format!(
                "Reduce the file size below {:.1} MB",
                smallest_limit as f64 / MIB
            ));
        }

        if measurement.has_alpha_channel == Some(true) {
            warnings.push(Issue::new(
                "ALPHA_CHANNEL",
                Severity::Warning,
                "Artwork has an alpha channel; transparency may render inconsistently",
            ));
            recommendations.push("Flatten the image to remove the alpha channel".to_string());
        }

        if probe.color_space.is_none() {
            warnings.push(Issue::new(
                "COLOR_SPACE_UNKNOWN",
                Severity::Info,
                "Color space could not be determined; RGB is assumed",
            ));
        }

        let dsp_compliance: Vec<DspArtworkCompliance> = per_dsp
            .iter()
            .map(|(req, gates)| DspArtworkCompliance {
                dsp_id: req.id.clone(),
                name: req.display_name.clone(),
                ready: gates.is_empty(),
                reason: gates.first().map(Gate::reason),
            })
            .collect();

        let quality_tier = if issues.iter().any(|i| i.severity == Severity::Error) {
            QualityTier::Rejected
        } else if !dsp_compliance.is_empty() && dsp_compliance.iter().all(|c| c.ready) {
            QualityTier::DistributionReady
        } else {
            QualityTier::BoptoneOnly
        };

        let ready_count = dsp_compliance.iter().filter(|c| c.ready).count();
        debug!(
            tier = %quality_tier,
            ready = ready_count,
            total = dsp_compliance.len(),
            issues = issues.len(),
            warnings = warnings.len(),
            "Cover art evaluation complete"
        );

        let mut seen = HashSet::new();
        recommendations.retain(|r| seen.insert(r.clone()));
        let recommendation = if recommendations.is_empty() {
            None
        } else {
            Some(recommendations.join("; "))
        };

        CoverArtReport {
            quality_tier,
            is_distribution_ready: quality_tier.is_distribution_ready(),
            width: measurement.width,
            height: measurement.height,
            format: probe.format.map(|f| match f.parsed {
                Some(parsed) => parsed.as_str().to_string(),
                None => f.raw.to_string(),
            }),
            color_space: measurement.color_space.clone(),
            file_size_bytes: measurement.file_size_bytes,
            has_alpha_channel: measurement.has_alpha_channel,
            issues,
            warnings,
            dsp_compliance,
            recommendation,
        }
    }
}

fn names(reqs: &[&DspArtworkRequirement]) -> String {
    reqs.iter()
        .map(|r| r.display_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn ids(reqs: &[&DspArtworkRequirement]) -> Vec<String> {
    reqs.iter().map(|r| r.id.clone()).collect()
}

/// Every gate `req` fails, in reporting order
fn check_dsp(req: &DspArtworkRequirement, probe: &Probe<'_>) -> Vec<Gate> {
    let mut gates = Vec::new();

    match probe.format {
        None => gates.push(Gate::FormatUnknown),
        Some(format) if !format.allowed => {
            gates.push(Gate::FormatNotAllowed(format.raw.to_string()))
        }
        Some(_) => {}
    }

    match &probe.color_space {
        Some(ColorSpace::Cmyk) => gates.push(Gate::Cmyk),
        Some(space @ (ColorSpace::Grayscale | ColorSpace::Other(_))) if req.require_rgb => {
            gates.push(Gate::NonRgb(space.label()))
        }
        _ => {}
    }

    match probe.dimensions {
        None => gates.push(Gate::DimensionsUnknown),
        Some((width, height)) => {
            if width.min(height) < req.min_dimension {
                gates.push(Gate::BelowMinimum {
                    width,
                    height,
                    min: req.min_dimension,
                });
            }
            if req.require_square && width != height {
                gates.push(Gate::NotSquare { width, height });
            }
        }
    }

    if let (Some(size), Some(max)) = (probe.file_size, req.max_file_size_bytes) {
        if size > max {
            gates.push(Gate::TooLarge { size, max });
        }
    }

    gates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect() -> CoverArtMeasurement {
        CoverArtMeasurement {
            width: Some(3000),
            height: Some(3000),
            format: Some("jpeg".to_string()),
            color_space: Some("sRGB".to_string()),
            file_size_bytes: Some(4 * 1024 * 1024),
            has_alpha_channel: Some(false),
        }
    }

    fn evaluate(m: &CoverArtMeasurement) -> CoverArtReport {
        let catalog = DspCatalog::builtin();
        CoverArtEvaluator::new(&catalog).evaluate(m)
    }

    #[test]
    fn test_color_space_parse() {
        assert_eq!(ColorSpace::parse("sRGB"), ColorSpace::Rgb);
        assert_eq!(ColorSpace::parse("Adobe RGB"), ColorSpace::Rgb);
        assert_eq!(ColorSpace::parse("Display-P3"), ColorSpace::Rgb);
        assert_eq!(ColorSpace::parse("CMYK"), ColorSpace::Cmyk);
        assert_eq!(ColorSpace::parse("Greyscale"), ColorSpace::Grayscale);
        assert_eq!(ColorSpace::parse(" lab "), ColorSpace::Other("lab".to_string()));
    }

    #[test]
    fn test_perfect_artwork_is_distribution_ready() {
        let report = evaluate(&perfect());
        assert_eq!(report.quality_tier, QualityTier::DistributionReady);
        assert!(report.is_distribution_ready);
        assert!(report.issues.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.recommendation.is_none());
        assert!(report.dsp_compliance.iter().all(|c| c.ready && c.reason.is_none()));
    }

    #[test]
    fn test_jpg_alias_normalized() {
        let mut m = perfect();
        m.format = Some("JPG".to_string());
        let report = evaluate(&m);
        assert_eq!(report.format.as_deref(), Some("jpeg"));
        assert_eq!(report.quality_tier, QualityTier::DistributionReady);
    }

    #[test]
    fn test_disallowed_format_rejected() {
        let mut m = perfect();
        m.format = Some("webp".to_string());
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::Rejected);
        assert_eq!(report.issues[0].code, "FORMAT_NOT_ALLOWED");
        assert_eq!(report.format.as_deref(), Some("webp"));
        assert_eq!(
            report.dsp_compliance[0].reason.as_deref(),
            Some("format 'webp' is not accepted")
        );
        assert!(report.recommendation.unwrap().contains("JPEG or PNG"));
    }

    #[test]
    fn test_cmyk_rejected() {
        let mut m = perfect();
        m.color_space = Some("cmyk".to_string());
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::Rejected);
        assert!(report.issues.iter().any(|i| i.code == "CMYK_COLOR_SPACE"));
        assert!(report.dsp_compliance.iter().all(|c| !c.ready));
    }

    #[test]
    fn test_below_boptone_floor_rejected() {
        let mut m = perfect();
        m.width = Some(999);
        m.height = Some(999);
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::Rejected);
        assert_eq!(report.issues[0].code, "RESOLUTION_BELOW_MINIMUM");
        // Floor failure is not repeated as a distribution warning
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.code == "RESOLUTION_BELOW_DISTRIBUTION"));
    }

    #[test]
    fn test_floor_is_inclusive() {
        let mut m = perfect();
        m.width = Some(1000);
        m.height = Some(1000);
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
    }

    #[test]
    fn test_mid_resolution_is_boptone_only() {
        let mut m = perfect();
        m.width = Some(2000);
        m.height = Some(2000);
        let report = evaluate(&m);

        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
        let warning = report
            .warnings
            .iter()
            .find(|w| w.code == "RESOLUTION_BELOW_DISTRIBUTION")
            .unwrap();
        let affected = warning.affected_dsps.as_ref().unwrap();
        assert_eq!(affected, &vec!["spotify", "apple_music", "amazon_music", "tidal"]);

        let youtube = report.dsp_compliance.iter().find(|c| c.dsp_id == "youtube").unwrap();
        assert!(youtube.ready);
        let spotify = report.dsp_compliance.iter().find(|c| c.dsp_id == "spotify").unwrap();
        assert!(!spotify.ready);
        assert_eq!(
            spotify.reason.as_deref(),
            Some("resolution 2000x2000 is below the 3000x3000 minimum")
        );
        assert!(report.recommendation.unwrap().contains("3000x3000"));
    }

    #[test]
    fn test_resolution_warning_names_each_platform_minimum() {
        let mut m = perfect();
        m.format = Some("png".to_string());
        m.width = Some(1200);
        m.height = Some(1200);
        let report = evaluate(&m);

        let warning = report
            .warnings
            .iter()
            .find(|w| w.code == "RESOLUTION_BELOW_DISTRIBUTION")
            .unwrap();
        assert_eq!(
            warning.message,
            "Artwork is 1200x1200; YouTube, Deezer require at least 1400x1400; \
             Spotify, Apple Music, Amazon Music HD, Tidal HiFi require at least 3000x3000 pixels"
        );
        assert_eq!(warning.affected_dsps.as_ref().unwrap().len(), 6);

        let youtube = report.dsp_compliance.iter().find(|c| c.dsp_id == "youtube").unwrap();
        assert_eq!(
            youtube.reason.as_deref(),
            Some("resolution 1200x1200 is below the 1400x1400 minimum")
        );
    }

    #[test]
    fn test_affected_dsps_join_compliance_ids() {
        let mut m = perfect();
        m.width = Some(2000);
        m.height = Some(1800);
        let report = evaluate(&m);

        let compliance_ids: Vec<&str> =
            report.dsp_compliance.iter().map(|c| c.dsp_id.as_str()).collect();
        for warning in &report.warnings {
            for id in warning.affected_dsps.iter().flatten() {
                assert!(compliance_ids.contains(&id.as_str()), "unknown dsp id {}", id);
            }
        }
    }

    #[test]
    fn test_not_square_fails_every_dsp() {
        let mut m = perfect();
        m.width = Some(3200);
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
        assert!(report.dsp_compliance.iter().all(|c| !c.ready));
        let warning = report.warnings.iter().find(|w| w.code == "NOT_SQUARE").unwrap();
        assert_eq!(warning.affected_dsps.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn test_file_size_limits_per_dsp() {
        let mut m = perfect();
        m.file_size_bytes = Some(15 * 1024 * 1024);
        let report = evaluate(&m);

        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
        let warning = report.warnings.iter().find(|w| w.code == "FILE_TOO_LARGE").unwrap();
        let affected = warning.affected_dsps.as_ref().unwrap();
        assert_eq!(affected, &vec!["apple_music", "youtube", "deezer"]);
        assert!(warning.message.contains("Apple Music, YouTube, Deezer"));
        assert!(report
            .recommendation
            .unwrap()
            .contains("Reduce the file size below 10.0 MB"));
        let apple = report.dsp_compliance.iter().find(|c| c.dsp_id == "apple_music").unwrap();
        assert_eq!(
            apple.reason.as_deref(),
            Some("file size 15.0 MB exceeds the 10.0 MB limit")
        );
    }

    #[test]
    fn test_alpha_channel_is_warning_only() {
        let mut m = perfect();
        m.format = Some("png".to_string());
        m.has_alpha_channel = Some(true);
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::DistributionReady);
        assert_eq!(report.warnings[0].code, "ALPHA_CHANNEL");
        assert_eq!(report.warnings[0].severity, Severity::Warning);
        assert!(report.recommendation.unwrap().contains("Flatten"));
    }

    #[test]
    fn test_grayscale_fails_rgb_dsps() {
        let mut m = perfect();
        m.color_space = Some("gray".to_string());
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
        assert!(report.warnings.iter().any(|w| w.code == "NON_RGB_COLOR_SPACE"));
        assert_eq!(
            report.dsp_compliance[0].reason.as_deref(),
            Some("grayscale color space; RGB required")
        );
    }

    #[test]
    fn test_all_undetermined_is_rejected_without_panicking() {
        let report = evaluate(&CoverArtMeasurement::default());
        assert_eq!(report.quality_tier, QualityTier::Rejected);
        assert!(report.issues.iter().any(|i| i.code == "DIMENSIONS_UNKNOWN"));
        assert!(report.warnings.iter().any(|w| w.code == "FORMAT_UNKNOWN"));
        assert!(report.warnings.iter().any(|w| w.code == "COLOR_SPACE_UNKNOWN"));
        assert_eq!(
            report.dsp_compliance[0].reason.as_deref(),
            Some("format could not be determined")
        );
    }

    #[test]
    fn test_unknown_format_blocks_distribution_only() {
        let mut m = perfect();
        m.format = None;
        let report = evaluate(&m);
        assert_eq!(report.quality_tier, QualityTier::BoptoneOnly);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_first_failing_gate_is_reason() {
        let mut m = perfect();
        m.width = Some(1500);
        m.height = Some(1400);
        let report = evaluate(&m);
        let youtube = report.dsp_compliance.iter().find(|c| c.dsp_id == "youtube").unwrap();
        assert_eq!(youtube.reason.as_deref(), Some("artwork must be square (1500x1400)"));
    }
}
