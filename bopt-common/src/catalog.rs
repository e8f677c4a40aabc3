//! DSP target catalog
//!
//! Reference data for every supported streaming platform (DSP): the loudness
//! profile a master must hit and the artwork constraints a cover image must meet.
//!
//! The catalog is configuration, not logic. It is constructed once (either from
//! [`DspCatalog::builtin`] or from a versioned TOML file via [`DspCatalog::load`])
//! and passed by reference into every evaluator. Changing a tolerance or adding a
//! platform never touches evaluator code.
//!
//! # File format
//!
//! ```toml
//! [artwork_policy]
//! boptone_min_dimension = 1000
//! allowed_formats = ["jpeg", "png"]
//!
//! [[loudness]]
//! id = "spotify"
//! display_name = "Spotify"
//! target_lufs = -14.0
//! tolerance_lufs = 1.0
//! max_true_peak_dbtp = -1.0
//!
//! [[artwork]]
//! id = "spotify"
//! display_name = "Spotify"
//! min_dimension = 3000
//! require_square = true
//! require_rgb = true
//! max_file_size_bytes = 20971520
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

const MIB: u64 = 1024 * 1024;

/// Loudness profile for one DSP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DspLoudnessTarget {
    /// Stable platform identifier (e.g. "spotify")
    pub id: String,
    /// Human-readable platform name
    #[serde(alias = "display_name")]
    pub display_name: String,
    /// Integrated loudness the platform normalizes to (LUFS)
    #[serde(alias = "target_lufs")]
    pub target_lufs: f64,
    /// Allowed overshoot above the target (LU), must be >= 0
    #[serde(alias = "tolerance_lufs")]
    pub tolerance_lufs: f64,
    /// True-peak ceiling (dBTP), must be <= 0
    #[serde(alias = "max_true_peak_dbtp")]
    pub max_true_peak_dbtp: f64,
}

impl DspLoudnessTarget {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        target_lufs: f64,
        tolerance_lufs: f64,
        max_true_peak_dbtp: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            target_lufs,
            tolerance_lufs,
            max_true_peak_dbtp,
        }
    }

    /// Loudest integrated level still accepted (inclusive)
    pub fn upper_bound_lufs(&self) -> f64 {
        self.target_lufs + self.tolerance_lufs
    }
}

/// Cover image container formats understood by the artwork evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Parse a format name as reported by an image probe
    ///
    /// Case-insensitive; accepts the common `jpg` alias and MIME types.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "png" | "image/png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artwork gate for one DSP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DspArtworkRequirement {
    pub id: String,
    #[serde(alias = "display_name")]
    pub display_name: String,
    /// Minimum width and height in pixels
    #[serde(alias = "min_dimension")]
    pub min_dimension: u32,
    #[serde(alias = "require_square", default = "default_true")]
    pub require_square: bool,
    /// Reject grayscale and other non-RGB color spaces
    #[serde(alias = "require_rgb", default = "default_true")]
    pub require_rgb: bool,
    #[serde(alias = "max_file_size_bytes", default)]
    pub max_file_size_bytes: Option<u64>,
}

/// Platform-agnostic artwork rules
///
/// Failing any of these is a hard disqualifier: the image cannot be used on
/// Boptone itself, let alone distributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkPolicy {
    /// Minimum width and height accepted anywhere (pixels)
    #[serde(alias = "boptone_min_dimension")]
    pub boptone_min_dimension: u32,
    #[serde(alias = "allowed_formats")]
    pub allowed_formats: Vec<ImageFormat>,
}

impl Default for ArtworkPolicy {
    fn default() -> Self {
        Self {
            boptone_min_dimension: 1000,
            allowed_formats: vec![ImageFormat::Jpeg, ImageFormat::Png],
        }
    }
}

impl ArtworkPolicy {
    pub fn allows(&self, format: ImageFormat) -> bool {
        self.allowed_formats.contains(&format)
    }
}

fn default_true() -> bool {
    true
}

/// Authoritative table of DSP targets
///
/// One instance serves both server-side classification and previews, so the
/// two can never disagree about a platform's limits.
///
/// Deserializing from any format goes through [`DspCatalog::new`], so an
/// invalid table never reaches an evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCatalog")]
pub struct DspCatalog {
    artwork_policy: ArtworkPolicy,
    loudness: Vec<DspLoudnessTarget>,
    artwork: Vec<DspArtworkRequirement>,
}

/// Catalog tables as written, before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(alias = "artwork_policy", default)]
    artwork_policy: ArtworkPolicy,
    #[serde(default)]
    loudness: Vec<DspLoudnessTarget>,
    #[serde(default)]
    artwork: Vec<DspArtworkRequirement>,
}

impl TryFrom<RawCatalog> for DspCatalog {
    type Error = Error;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        DspCatalog::new(raw.loudness, raw.artwork, raw.artwork_policy)
    }
}

impl DspCatalog {
    /// Build a catalog from explicit tables, validating them
    pub fn new(
        loudness: Vec<DspLoudnessTarget>,
        artwork: Vec<DspArtworkRequirement>,
        artwork_policy: ArtworkPolicy,
    ) -> Result<Self> {
        let catalog = Self {
            artwork_policy,
            loudness,
            artwork,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Catalog compiled into the binary
    ///
    /// Mirrors `catalog/dsp_catalog.toml`.
    pub fn builtin() -> Self {
        let artwork = |id: &str, name: &str, min_dimension: u32, max_mib: u64| {
            DspArtworkRequirement {
                id: id.to_string(),
                display_name: name.to_string(),
                min_dimension,
                require_square: true,
                require_rgb: true,
                max_file_size_bytes: Some(max_mib * MIB),
            }
        };

        Self {
            artwork_policy: ArtworkPolicy::default(),
            loudness: vec![
                DspLoudnessTarget::new("spotify", "Spotify", -14.0, 1.0, -1.0),
                DspLoudnessTarget::new("apple_music", "Apple Music", -16.0, 1.0, -1.0),
                DspLoudnessTarget::new("youtube", "YouTube", -14.0, 2.0, -1.0),
                DspLoudnessTarget::new("amazon_music", "Amazon Music HD", -14.0, 1.5, -2.0),
                DspLoudnessTarget::new("tidal", "Tidal HiFi", -14.0, 1.0, -1.0),
                DspLoudnessTarget::new("deezer", "Deezer", -15.0, 1.5, -1.0),
            ],
            artwork: vec![
                artwork("spotify", "Spotify", 3000, 20),
                artwork("apple_music", "Apple Music", 3000, 10),
                artwork("youtube", "YouTube", 1400, 10),
                artwork("amazon_music", "Amazon Music HD", 3000, 20),
                artwork("tidal", "Tidal HiFi", 3000, 20),
                artwork("deezer", "Deezer", 1400, 10),
            ],
        }
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)?;
        Self::try_from(raw)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Rejected DSP catalog file");
            e
        })?;
        debug!(
            path = %path.display(),
            loudness_targets = catalog.loudness.len(),
            artwork_requirements = catalog.artwork.len(),
            "Loaded DSP catalog"
        );
        Ok(catalog)
    }

    /// Serialize back to the TOML file format
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(&CatalogFile::from(self))
            .map_err(|e| Error::Config(format!("Failed to serialize catalog: {}", e)))
    }

    pub fn loudness_targets(&self) -> &[DspLoudnessTarget] {
        &self.loudness
    }

    pub fn artwork_requirements(&self) -> &[DspArtworkRequirement] {
        &self.artwork
    }

    pub fn artwork_policy(&self) -> &ArtworkPolicy {
        &self.artwork_policy
    }

    pub fn loudness_target(&self, id: &str) -> Option<&DspLoudnessTarget> {
        self.loudness.iter().find(|t| t.id == id)
    }

    pub fn artwork_requirement(&self, id: &str) -> Option<&DspArtworkRequirement> {
        self.artwork.iter().find(|r| r.id == id)
    }

    /// Check every table invariant
    pub fn validate(&self) -> Result<()> {
        if self.loudness.is_empty() {
            return Err(Error::Config("Catalog has no loudness targets".to_string()));
        }
        if self.artwork.is_empty() {
            return Err(Error::Config("Catalog has no artwork requirements".to_string()));
        }

        let mut seen = HashSet::new();
        for target in &self.loudness {
            if !seen.insert(target.id.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate loudness target id '{}'",
                    target.id
                )));
            }
            if target.id.trim().is_empty() {
                return Err(Error::Config("Loudness target with empty id".to_string()));
            }
            if !target.target_lufs.is_finite()
                || !target.tolerance_lufs.is_finite()
                || !target.max_true_peak_dbtp.is_finite()
            {
                return Err(Error::Config(format!(
                    "{}: loudness values must be finite numbers",
                    target.id
                )));
            }
            if target.tolerance_lufs < 0.0 {
                return Err(Error::Config(format!(
                    "{}: tolerance_lufs {} must be >= 0",
                    target.id, target.tolerance_lufs
                )));
            }
            if target.max_true_peak_dbtp > 0.0 {
                return Err(Error::Config(format!(
                    "{}: max_true_peak_dbtp {} must be <= 0",
                    target.id, target.max_true_peak_dbtp
                )));
            }
        }

        let mut seen = HashSet::new();
        for req in &self.artwork {
            if !seen.insert(req.id.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate artwork requirement id '{}'",
                    req.id
                )));
            }
            if req.id.trim().is_empty() {
                return Err(Error::Config("Artwork requirement with empty id".to_string()));
            }
            if req.min_dimension == 0 {
                return Err(Error::Config(format!(
                    "{}: min_dimension must be positive",
                    req.id
                )));
            }
            if req.max_file_size_bytes == Some(0) {
                return Err(Error::Config(format!(
                    "{}: max_file_size_bytes must be positive",
                    req.id
                )));
            }
            if req.min_dimension < self.artwork_policy.boptone_min_dimension {
                // Harmless, but the DSP gate can then never be the deciding check
                debug!(
                    dsp = %req.id,
                    min_dimension = req.min_dimension,
                    floor = self.artwork_policy.boptone_min_dimension,
                    "DSP artwork minimum is below the Boptone floor"
                );
            }
        }

        if self.artwork_policy.boptone_min_dimension == 0 {
            return Err(Error::Config(
                "artwork_policy.boptone_min_dimension must be positive".to_string(),
            ));
        }
        if self.artwork_policy.allowed_formats.is_empty() {
            return Err(Error::Config(
                "artwork_policy.allowed_formats must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DspCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// On-disk shape with snake_case keys, used when writing catalogs back out
#[derive(Serialize)]
struct CatalogFile<'a> {
    artwork_policy: PolicyFile<'a>,
    loudness: Vec<LoudnessFile<'a>>,
    artwork: Vec<ArtworkFile<'a>>,
}

#[derive(Serialize)]
struct PolicyFile<'a> {
    boptone_min_dimension: u32,
    allowed_formats: &'a [ImageFormat],
}

#[derive(Serialize)]
struct LoudnessFile<'a> {
    id: &'a str,
    display_name: &'a str,
    target_lufs: f64,
    tolerance_lufs: f64,
    max_true_peak_dbtp: f64,
}

#[derive(Serialize)]
struct ArtworkFile<'a> {
    id: &'a str,
    display_name: &'a str,
    min_dimension: u32,
    require_square: bool,
    require_rgb: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_file_size_bytes: Option<u64>,
}

impl<'a> From<&'a DspCatalog> for CatalogFile<'a> {
    fn from(catalog: &'a DspCatalog) -> Self {
        Self {
            artwork_policy: PolicyFile {
                boptone_min_dimension: catalog.artwork_policy.boptone_min_dimension,
                allowed_formats: &catalog.artwork_policy.allowed_formats,
            },
            loudness: catalog
                .loudness
                .iter()
                .map(|t| LoudnessFile {
                    id: &t.id,
                    display_name: &t.display_name,
                    target_lufs: t.target_lufs,
                    tolerance_lufs: t.tolerance_lufs,
                    max_true_peak_dbtp: t.max_true_peak_dbtp,
                })
                .collect(),
            artwork: catalog
                .artwork
                .iter()
                .map(|r| ArtworkFile {
                    id: &r.id,
                    display_name: &r.display_name,
                    min_dimension: r.min_dimension,
                    require_square: r.require_square,
                    require_rgb: r.require_rgb,
                    max_file_size_bytes: r.max_file_size_bytes,
                })
                .collect(),
        }
    }
}
