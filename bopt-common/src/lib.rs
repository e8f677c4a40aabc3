//! # Boptone Common Library
//!
//! Shared code for the Boptone distribution-readiness tools including:
//! - DSP target catalog (loudness targets and artwork requirements)
//! - Catalog loading from versioned TOML files
//! - Bootstrap configuration resolution
//! - Common error types

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{
    ArtworkPolicy, DspArtworkRequirement, DspCatalog, DspLoudnessTarget, ImageFormat,
};
pub use error::{Error, Result};
