//! bopt-dr (Distribution Readiness) - command-line evaluator
//!
//! Reads decoded measurements as JSON files, evaluates them against the
//! effective DSP catalog, and prints the resulting report as JSON on stdout.
//! Logs go to stderr.

use anyhow::{Context, Result};
use bopt_common::config::{load_bootstrap_config, load_catalog, resolve_catalog_source};
use bopt_dr::input::{finite_reading, read_json, read_optional_json, to_pretty_json};
use bopt_dr::validators::{evaluate_dsp, lufs_to_percent, LoudnessVerdict};
use bopt_dr::{
    distribute, AudioQualityClassifier, CoverArtEvaluator, CoverArtMeasurement,
    LoudnessMeasurement, TechnicalAudioProfile, WriterSplit,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bopt-dr", version, about = "Boptone distribution readiness checks")]
struct Cli {
    /// DSP catalog TOML file (overrides BOPT_DSP_CATALOG and the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Bootstrap config file (default: <config dir>/boptone/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective DSP catalog
    Catalog,

    /// Check one loudness/true-peak pair against every DSP
    Loudness {
        /// Integrated loudness (LUFS)
        #[arg(long, allow_negative_numbers = true)]
        lufs: f64,
        /// True peak (dBTP)
        #[arg(long, allow_negative_numbers = true)]
        true_peak: f64,
    },

    /// Classify an audio asset
    Audio {
        /// TechnicalAudioProfile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,
        /// LoudnessMeasurement JSON file
        #[arg(long)]
        loudness: Option<PathBuf>,
    },

    /// Evaluate cover art
    Artwork {
        /// CoverArtMeasurement JSON file
        #[arg(long)]
        measurement: PathBuf,
    },

    /// Fan revenue out across writer splits
    Splits {
        /// Total revenue in cents
        #[arg(long)]
        revenue_cents: u64,
        /// JSON array of WriterSplit
        #[arg(long)]
        splits: PathBuf,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoudnessCheck {
    integrated_lufs: f64,
    true_peak_dbtp: f64,
    gauge_percent: f64,
    dsps: Vec<DspLoudnessCheck>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DspLoudnessCheck {
    dsp_id: String,
    ready: bool,
    verdict: LoudnessVerdict,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_bootstrap_config(cli.config.as_deref())
        .context("Failed to load bootstrap config")?;

    // RUST_LOG wins over the config file level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Boptone Distribution Readiness (bopt-dr) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let source = resolve_catalog_source(cli.catalog.as_deref(), &config);
    let catalog = load_catalog(&source).context("Failed to load DSP catalog")?;

    let output = match cli.command {
        Command::Catalog => to_pretty_json(&catalog)?,

        Command::Loudness { lufs, true_peak } => {
            let lufs = finite_reading("--lufs", lufs)?;
            let true_peak = finite_reading("--true-peak", true_peak)?;
            let dsps = catalog
                .loudness_targets()
                .iter()
                .map(|target| {
                    let verdict = evaluate_dsp(lufs, true_peak, target);
                    DspLoudnessCheck {
                        dsp_id: target.id.clone(),
                        ready: verdict.is_ready(),
                        verdict,
                    }
                })
                .collect();
            to_pretty_json(&LoudnessCheck {
                integrated_lufs: lufs,
                true_peak_dbtp: true_peak,
                gauge_percent: lufs_to_percent(lufs),
                dsps,
            })?
        }

        Command::Audio { profile, loudness } => {
            let profile: Option<TechnicalAudioProfile> = read_optional_json(profile.as_deref())
                .context("Failed to read technical profile")?;
            let loudness: Option<LoudnessMeasurement> = read_optional_json(loudness.as_deref())
                .context("Failed to read loudness measurement")?;
            let report =
                AudioQualityClassifier::new(&catalog).classify(profile.as_ref(), loudness.as_ref());
            info!(tier = %report.quality_tier, "Audio classified");
            to_pretty_json(&report)?
        }

        Command::Artwork { measurement } => {
            let measurement: CoverArtMeasurement = read_json(&measurement)
                .with_context(|| format!("Failed to read {}", measurement.display()))?;
            let report = CoverArtEvaluator::new(&catalog).evaluate(&measurement);
            info!(tier = %report.quality_tier, "Artwork evaluated");
            to_pretty_json(&report)?
        }

        Command::Splits {
            revenue_cents,
            splits,
        } => {
            let splits: Vec<WriterSplit> = read_json(&splits)
                .with_context(|| format!("Failed to read {}", splits.display()))?;
            let payout = distribute(revenue_cents, &splits).context("Invalid writer splits")?;
            to_pretty_json(&payout)?
        }
    };

    println!("{}", output);
    Ok(())
}
