use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use protrace::engine::config::IndicatorConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Threshold settings as they appear in a TOML configuration file. Every key
/// is optional; anything absent falls back to the calibrated defaults.
///
/// ```toml
/// oh-cutoff-sq = 1.1025
/// nh-cutoff-sq = 1.3225
/// acceptor-radius-sq = 16.0
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "oh-cutoff-sq")]
    pub oh_cutoff_sq: Option<f64>,
    #[serde(rename = "nh-cutoff-sq")]
    pub nh_cutoff_sq: Option<f64>,
    #[serde(rename = "acceptor-radius-sq")]
    pub acceptor_radius_sq: Option<f64>,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    debug!(path = %path.display(), "loading threshold configuration file");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Resolves the effective thresholds: defaults, then the configuration file,
/// then explicit command-line overrides, later layers winning.
pub fn resolve_config(args: &RunArgs) -> Result<IndicatorConfig> {
    let file = match &args.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };

    let config = IndicatorConfig::builder()
        .maybe_oh_cutoff_sq(file.oh_cutoff_sq)
        .maybe_nh_cutoff_sq(file.nh_cutoff_sq)
        .maybe_acceptor_radius_sq(file.acceptor_radius_sq)
        .maybe_oh_cutoff_sq(args.oh_cutoff_sq)
        .maybe_nh_cutoff_sq(args.nh_cutoff_sq)
        .maybe_acceptor_radius_sq(args.acceptor_radius_sq)
        .build()?;

    debug!(?config, "resolved indicator thresholds");
    Ok(config)
}
