use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "protrace - post-processes molecular trajectories of hydrogen-bonded clusters, appending a proton-indicator pseudo-atom that tracks the excess proton's charge location.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the proton indicator for every frame of an XYZ trajectory.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Trajectory base name: reads `<name>.xyz` and writes
    /// `<name>_with_proton_indicator.xyz`.
    #[arg(required = true, value_name = "NAME")]
    pub name: PathBuf,

    /// Render an SVG diagnostic plot of indicator distance over time
    /// next to the output trajectory.
    #[arg(short, long)]
    pub graph: bool,

    /// Path to a threshold configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Threshold Overrides ---
    /// Override the squared O-H bonding cutoff (squared Angstroms).
    #[arg(long, value_name = "FLOAT")]
    pub oh_cutoff_sq: Option<f64>,

    /// Override the squared N-H bonding cutoff (squared Angstroms).
    #[arg(long, value_name = "FLOAT")]
    pub nh_cutoff_sq: Option<f64>,

    /// Override the squared acceptor search radius (squared Angstroms).
    #[arg(long, value_name = "FLOAT")]
    pub acceptor_radius_sq: Option<f64>,
}
