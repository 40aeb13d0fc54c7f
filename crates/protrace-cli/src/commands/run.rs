use crate::cli::RunArgs;
use crate::config::resolve_config;
use crate::error::Result;
use crate::plot;
use crate::utils::progress::CliProgressHandler;
use protrace::core::io::xyz::{XyzTrajectoryReader, XyzTrajectoryWriter};
use protrace::engine::progress::ProgressReporter;
use protrace::workflows::process;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{info, warn};

const OUTPUT_SUFFIX: &str = "_with_proton_indicator";

/// Derives the input/output/plot paths from the trajectory base name.
fn derive_paths(name: &PathBuf, graph: bool) -> (PathBuf, PathBuf, Option<PathBuf>) {
    let base = name.display().to_string();
    let input = PathBuf::from(format!("{}.xyz", base));
    let output = PathBuf::from(format!("{}{}.xyz", base, OUTPUT_SUFFIX));
    let plot = graph.then(|| PathBuf::from(format!("{}_proton_indicator.svg", base)));
    (input, output, plot)
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let (input_path, output_path, plot_path) = derive_paths(&args.name, args.graph);

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        "processing trajectory"
    );

    let mut reader = XyzTrajectoryReader::new(BufReader::new(File::open(&input_path)?));
    let mut writer = XyzTrajectoryWriter::new(BufWriter::new(File::create(&output_path)?));

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let result = process::run(&mut reader, &mut writer, &config, &reporter)?;
    writer.into_inner().map_err(protrace::engine::error::IndicatorError::from)?;

    println!(
        "Processed {} frame(s); indicator resolved for {}.",
        result.frames_processed,
        result.indicator_series.len()
    );
    if result.frames_failed > 0 {
        warn!(
            failed = result.frames_failed,
            "some frames had no resolvable indicator"
        );
        println!(
            "⚠ {} frame(s) written without an indicator.",
            result.frames_failed
        );
    }

    if let Some(path) = plot_path {
        plot::render_indicator_distance(&path, &result.indicator_series)?;
        info!(plot = %path.display(), "diagnostic plot written");
        println!("Diagnostic plot written to {}.", path.display());
    }

    Ok(())
}
