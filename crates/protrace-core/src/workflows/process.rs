use crate::core::io::xyz::{XyzTrajectoryReader, XyzTrajectoryWriter};
use crate::core::models::atom::INDICATOR_LABEL;
use crate::engine::calculator::compute_indicator;
use crate::engine::classify::classify;
use crate::engine::config::IndicatorConfig;
use crate::engine::error::IndicatorError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Outcome of a full trajectory pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessResult {
    /// `(frame index, indicator coordinate)` for every resolved frame, in
    /// trajectory order. Frames whose indicator was undetermined are absent.
    pub indicator_series: Vec<(usize, Point3<f64>)>,
    /// Total frames read from the source.
    pub frames_processed: usize,
    /// Frames whose indicator could not be resolved.
    pub frames_failed: usize,
}

/// Drives the whole pipeline: read a frame, classify its atoms, compute the
/// indicator, append it as a pseudo-atom, write the frame back out.
///
/// Frames are processed strictly sequentially and discarded before the next
/// one is read; the only cross-frame state is the accumulated indicator time
/// series. An undetermined indicator is a per-frame condition: the frame is
/// written unaugmented, counted in [`ProcessResult::frames_failed`], and
/// processing continues.
///
/// # Errors
///
/// Returns [`IndicatorError::Trajectory`] on malformed input or write
/// failures; these abort the run, unlike per-frame indicator failures.
#[instrument(skip_all, name = "indicator_workflow")]
pub fn run<R: BufRead, W: Write>(
    reader: &mut XyzTrajectoryReader<R>,
    writer: &mut XyzTrajectoryWriter<W>,
    config: &IndicatorConfig,
    reporter: &ProgressReporter,
) -> Result<ProcessResult, IndicatorError> {
    reporter.report(Progress::TrajectoryStart);
    info!(?config, "starting proton-indicator pass");

    let mut result = ProcessResult::default();
    while let Some(mut snapshot) = reader.read_frame()? {
        let index = result.frames_processed;
        let atoms = classify(&snapshot);

        match compute_indicator(&atoms, config) {
            Ok(indicator) => {
                debug!(frame = index, path = ?indicator.path, "indicator resolved");
                snapshot.augment(INDICATOR_LABEL, indicator.position);
                result.indicator_series.push((index, indicator.position));
                reporter.report(Progress::FrameResolved { index });
            }
            Err(IndicatorError::Undetermined) => {
                warn!(
                    frame = index,
                    "indicator undetermined; frame written without pseudo-atom"
                );
                result.frames_failed += 1;
                reporter.report(Progress::FrameUndetermined { index });
            }
            Err(other) => return Err(other),
        }

        writer.write_frame(&snapshot)?;
        result.frames_processed += 1;
    }

    reporter.report(Progress::TrajectoryFinish {
        frames: result.frames_processed,
        failed: result.frames_failed,
    });
    info!(
        frames = result.frames_processed,
        failed = result.frames_failed,
        "proton-indicator pass complete"
    );
    Ok(result)
}
