use indicatif::{ProgressBar, ProgressStyle};
use protrace::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders driver progress as an indicatif spinner with a live frame count.
/// The trajectory length is unknown up front, so a spinner is used instead of
/// a bounded bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner().with_style(Self::spinner_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::TrajectoryStart => {
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message("Processing trajectory...");
                }
                Progress::FrameResolved { index } | Progress::FrameUndetermined { index } => {
                    pb_guard.set_message(format!("Frame {}", index + 1));
                    pb_guard.inc(1);
                }
                Progress::TrajectoryFinish { frames, failed } => {
                    pb_guard.disable_steady_tick();
                    if failed == 0 {
                        pb_guard.finish_with_message(format!("✓ {} frames processed", frames));
                    } else {
                        pb_guard.finish_with_message(format!(
                            "✓ {} frames processed ({} without indicator)",
                            frames, failed
                        ));
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
