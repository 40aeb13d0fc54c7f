/// Progress events emitted by the trajectory driver.
///
/// The frame count of a lazy trajectory source is unknown up front, so the
/// driver reports per-frame events rather than a fixed-length task.
#[derive(Debug, Clone)]
pub enum Progress {
    TrajectoryStart,
    FrameResolved { index: usize },
    FrameUndetermined { index: usize },
    TrajectoryFinish { frames: usize, failed: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional observer handed into the driver; absent by default so library
/// callers pay nothing for progress they do not render.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
