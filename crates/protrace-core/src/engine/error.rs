use thiserror::Error;

use crate::core::io::xyz::XyzError;

#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The frame has no donor heavy atom and no dissociated hydrogen, so no
    /// indicator position can be assigned.
    #[error("indicator undetermined: no donor heavy atom and no dissociated hydrogen in frame")]
    Undetermined,

    #[error("Trajectory I/O failed: {0}")]
    Trajectory(#[from] XyzError),
}
