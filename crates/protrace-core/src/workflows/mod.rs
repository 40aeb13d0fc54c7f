//! # Workflows Module
//!
//! The highest-level, user-facing layer: complete analysis procedures that
//! tie the engine and core together. [`process`] runs the full per-frame
//! indicator pipeline over a whole trajectory.

pub mod process;
