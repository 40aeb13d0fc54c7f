//! # Core Models Module
//!
//! Fundamental data structures for representing trajectory frames.
//!
//! - [`atom`] - Atom role classification parsed from XYZ element labels
//! - [`snapshot`] - One trajectory frame: title plus parallel label and
//!   coordinate sequences

pub mod atom;
pub mod snapshot;
