//! Provides input/output functionality for trajectory files.
//!
//! Currently this covers the plain-text XYZ trajectory format: a lazy,
//! pull-based frame reader with explicit end-of-input signaling and a
//! fixed-precision frame writer.

pub mod xyz;
