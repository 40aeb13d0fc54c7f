//! # Core Module
//!
//! Stateless building blocks for proton-indicator analysis.
//!
//! ## Overview
//!
//! This module holds everything that carries no per-run state: the snapshot
//! data model, the pure indicator formulas, and trajectory file I/O.
//!
//! - **Molecular Representation** ([`models`]) - Trajectory frames and atom
//!   role tags
//! - **Indicator Formulas** ([`indicator`]) - Switching function, projected
//!   donor-acceptor ratio, and normalization factor
//! - **File I/O** ([`io`]) - Streaming XYZ trajectory reading and writing

pub mod indicator;
pub mod io;
pub mod models;
