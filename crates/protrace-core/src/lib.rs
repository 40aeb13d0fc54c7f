//! # Protrace Core Library
//!
//! A library for post-processing molecular-geometry trajectories of
//! hydrogen-bonded clusters (e.g., protonated water or ammonia clusters) to
//! compute, for every frame, a *proton indicator*: a virtual point tracking
//! the instantaneous location of the excess proton's positive charge as it
//! transfers through the network.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Snapshot`, `AtomKind`), the pure mathematical pieces of the indicator
//!   formula (switching function, projected donor-acceptor ratio), and XYZ
//!   trajectory I/O.
//!
//! - **[`engine`]: The Logic Core.** Per-frame orchestration: atom role
//!   classification, donor location with the lone-hydrogen fallback, the
//!   weighted indicator calculation, threshold configuration, and progress
//!   reporting.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It drives a whole trajectory through the engine, writes the augmented
//!   frames back out, and accumulates the indicator time series for
//!   downstream diagnostics.

pub mod core;
pub mod engine;
pub mod workflows;
