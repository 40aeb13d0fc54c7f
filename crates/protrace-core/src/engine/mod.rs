//! # Engine Module
//!
//! Per-frame orchestration of the proton-indicator algorithm.
//!
//! The engine consumes one [`Snapshot`](crate::core::models::snapshot::Snapshot)
//! at a time: [`classify`] partitions its atoms into role buckets, [`donor`]
//! locates the over-coordinated heavy atom (or the dissociated hydrogen
//! fallback), and [`calculator`] turns that into a single indicator
//! coordinate via the weighted switching-function interpolation. Threshold
//! geometry lives in [`config`]; callers can observe long runs through
//! [`progress`].

pub mod calculator;
pub mod classify;
pub mod config;
pub mod donor;
pub mod error;
pub mod progress;
