//! Reusable observers for inverse solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `inverse-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasResidual`], [`CanStopEarly`], [`CanForceBisection`])
//!
//! # Observers
//!
//! - [`LogObserver`] — writes each iteration to the `log` facade
//! - [`History`] — records each iteration for later inspection
//!
//! [`Observer`]: inverse_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanForceBisection`]: traits::CanForceBisection

pub mod traits;

mod history;
mod logging;

pub use history::{History, Record};
pub use logging::LogObserver;
