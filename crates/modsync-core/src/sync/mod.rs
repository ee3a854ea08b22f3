//! Reconciliation of a local mods directory against a remote set
//!
//! This module provides:
//! - **policy**: the `force` / `keep_existing` switches for a run
//! - **decision**: the per-artifact classification by name and byte length
//! - **executor**: fan-out of one blocking task per artifact with fail-fast fan-in
//! - **engine**: the [`SyncEngine`] driving the write and backup phases
//! - **report**: what a run (or a dry-run plan) did

mod decision;
mod engine;
mod executor;
mod policy;
mod report;

pub use decision::{Decision, decide};
pub use engine::SyncEngine;
pub use policy::SyncPolicy;
pub use report::{PlannedAction, SyncPlan, SyncReport};
