//! Shared test utilities for the modsync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`mods`]: [`TestModsDir`] builder for a throwaway install layout
//! - [`remote`]: in-memory remote sources with probes and injectable failures
//! - [`observer`]: an observer that records every event

pub mod mods;
pub mod observer;
pub mod remote;

pub use mods::TestModsDir;
pub use observer::RecordingObserver;
pub use remote::{ArtifactProbe, MemoryArtifact, MemorySource};
