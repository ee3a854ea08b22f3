//! Write and backup primitives
//!
//! These are the only places artifact bytes touch the local filesystem.

mod backup;
mod write;

pub use backup::backup_artifact;
pub use write::{release, write_artifact};
