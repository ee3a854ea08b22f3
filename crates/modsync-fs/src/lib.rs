//! Filesystem layer for modsync
//!
//! Provides install layout resolution, local inventory scanning and the
//! small set of filesystem primitives the sync engine builds on.

pub mod constants;
pub mod error;
pub mod inventory;
pub mod io;
pub mod layout;

pub use constants::ModsPath;
pub use error::{Error, Result};
pub use inventory::{LocalInventory, scan};
pub use layout::{DirectoryKind, InstallLayout};
