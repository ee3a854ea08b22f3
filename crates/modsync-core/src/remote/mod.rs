//! Remote source capabilities
//!
//! A [`RemoteSource`] hands out the authoritative set of artifacts for one
//! sync run. Each [`RemoteArtifact`] is owned by the transfer task that
//! processes it and is released exactly once through [`crate::release`] or
//! [`crate::write_artifact`].

mod directory;

use std::io::{self, Write};

use async_trait::async_trait;

use crate::Result;

pub use directory::{DirectorySource, FileArtifact};

/// A named, sized artifact whose bytes can be streamed into a sink.
///
/// Methods are blocking; the engine only calls them from blocking tasks.
pub trait RemoteArtifact: Send {
    /// File name, unique within one sync run.
    fn name(&self) -> &str;

    /// Declared byte length.
    fn size(&self) -> u64;

    /// Stream the full contents into `sink`, returning the bytes written.
    fn write_to(&mut self, sink: &mut dyn Write) -> io::Result<u64>;

    /// Release any resources held for this artifact.
    fn close(&mut self) -> io::Result<()>;
}

/// Owned, type-erased remote artifact.
pub type BoxedArtifact = Box<dyn RemoteArtifact>;

/// Supplies the authoritative artifact set.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// List every artifact the local directory should end up with.
    async fn list_artifacts(&self) -> Result<Vec<BoxedArtifact>>;
}
