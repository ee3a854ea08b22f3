//! Directory-backed remote source
//!
//! Treats a directory (a server's mods folder on a share, an unpacked modpack)
//! as the remote set.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use async_trait::async_trait;

use super::{BoxedArtifact, RemoteArtifact, RemoteSource};
use crate::{Error, Result};

/// Remote source listing the artifacts found in a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl RemoteSource for DirectorySource {
    async fn list_artifacts(&self) -> Result<Vec<BoxedArtifact>> {
        let dir = self.dir.clone();
        let inventory = tokio::task::spawn_blocking(move || modsync_fs::scan(&dir))
            .await
            .map_err(|e| Error::TaskFailed {
                message: format!("listing {}: {}", self.dir.display(), e),
            })?
            .map_err(|e| Error::Remote {
                message: e.to_string(),
            })?;

        let mut artifacts: Vec<BoxedArtifact> = Vec::with_capacity(inventory.len());
        for (name, size) in inventory.iter() {
            artifacts.push(Box::new(FileArtifact::new(self.dir.join(name), name, size)));
        }
        Ok(artifacts)
    }
}

/// A remote artifact read from a file.
///
/// The file is opened on the first `write_to` call and closed by `close`.
#[derive(Debug)]
pub struct FileArtifact {
    path: PathBuf,
    name: String,
    size: u64,
    file: Option<File>,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
            file: None,
        }
    }
}

impl RemoteArtifact for FileArtifact {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn write_to(&mut self, sink: &mut dyn Write) -> io::Result<u64> {
        let file = match self.file.as_mut() {
            Some(file) => file,
            None => self.file.insert(File::open(&self.path)?),
        };
        io::copy(file, sink)
    }

    fn close(&mut self) -> io::Result<()> {
        self.file = None;
        Ok(())
    }
}
