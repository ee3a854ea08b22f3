use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::remote::BoxedArtifact;
use crate::{Error, Result};

/// Write the full contents of `artifact` to `destination`.
///
/// The destination is created or truncated. The artifact is released on the
/// way out whether or not the write succeeded.
pub fn write_artifact(mut artifact: BoxedArtifact, destination: &Path) -> Result<u64> {
    info!(destination = %destination.display(), "writing artifact");

    let result = copy_into(&mut artifact, destination);
    release(artifact);
    result
}

fn copy_into(artifact: &mut BoxedArtifact, destination: &Path) -> Result<u64> {
    let write_failed = |source: std::io::Error| Error::WriteFailed {
        path: destination.to_path_buf(),
        source,
    };

    let mut file = modsync_fs::io::create_truncate(destination).map_err(write_failed)?;
    let written = artifact.write_to(&mut file).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;
    Ok(written)
}

/// Release an artifact without transferring it.
///
/// A failing `close` is logged and otherwise ignored: the transfer outcome is
/// already decided by the time an artifact is released.
pub fn release(mut artifact: BoxedArtifact) {
    if let Err(e) = artifact.close() {
        warn!(name = artifact.name(), error = %e, "failed to release remote artifact");
    }
}
