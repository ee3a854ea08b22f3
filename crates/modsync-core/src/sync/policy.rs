/// Switches controlling how a sync run treats existing local artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Overwrite local artifacts with remote ones without comparing sizes.
    pub force: bool,
    /// Leave local artifacts without a remote counterpart where they are.
    pub keep_existing: bool,
}

impl SyncPolicy {
    pub fn new(force: bool, keep_existing: bool) -> Self {
        Self {
            force,
            keep_existing,
        }
    }

    /// Whether the local directory has to be scanned at all.
    ///
    /// With both switches set nothing is compared and nothing is backed up,
    /// so the scan and all bookkeeping are skipped.
    pub fn needs_inventory(&self) -> bool {
        !(self.force && self.keep_existing)
    }

    /// Whether accounted-for names are struck from the inventory so that
    /// the leftovers can be backed up as orphans.
    pub fn tracks_orphans(&self) -> bool {
        !self.keep_existing
    }
}
