use serde::Serialize;
use std::path::PathBuf;

/// Aggregate counters for one subtree.
///
/// The root directory of a scan counts as one directory; sizes are the
/// byte lengths of regular files only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirStats {
    pub files: u64,
    pub dirs: u64,
    pub total_size: u64,
}

impl DirStats {
    /// Element-wise addition of a child subtree's counters.
    pub fn merge(&mut self, other: Self) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.total_size += other.total_size;
    }
}

/// Result of a stats scan.
///
/// Entries that could not be read are collected here alongside the
/// counters so sibling traversal continues; the caller decides how to
/// surface them.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub stats: DirStats,
    pub errors: Vec<(PathBuf, std::io::Error)>,
}
