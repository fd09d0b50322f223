use crate::stats::{DirStats, ScanReport};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Scan a subtree depth-first, counting regular files and directories and
/// summing file sizes.
///
/// A nonexistent path yields zeroed stats rather than an error. Entries
/// that cannot be read are recorded in [`ScanReport::errors`] and
/// contribute nothing beyond what was already accumulated; traversal of
/// their siblings continues.
pub fn scan(path: &Path) -> ScanReport {
    debug!("scanning {}", path.display());
    let mut errors = Vec::new();
    let stats = scan_node(path, &mut errors);
    ScanReport { stats, errors }
}

fn scan_node(path: &Path, errors: &mut Vec<(PathBuf, std::io::Error)>) -> DirStats {
    let mut stats = DirStats::default();

    // Symlinks are not followed: a link is neither file nor directory here.
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        // Vanished mid-scan or never existed: contributes nothing.
        Err(e) if e.kind() == ErrorKind::NotFound => return stats,
        Err(e) => {
            warn!("cannot stat {}: {e}", path.display());
            errors.push((path.to_path_buf(), e));
            return stats;
        }
    };

    if meta.is_file() {
        stats.files = 1;
        stats.total_size = meta.len();
    } else if meta.is_dir() {
        stats.dirs = 1;
        match fs::read_dir(path) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(entry) => stats.merge(scan_node(&entry.path(), errors)),
                        Err(e) => errors.push((path.to_path_buf(), e)),
                    }
                }
            }
            Err(e) => {
                warn!("cannot list {}: {e}", path.display());
                errors.push((path.to_path_buf(), e));
            }
        }
    }

    stats
}
