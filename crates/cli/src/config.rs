// crates/cli/src/config.rs
use crate::args::{Args, OutputFormat};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            root: logical_absolute(&args.path),
            format: args.format,
        }
    }
}

/// Absolute form of `path` without resolving symlinks (logical, so the
/// result is printable even when the path does not exist).
///
/// Falls back to the input unchanged when the current directory cannot
/// be determined.
pub fn logical_absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
