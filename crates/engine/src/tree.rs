use crate::error::{EngineError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the box-drawing tree for `path` into `out`.
///
/// Children are sorted lexicographically by full path so the display
/// order is deterministic. Symlinks are drawn as leaves and never
/// descended into.
///
/// # Errors
///
/// Listing failures are not caught here; a directory that cannot be read
/// aborts the drawing with [`EngineError::ReadDir`]. Write failures on
/// the sink propagate as [`EngineError::Io`].
pub fn write_tree<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    write_node(out, path, "", true)
}

fn write_node<W: Write>(out: &mut W, path: &Path, prefix: &str, is_last: bool) -> Result<()> {
    let connector = if is_last { "└── " } else { "├── " };
    // file_name is None for paths like "/"; fall back to the full path.
    let name = path.file_name().unwrap_or(path.as_os_str());
    writeln!(out, "{prefix}{connector}{}", name.to_string_lossy())?;

    if !is_dir_no_follow(path) {
        return Ok(());
    }

    let mut children = Vec::new();
    let entries = fs::read_dir(path).map_err(|e| EngineError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::ReadDir {
            path: path.to_path_buf(),
            source: e,
        })?;
        children.push(entry.path());
    }
    children.sort();

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    for (i, child) in children.iter().enumerate() {
        write_node(out, child, &child_prefix, i + 1 == children.len())?;
    }

    Ok(())
}

fn is_dir_no_follow(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(path: &Path) -> String {
        let mut out = Vec::new();
        write_tree(&mut out, path).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn root_is_drawn_as_last_and_empty_dir_adds_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(render(dir.path()), format!("└── {name}\n"));
    }

    #[test]
    fn children_print_in_lexicographic_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "c.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let rendered = render(dir.path());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "    ├── a.txt");
        assert_eq!(lines[2], "    ├── b.txt");
        assert_eq!(lines[3], "    └── c.txt");
    }

    #[test]
    fn sole_child_is_marked_last() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("only")).unwrap();

        let rendered = render(dir.path());
        assert!(rendered.ends_with("    └── only\n"));
    }

    #[test]
    fn nested_prefixes_draw_ancestor_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.txt"), b"12345").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("y.txt"), b"0123456789").unwrap();

        let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
        let expected =
            format!("└── {name}\n    ├── sub\n    │   └── y.txt\n    └── x.txt\n");
        assert_eq!(render(dir.path()), expected);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_a_leaf() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real").join("inner.txt"), b"x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();

        let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
        let expected = format!(
            "└── {name}\n    ├── alias\n    └── real\n        └── inner.txt\n"
        );
        assert_eq!(render(dir.path()), expected);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_aborts_the_drawing() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Running as root ignores permission bits; nothing to observe then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut out = Vec::new();
        let result = write_tree(&mut out, dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(EngineError::ReadDir { .. })));
    }
}
