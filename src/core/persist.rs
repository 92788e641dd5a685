//! Whole-file replacement for reports and exports

use crate::core::error::{Result, TallyError};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the file at `path` with `contents`.
///
/// The text goes to a uniquely named temporary file in the target's
/// directory and is renamed over the target only after a successful sync,
/// so a failed write leaves any previous file at `path` untouched. No other
/// file in the directory is created or removed.
///
/// # Errors
/// Returns [`TallyError::Export`] if the temporary file cannot be created,
/// written, or renamed.
pub fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let export_error = |source: io::Error| TallyError::Export {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    // Dropping the staging file on any early return deletes it
    let mut staging = NamedTempFile::new_in(dir).map_err(export_error)?;
    staging
        .write_all(contents.as_bytes())
        .and_then(|()| staging.as_file().sync_all())
        .map_err(export_error)?;
    staging
        .persist(path)
        .map_err(|failed| export_error(failed.error))?;

    crate::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries_in(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .expect("list dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().expect("temp dir");
        let target = dir.path().join("out.txt");
        fs::write(&target, "old contents that are longer").expect("seed file");

        replace_file(&target, "new").expect("replace");

        assert_eq!(fs::read_to_string(&target).expect("read"), "new");
        assert_eq!(entries_in(&dir), ["out.txt"]);
    }

    #[test]
    fn sibling_files_are_left_alone() {
        let dir = TempDir::new().expect("temp dir");
        let target = dir.path().join("results.csv");
        let neighbour = dir.path().join("results.csv.tmp");
        fs::write(&neighbour, "precious user data").expect("seed neighbour");

        replace_file(&target, "Name,Mark,Grade\n").expect("replace");

        assert_eq!(
            fs::read_to_string(&neighbour).expect("neighbour survives"),
            "precious user data"
        );
        assert_eq!(
            fs::read_to_string(&target).expect("read"),
            "Name,Mark,Grade\n"
        );
    }

    #[test]
    fn failed_write_reports_export_error() {
        let dir = TempDir::new().expect("temp dir");
        let target = dir.path().join("missing").join("out.txt");

        let err = replace_file(&target, "data").expect_err("parent does not exist");
        assert!(matches!(err, TallyError::Export { .. }));
        assert!(err.to_string().starts_with("Could not save file."));
    }

    #[test]
    fn failed_rename_keeps_previous_file() {
        let dir = TempDir::new().expect("temp dir");
        // A directory at the target path makes the final rename fail
        let target = dir.path().join("results.csv");
        fs::create_dir(&target).expect("create blocking dir");
        fs::write(target.join("keep.txt"), "keep").expect("seed");

        assert!(replace_file(&target, "Name,Mark,Grade\n").is_err());
        assert_eq!(
            fs::read_to_string(target.join("keep.txt")).expect("read"),
            "keep"
        );
        assert_eq!(entries_in(&dir), ["results.csv"]);
    }
}
