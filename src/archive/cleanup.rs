use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Name prefix of the AppleDouble sidecar files macOS `tar` adds to archives.
pub const METADATA_PREFIX: &str = "._";

/// Directory the UN General Debate archive unpacks its speeches into.
pub const UNGDC_SOURCE_DIR: &str = "TXT";

/// Name the speeches directory is given after unpacking.
pub const UNGDC_TARGET_DIR: &str = "UNGDC_1946-2023";

/// Delete every file below `dir` whose name starts with `._`.
///
/// Returns the number of files removed.
pub fn remove_metadata_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("cannot walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with(METADATA_PREFIX) {
            fs::remove_file(entry.path())
                .with_context(|| format!("cannot remove {}", entry.path().display()))?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// UNGDC-specific: move `{dir}/TXT` to `{dir}/UNGDC_1946-2023`.
///
/// This is not a general archive feature. It gives the unpacked speeches the
/// name the archive's sentinel check looks for. Returns `false` when there is
/// no `TXT` directory.
pub fn rename_ungdc_directory(dir: &Path) -> Result<bool> {
    let source = dir.join(UNGDC_SOURCE_DIR);
    if !source.exists() {
        return Ok(false);
    }

    let target = dir.join(UNGDC_TARGET_DIR);
    fs::rename(&source, &target).with_context(|| {
        format!(
            "cannot rename {} to {}",
            source.display(),
            target.display()
        )
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_files_are_removed_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("TXT").join("Session 01 - 1946");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("._TXT"), b"x").unwrap();
        fs::write(nested.join("._USA_01_1946.txt"), b"x").unwrap();
        fs::write(nested.join("USA_01_1946.txt"), b"speech").unwrap();

        let removed = remove_metadata_files(dir.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(!dir.path().join("._TXT").exists());
        assert!(!nested.join("._USA_01_1946.txt").exists());
        assert!(nested.join("USA_01_1946.txt").exists());
    }

    #[test]
    fn directories_with_the_prefix_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("._keep")).unwrap();

        assert_eq!(remove_metadata_files(dir.path()).unwrap(), 0);
        assert!(dir.path().join("._keep").is_dir());
    }

    #[test]
    fn txt_is_renamed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("TXT")).unwrap();
        fs::write(dir.path().join("TXT").join("a.txt"), b"a").unwrap();

        assert!(rename_ungdc_directory(dir.path()).unwrap());
        assert!(!dir.path().join("TXT").exists());
        assert!(dir.path().join("UNGDC_1946-2023").join("a.txt").exists());
    }

    #[test]
    fn rename_without_txt_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!rename_ungdc_directory(dir.path()).unwrap());
        assert!(!dir.path().join("UNGDC_1946-2023").exists());
    }
}
