// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs;
use std::io;
use std::path::{Path as StdPath, PathBuf};

fn remap_create_dir_res(create_dir_res: io::Result<()>) -> io::Result<()> {
    create_dir_res.or_else(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            Ok(())
        } else {
            Err(err)
        }
    })
}

/// Create a directory (and its parents) if it does not yet exist.
/// There is no error if the directory already exists.
///
/// # Errors
///
/// If the directory cannot be created due to an IO- or permission-error.
pub fn create_dir_res<P: AsRef<StdPath>>(dir: P) -> io::Result<()> {
    remap_create_dir_res(fs::create_dir_all(dir))
}

/// Ensures the provided dir exists.
/// Returns whether it was created.
///
/// # Errors
///
/// - if Checking if the directory exists fails.
/// - if the path exists, but is not a directory.
/// - if Creating the directory fails.
pub fn ensure_dir_exists(dir_path: &StdPath) -> io::Result<bool> {
    let dir_path_exists = StdPath::try_exists(dir_path)?;
    if dir_path_exists {
        if !fs::metadata(dir_path)?.is_dir() {
            return Err(io::Error::other(format!(
                "Should be a directory, but is not: '{}' - possible solution: delete it",
                dir_path.display()
            )));
        }
    } else {
        create_dir_res(dir_path)?;
    }
    Ok(!dir_path_exists)
}

/// Writes `content` to `file`.
/// If writing fails half-way, the partially written file is removed,
/// so no truncated output is left behind.
///
/// # Errors
///
/// If the file cannot be written.
/// The original write error is returned,
/// even if removing the partial file fails as well.
pub fn write_or_clean<C: AsRef<[u8]>>(file: &StdPath, content: C) -> io::Result<()> {
    fs::write(file, content).inspect_err(|_| {
        if file.is_file() {
            if let Err(rm_err) = fs::remove_file(file) {
                tracing::warn!(
                    "Failed to remove partially written file '{}': {rm_err}",
                    file.display()
                );
            }
        }
    })
}

/// Returns the part after the last `'/'`,
/// which is how entries in an archive name their files.
///
/// # Examples
///
/// - `"lucide-main/icons/arrow-right.svg"` -> \
///   `"arrow-right.svg"`
/// - `"arrow-right.svg"` -> \
///   `"arrow-right.svg"`
#[must_use]
pub fn last_path_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// A scratch directory that lives for the duration of one run.
///
/// It gets created by [`ScratchDir::create`],
/// and is removed recursively when dropped,
/// which happens on success as well as on an early return with an error.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Creates the directory (if it does not yet exist)
    /// and takes ownership of it.
    ///
    /// # Errors
    ///
    /// If the directory cannot be created,
    /// or the path exists but is not a directory.
    pub fn create<P: Into<PathBuf>>(path: P) -> io::Result<Self> {
        let path = path.into();
        ensure_dir_exists(&path)?;
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &StdPath {
        &self.path
    }

    #[must_use]
    pub fn join<P: AsRef<StdPath>>(&self, sub: P) -> PathBuf {
        self.path.join(sub)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        tracing::debug!("Removing scratch directory '{}' ...", self.path.display());
        if let Err(err) = fs::remove_dir_all(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to remove scratch directory '{}': {err}",
                    self.path.display()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_res_tolerates_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        create_dir_res(&dir).unwrap();
        create_dir_res(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_exists_reports_creation() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        assert!(ensure_dir_exists(&dir).unwrap());
        assert!(!ensure_dir_exists(&dir).unwrap());
    }

    #[test]
    fn ensure_dir_exists_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
    }

    #[test]
    fn scratch_dir_is_removed_on_drop() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("temp");
        {
            let scratch = ScratchDir::create(&dir).unwrap();
            fs::write(scratch.join("lucide.zip"), b"PK").unwrap();
            assert!(dir.is_dir());
        }
        assert!(!dir.exists());
    }

    #[test]
    fn write_or_clean_leaves_nothing_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing-parent").join("icon.rs");
        assert!(write_or_clean(&target, "content").is_err());
        assert!(!target.exists());
    }

    #[test]
    fn last_segment() {
        assert_eq!(
            last_path_segment("lucide-main/icons/arrow-right.svg"),
            "arrow-right.svg"
        );
        assert_eq!(last_path_segment("plain.svg"), "plain.svg");
        assert_eq!(last_path_segment("dir/"), "");
    }
}
