//! Directory scanning for solution folders.
//!
//! Walks a folder recursively in file-name order, drops extension-less files and
//! ignored extensions, and collects the rest into a [`FolderRecord`].
//!
//! Unreadable entries (permission errors, broken symlinks, non-UTF-8 names) are
//! logged and skipped. Only a missing or unlistable root aborts the scan.

use crate::models::{FolderRecord, ScannedFile, StatsConfig, extension_of, is_extensionless};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors that can occur while scanning a folder
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Solution folder not found: {0}")]
    RootNotFound(Utf8PathBuf),

    #[error("Solution folder is not readable: {path}: {source}")]
    RootUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Scanner that resolves folder names against a base directory.
pub struct DirectoryScanner<'a> {
    base_dir: Utf8PathBuf,
    config: &'a StatsConfig,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new<P: AsRef<Utf8Path>>(base_dir: P, config: &'a StatsConfig) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// Scan one folder, resolved relative to the base directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] if the folder does not exist or is not a
    /// directory, and [`ScanError::RootUnreadable`] if it cannot be listed. Problems
    /// with individual entries below the root are logged and skipped.
    pub fn scan(&self, folder: &str) -> Result<FolderRecord, ScanError> {
        let root = self.base_dir.join(folder);
        if !root.is_dir() {
            return Err(ScanError::RootNotFound(root));
        }

        let mut record = FolderRecord::new(folder);
        let skip_hidden = self.config.skip_hidden;

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !(skip_hidden && e.depth() > 0 && is_hidden(e)));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself could not be listed; same as a missing folder
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::RootUnreadable {
                        path: root,
                        source: e,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", folder, ScanError::from(e));
                    continue;
                }
            };

            match self.inspect(&root, &entry) {
                Ok(Some(file)) => record.push(file),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping entry in {}: {}", folder, e),
            }
        }

        tracing::info!(
            "Scanned {}: {} files across {} extensions",
            folder,
            record.total_file_count(),
            record.extension_counts.len()
        );

        Ok(record)
    }

    /// Decide whether an entry counts, returning its relative path and mtime if so.
    fn inspect(&self, root: &Utf8Path, entry: &DirEntry) -> Result<Option<ScannedFile>, ScanError> {
        if entry.file_type().is_dir() {
            return Ok(None);
        }

        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ScanError::NonUtf8Path(entry.path().to_path_buf()))?;

        if is_extensionless(name) {
            tracing::debug!("Excluded extension-less file: {}", name);
            return Ok(None);
        }

        if let Some(ext) = extension_of(name) {
            if self.config.is_ignored(ext) {
                tracing::debug!("Excluded ignored extension: {}", name);
                return Ok(None);
            }
        }

        let path = Utf8Path::from_path(entry.path())
            .ok_or_else(|| ScanError::NonUtf8Path(entry.path().to_path_buf()))?;

        // Follows symlinks, so a link to a file reports the target's mtime
        let metadata = fs::metadata(path).map_err(|source| ScanError::Io {
            path: path.to_string(),
            source,
        })?;
        if metadata.is_dir() {
            return Ok(None);
        }

        let modified = metadata.modified().map_err(|source| ScanError::Io {
            path: path.to_string(),
            source,
        })?;

        Ok(Some(ScannedFile {
            path: relative_path(root, path),
            modified,
        }))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Path below `root`, forward-slash separated regardless of platform.
fn relative_path(root: &Utf8Path, path: &Utf8Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join("/")
}
