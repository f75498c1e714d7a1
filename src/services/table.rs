//! README table regeneration.
//!
//! Everything before the first line starting with [`TABLE_HEADER`] is kept byte for
//! byte; that line and everything after it is replaced by a freshly rendered table.

use crate::models::FolderStats;
use camino::Utf8Path;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Marker line that opens the generated table.
pub const TABLE_HEADER: &str = "|-|-|-|:-|";

/// Errors that can occur while rewriting the document
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write document {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to replace document {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Render one table row with links to the folder and its most recent file.
pub fn render_row(stats: &FolderStats) -> String {
    format!(
        "|[{folder}]({folder})|{count}|{language}|[{recent}]({folder}/{link})|\n",
        folder = stats.folder,
        count = stats.total_file_count,
        language = stats.dominant_language,
        recent = stats.recent_file,
        link = stats.recent_file.replace(' ', "%20"),
    )
}

/// Render the header marker followed by one row per folder, in order.
pub fn render_table(stats: &[FolderStats]) -> String {
    let mut table = String::with_capacity(TABLE_HEADER.len() + 1 + stats.len() * 64);
    table.push_str(TABLE_HEADER);
    table.push('\n');
    for folder in stats {
        table.push_str(&render_row(folder));
    }
    table
}

/// Replace the generated table region of `document` with a new table.
pub fn splice_table(document: &str, stats: &[FolderStats]) -> String {
    let mut output = String::with_capacity(document.len());

    for line in document.split_inclusive('\n') {
        if line.starts_with(TABLE_HEADER) {
            break;
        }
        output.push_str(line);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output.push_str(&render_table(stats));
    output
}

/// Read `path`, regenerate its table, and replace it atomically.
///
/// The new content is written to a temporary file next to the document and then
/// renamed over it, so a failed write leaves the original untouched. A symlinked
/// document is resolved first so the link target is the file that gets replaced.
/// Nothing is written when the table is already current.
///
/// # Errors
///
/// Returns [`TableError::Read`] if the document is missing or unreadable; nothing is
/// written in that case. Write and rename failures are reported as
/// [`TableError::Write`] and [`TableError::Persist`].
pub fn update_document(path: &Utf8Path, stats: &[FolderStats]) -> Result<(), TableError> {
    let original = fs::read_to_string(path).map_err(|source| TableError::Read {
        path: path.to_string(),
        source,
    })?;

    let updated = splice_table(&original, stats);
    if updated == original {
        tracing::info!("Table in {} is already up to date", path);
        return Ok(());
    }

    let write_err = |source: std::io::Error| TableError::Write {
        path: path.to_string(),
        source,
    };

    // Write through symlinks: replace the link target, not the link
    let target = path.canonicalize_utf8().map_err(write_err)?;
    let dir = target.parent().unwrap_or(Utf8Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(updated.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    // Keep the document's permissions rather than the temp file's 0600
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
    }

    temp.persist(&target).map_err(|source| TableError::Persist {
        path: path.to_string(),
        source,
    })?;

    tracing::info!("Wrote {} rows to {}", stats.len(), path);
    Ok(())
}
