use crate::models::{FolderStats, StatsConfig};
use crate::services::scanner::DirectoryScanner;
use crate::services::table::update_document;
use anyhow::{Context, Result};
use camino::Utf8Path;

/// Scan every configured folder in order.
///
/// Folders are scanned sequentially; the first missing folder aborts the run.
pub fn collect_stats(config: &StatsConfig, base_dir: &Utf8Path) -> Result<Vec<FolderStats>> {
    let scanner = DirectoryScanner::new(base_dir, config);

    config
        .folders
        .iter()
        .map(|folder| -> Result<FolderStats> {
            let record = scanner
                .scan(folder)
                .with_context(|| format!("Failed to scan folder: {}", folder))?;
            let stats = record.stats(config);
            tracing::debug!(
                "{}: count={}, language={:?}, recent={:?}",
                stats.folder,
                stats.total_file_count,
                stats.dominant_language,
                stats.recent_file
            );
            Ok(stats)
        })
        .collect()
}

/// Scan all folders and rewrite the document table under `base_dir`.
///
/// All scanning happens before the document is touched, so a scan failure never
/// leaves a half-updated README.
pub fn update_summary(config: &StatsConfig, base_dir: &Utf8Path) -> Result<Vec<FolderStats>> {
    let stats = collect_stats(config, base_dir)?;

    let document = base_dir.join(&config.document);
    update_document(&document, &stats)
        .with_context(|| format!("Failed to update summary table in {}", document))?;

    Ok(stats)
}
