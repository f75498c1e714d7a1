//! Services module - the scan and render workflow.
//!
//! # Components
//!
//! - [`DirectoryScanner`]: walks one solution folder and builds a
//!   [`FolderRecord`](crate::models::FolderRecord) (file list, extension counts, mtimes)
//! - [`table`]: renders [`FolderStats`](crate::models::FolderStats) rows and splices them
//!   into the document after the preserved prose
//! - [`update_summary`]: scans every configured folder in order, then rewrites the
//!   document once
//!
//! Nothing here reads global state. Folder names and the document path are resolved
//! against an explicit base directory, so tests can run against temporary trees.
//!
//! # Usage Example
//!
//! ```ignore
//! use solution_stats::{StatsConfig, services::update_summary};
//! use camino::Utf8Path;
//!
//! let config = StatsConfig::default();
//! let stats = update_summary(&config, Utf8Path::new("."))?;
//! ```

pub mod scanner;
pub mod summary;
pub mod table;

pub use scanner::{DirectoryScanner, ScanError};
pub use summary::{collect_stats, update_summary};
pub use table::{TABLE_HEADER, TableError, render_row, render_table, splice_table, update_document};
