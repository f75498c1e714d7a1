//! Data models for solution-stats.
//!
//! - [`StatsConfig`]: folders, document name, language table and ignore list
//! - [`FolderRecord`]: everything collected while scanning one folder
//! - [`FolderStats`]: the four values rendered as one README table row

pub mod config;
pub mod folder;

pub use config::{
    DEFAULT_DOCUMENT, DEFAULT_FOLDERS, DEFAULT_IGNORED_EXTENSIONS, DEFAULT_LANGUAGES,
    OTHER_LANGUAGE, StatsConfig,
};
pub use folder::{FolderRecord, FolderStats, ScannedFile, extension_of, is_extensionless};
