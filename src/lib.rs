// solution-stats - Summarize programming-exercise solution folders
//
// This is the library crate containing the scanning and table rendering logic.
// The binary crate (main.rs) wires configuration and logging around it.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{FolderRecord, FolderStats, StatsConfig};
pub use services::{DirectoryScanner, update_summary};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
