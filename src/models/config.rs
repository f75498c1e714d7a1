use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Solution folders scanned when no configuration file overrides them.
pub const DEFAULT_FOLDERS: &[&str] = &["LeetCode", "Baekjoon", "AdventOfCode"];

/// Document whose trailing table is regenerated.
pub const DEFAULT_DOCUMENT: &str = "README.md";

/// Extension (with leading dot) to language name.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    (".c", "C"),
    (".cpp", "C++"),
    (".csx", "C#"),
    (".py", "Python"),
    (".java", "Java"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".rs", "Rust"),
    (".zig", "Zig"),
];

/// Build artifacts and notes that never count toward folder statistics.
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &[".txt", ".a", ".o", ".out", ".exe"];

/// Language name used when the dominant extension has no mapping.
pub const OTHER_LANGUAGE: &str = "Other";

/// Configuration for a stats run, optionally loaded from `solution-stats.yaml`.
///
/// Every field falls back to its default when omitted, so an empty file
/// behaves exactly like no file at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Folders to scan, in table order.
    pub folders: Vec<String>,

    /// Document to rewrite, relative to the base directory.
    pub document: String,

    pub languages: IndexMap<String, String>,

    pub ignored_extensions: Vec<String>,

    /// Exclude every dot-prefixed file and skip dot-prefixed directories.
    pub skip_hidden: bool,

    pub debug_mode: bool,

    /// Directory for rotating log files; console only when unset.
    pub log_dir: Option<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            folders: DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect(),
            document: DEFAULT_DOCUMENT.to_string(),
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
                .collect(),
            ignored_extensions: DEFAULT_IGNORED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            skip_hidden: false,
            debug_mode: false,
            log_dir: None,
        }
    }
}

impl StatsConfig {
    /// Look up the language name for an extension such as `.rs`
    pub fn language_for(&self, extension: &str) -> Option<&str> {
        self.languages.get(extension).map(String::as_str)
    }

    /// Check if files with this extension are excluded from counting
    pub fn is_ignored(&self, extension: &str) -> bool {
        self.ignored_extensions.iter().any(|e| e == extension)
    }
}
