use crate::models::config::{OTHER_LANGUAGE, StatsConfig};
use std::collections::BTreeMap;
use std::time::SystemTime;

/// A file that survived filtering during a folder scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path relative to the scanned folder, forward-slash separated
    pub path: String,
    pub modified: SystemTime,
}

/// Aggregated scan result for one solution folder.
///
/// Built fresh by [`DirectoryScanner`](crate::services::DirectoryScanner) and
/// reduced to [`FolderStats`] for rendering.
#[derive(Debug, Clone, Default)]
pub struct FolderRecord {
    pub folder: String,

    /// Included files in discovery order
    pub files: Vec<ScannedFile>,

    /// Extension to number of included files carrying it
    pub extension_counts: BTreeMap<String, usize>,
}

/// One row of the generated README table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderStats {
    pub folder: String,
    pub total_file_count: usize,
    /// Empty when the folder had no matching files
    pub dominant_language: String,
    /// Empty when the folder had no matching files
    pub recent_file: String,
}

impl FolderRecord {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    /// Record an included file and bump its extension count.
    pub fn push(&mut self, file: ScannedFile) {
        if let Some(ext) = extension_of(file_name(&file.path)) {
            *self.extension_counts.entry(ext.to_string()).or_insert(0) += 1;
        }
        self.files.push(file);
    }

    pub fn total_file_count(&self) -> usize {
        self.extension_counts.values().sum()
    }

    /// Most frequent extension; ties go to the lexicographically smallest one.
    pub fn dominant_extension(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (ext, &count) in &self.extension_counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((ext.as_str(), count));
            }
        }
        best.map(|(ext, _)| ext)
    }

    /// Dominant extension mapped through the language table, `"Other"` if unmapped.
    pub fn dominant_language(&self, config: &StatsConfig) -> String {
        match self.dominant_extension() {
            None => String::new(),
            Some(ext) => config
                .language_for(ext)
                .unwrap_or(OTHER_LANGUAGE)
                .to_string(),
        }
    }

    /// Most recently modified file; ties go to the first one discovered.
    pub fn recent_file(&self) -> Option<&ScannedFile> {
        let mut recent: Option<&ScannedFile> = None;
        for file in &self.files {
            if recent.is_none_or(|current| file.modified > current.modified) {
                recent = Some(file);
            }
        }
        recent
    }

    pub fn stats(&self, config: &StatsConfig) -> FolderStats {
        FolderStats {
            folder: self.folder.clone(),
            total_file_count: self.total_file_count(),
            dominant_language: self.dominant_language(config),
            recent_file: self
                .recent_file()
                .map(|f| f.path.clone())
                .unwrap_or_default(),
        }
    }
}

/// Extension of a file name: everything from its first `.` to the end.
pub fn extension_of(name: &str) -> Option<&str> {
    name.find('.').map(|idx| &name[idx..])
}

/// True when the name has no `.` past its first character, e.g. `.gitignore` or `Makefile`.
pub fn is_extensionless(name: &str) -> bool {
    !name.chars().skip(1).any(|c| c == '.')
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn file(path: &str, secs: u64) -> ScannedFile {
        ScannedFile {
            path: path.to_string(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.rs"), Some(".rs"));
        assert_eq!(extension_of("a.test.rs"), Some(".test.rs"));
        assert_eq!(extension_of(".eslintrc.json"), Some(".eslintrc.json"));
        assert_eq!(extension_of("Makefile"), None);
    }

    #[test]
    fn test_is_extensionless() {
        assert!(is_extensionless(".gitignore"));
        assert!(is_extensionless("Makefile"));
        assert!(!is_extensionless("main.rs"));
        assert!(!is_extensionless(".eslintrc.json"));
    }

    #[test]
    fn test_empty_record_stats() {
        let record = FolderRecord::new("Empty");
        let stats = record.stats(&StatsConfig::default());
        assert_eq!(stats.total_file_count, 0);
        assert_eq!(stats.dominant_language, "");
        assert_eq!(stats.recent_file, "");
    }

    #[test]
    fn test_dominant_language_by_count() {
        let mut record = FolderRecord::new("X");
        record.push(file("a.rs", 1));
        record.push(file("b.rs", 2));
        record.push(file("c.py", 3));

        let stats = record.stats(&StatsConfig::default());
        assert_eq!(stats.total_file_count, 3);
        assert_eq!(stats.dominant_language, "Rust");
        assert_eq!(stats.recent_file, "c.py");
    }

    #[test]
    fn test_unmapped_extension_is_other() {
        let mut record = FolderRecord::new("X");
        record.push(file("notes.md", 1));
        assert_eq!(record.dominant_language(&StatsConfig::default()), "Other");
    }

    #[test]
    fn test_tie_prefers_smallest_extension() {
        let mut record = FolderRecord::new("X");
        record.push(file("a.py", 1));
        record.push(file("b.c", 1));
        assert_eq!(record.dominant_extension(), Some(".c"));
    }

    #[test]
    fn test_recent_tie_prefers_first_discovered() {
        let mut record = FolderRecord::new("X");
        record.push(file("first.rs", 5));
        record.push(file("second.rs", 5));
        record.push(file("old.rs", 1));
        assert_eq!(record.recent_file().unwrap().path, "first.rs");
    }

    #[test]
    fn test_nested_path_extension() {
        let mut record = FolderRecord::new("X");
        record.push(file("2023/day.01/part1.rs", 1));
        assert_eq!(record.extension_counts.get(".rs"), Some(&1));
    }
}
