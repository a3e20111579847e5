//! Embedded store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Special path libSQL treats as a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> PathBuf {
    PathBuf::from("tmp").join("db.sqlite3")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file, relative to the working directory, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn in_memory(&self) -> bool {
        self.path == Path::new(IN_MEMORY)
    }

    /// Directory that must exist before the file can be created.
    /// `None` for in-memory stores and bare file names.
    #[must_use]
    pub fn parent_dir(&self) -> Option<&Path> {
        if self.in_memory() {
            return None;
        }
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lives_under_tmp() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, PathBuf::from("tmp/db.sqlite3"));
        assert!(!config.in_memory());
        assert_eq!(config.parent_dir(), Some(Path::new("tmp")));
    }

    #[test]
    fn in_memory_has_no_parent() {
        let config = DatabaseConfig {
            path: PathBuf::from(IN_MEMORY),
        };
        assert!(config.in_memory());
        assert_eq!(config.parent_dir(), None);
    }

    #[test]
    fn bare_file_name_has_no_parent() {
        let config = DatabaseConfig {
            path: PathBuf::from("insights.db"),
        };
        assert_eq!(config.parent_dir(), None);
    }
}
