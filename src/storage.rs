use crate::tasks::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage for the task list
///
/// The entire collection is written to a single JSON file after every
/// mutation and read back once at startup.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the data file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the task list from the data file
    ///
    /// A missing file yields an empty list. A file that cannot be parsed
    /// as the expected JSON array also yields an empty list, with a
    /// warning on stderr (stdout belongs to the MCP transport).
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        match serde_json::from_str(&content) {
            Ok(list) => Ok(list),
            Err(e) => {
                eprintln!(
                    "Warning: task data in {} is not readable ({}); starting with an empty list",
                    self.file_path.display(),
                    e
                );
                Ok(TaskList::new())
            }
        }
    }

    /// Write the task list to the data file
    pub fn save(&self, list: &TaskList) -> Result<()> {
        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}
