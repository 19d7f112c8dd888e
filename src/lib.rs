//! Todo MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for managing
//! a personal task list: tasks carry category, priority, and due-date
//! metadata, and the whole collection is persisted to a single JSON file
//! after every change.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tasks` module - Task records and the ordered task list
//! - **Persistence Layer**: `storage` module - File-based JSON storage
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("tasks.json")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

mod formatting;
mod handlers;
mod storage;
mod tasks;
mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use storage::Storage;
pub use tasks::{Category, Priority, Task, TaskList};

/// MCP server handler for the personal task list
///
/// Owns the in-memory task collection and mirrors it to the JSON data file
/// after every mutating tool call, so the file and the collection are
/// identical between operations.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TaskList>,
    pub(crate) storage: Storage,
}

impl TodoServerHandler {
    /// Create a new todo server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task data file (a JSON array)
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::TodoServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::new("tasks.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self { data, storage })
    }

    /// Write the current collection to the data file
    fn save_data(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save(&data)?;
        Ok(())
    }
}

/// Personal task list manager.
///
/// Tasks carry a category (work, personal, shopping, other), a priority
/// (high, medium, low), and an optional due date. The list keeps insertion
/// order; every change is written through to the data file.
///
/// Task ids are integers assigned by the server and never reused within a
/// list. Use list() to see current tasks and their ids.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// Add a task to the end of the list.
    #[tool]
    pub async fn create(
        &self,
        /// Task text (must not be blank; surrounding whitespace is trimmed)
        text: String,
        /// Category: work/personal/shopping/other (optional, default "work")
        category: Option<String>,
        /// Priority: high/medium/low (optional, default "medium")
        priority: Option<String>,
        /// Due date YYYY-MM-DD, ""=none (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_create(text, category, priority, due_date).await
    }

    /// List tasks, optionally filtered by category, priority, due date, or keyword.
    #[tool]
    pub async fn list(
        &self,
        /// Category filter: work/personal/shopping/other (optional)
        category: Option<String>,
        /// Priority filter: high/medium/low (optional)
        priority: Option<String>,
        /// Only tasks due on or before this date, YYYY-MM-DD (optional)
        due: Option<String>,
        /// Case-insensitive search in task text (optional)
        keyword: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(category, priority, due, keyword).await
    }

    /// Replace a task's text, category, priority, and due date.
    /// The id and creation time never change.
    #[tool]
    pub async fn update(
        &self,
        /// Id of the task to update
        id: u64,
        /// New task text (must not be blank)
        text: String,
        /// New category: work/personal/shopping/other
        category: String,
        /// New priority: high/medium/low
        priority: String,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_update(id, text, category, priority, due_date).await
    }

    /// Delete a task by id. Removing an id that does not exist is not an error.
    #[tool]
    pub async fn remove(
        &self,
        /// Id of the task to remove
        id: u64,
    ) -> McpResult<String> {
        self.handle_remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
        (handler, temp_file)
    }

    #[test]
    fn test_custom_file_path() {
        let temp_file = NamedTempFile::new().unwrap();
        let custom_path = temp_file.path().to_str().unwrap();

        let handler = TodoServerHandler::new(custom_path).unwrap();
        assert_eq!(handler.storage.file_path().to_str().unwrap(), custom_path);

        let mut data = handler.data.lock().unwrap();
        data.create("Test Task", Category::work, Priority::medium, None);
        drop(data);

        let save_result = handler.save_data();
        assert!(save_result.is_ok());
        assert!(std::path::Path::new(custom_path).exists());

        // A fresh handler sees the saved task
        let handler2 = TodoServerHandler::new(custom_path).unwrap();
        let loaded = handler2.data.lock().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.find(1).unwrap().text, "Test Task");
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let (handler, _temp_file) = get_test_handler();

        handler
            .create("Buy milk".to_string(), None, None, None)
            .await
            .unwrap();
        let created_at = handler.data.lock().unwrap().find(1).unwrap().created_at;

        handler
            .update(
                1,
                "Buy oat milk".to_string(),
                "shopping".to_string(),
                "high".to_string(),
                None,
            )
            .await
            .unwrap();

        let data = handler.data.lock().unwrap();
        let task = data.find(1).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.text, "Buy oat milk");
    }

    #[tokio::test]
    async fn test_id_sequence_continues_across_sessions() {
        let (handler, temp_file) = get_test_handler();
        handler.create("one".to_string(), None, None, None).await.unwrap();
        handler.create("two".to_string(), None, None, None).await.unwrap();
        drop(handler);

        let handler2 = TodoServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
        let response = handler2
            .create("three".to_string(), None, None, None)
            .await
            .unwrap();
        assert!(response.contains("ID: 3"));
    }

    #[tokio::test]
    async fn test_collection_and_file_agree_after_each_mutation() {
        let (handler, temp_file) = get_test_handler();
        let path = temp_file.path().to_str().unwrap().to_string();

        let reload = |expected_len: usize| {
            let on_disk = Storage::new(&path).load().unwrap();
            assert_eq!(on_disk.len(), expected_len);
            on_disk
        };

        handler.create("task".to_string(), None, None, None).await.unwrap();
        reload(1);

        handler
            .update(1, "edited".to_string(), "work".to_string(), "low".to_string(), None)
            .await
            .unwrap();
        assert_eq!(reload(1).find(1).unwrap().text, "edited");

        handler.remove(1).await.unwrap();
        reload(0);
    }

    #[test]
    fn test_corrupted_data_file_starts_empty() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not a task array").unwrap();

        let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
        assert!(handler.data.lock().unwrap().is_empty());
    }
}
