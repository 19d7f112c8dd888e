//! Remove handler for the todo MCP server

use crate::TodoServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// **Discard**: delete a task by id. Safe to repeat; removing an id
    /// that does not exist leaves the list unchanged.
    pub async fn handle_remove(&self, id: u64) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        let removed = data.remove(id);
        drop(data);

        // The collection is written through even when nothing matched.
        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(match removed {
            Some(task) => format!("Task {} removed: {}", id, task.text),
            None => format!("Task {} not found; nothing to remove", id),
        })
    }
}
