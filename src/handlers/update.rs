//! Update handler for the todo MCP server

use crate::TodoServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// **Edit**: replace a task's text, category, priority, and due date.
    /// The task keeps its id, creation time, and position in the list.
    pub async fn handle_update(
        &self,
        id: u64,
        text: String,
        category: String,
        priority: String,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let category = validation::parse_category(&category)?;
        let priority = validation::parse_priority(&priority)?;
        let due_date = validation::parse_optional_due_date(due_date.as_deref())?;

        if text.trim().is_empty() {
            bail_public!(
                _,
                "Task text cannot be empty or whitespace-only. The update was not applied."
            );
        }

        let mut data = self.data.lock().unwrap();
        if !data.contains(id) {
            drop(data);

            // An unknown id is not an error; the unchanged collection is
            // still written through.
            if let Err(e) = self.save_data() {
                bail_public!(_, "Failed to save: {}", e);
            }
            return Ok(format!("Task {} not found; nothing to update", id));
        }

        if data.update(id, &text, category, priority, due_date).is_none() {
            drop(data);
            bail_public!(_, "Failed to update task {}", id);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task {} updated successfully", id))
    }
}
