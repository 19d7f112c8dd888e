//! Create handler for the todo MCP server

use crate::TodoServerHandler;
use crate::tasks::{Category, Priority};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// **Capture**: append a new task to the end of the list.
    /// Omitted category defaults to "work", omitted priority to "medium".
    pub async fn handle_create(
        &self,
        text: String,
        category: Option<String>,
        priority: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let category = match category {
            Some(ref s) => validation::parse_category(s)?,
            None => Category::default(),
        };
        let priority = match priority {
            Some(ref s) => validation::parse_priority(s)?,
            None => Priority::default(),
        };
        let due_date = validation::parse_optional_due_date(due_date.as_deref())?;

        let mut data = self.data.lock().unwrap();
        let created = data.create(&text, category, priority, due_date).map(|task| task.id);
        let id = match created {
            Some(id) => id,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Task text cannot be empty or whitespace-only. Provide a non-blank title."
                );
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task created with ID: {}", id))
    }
}
