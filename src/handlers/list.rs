//! List handler for the todo MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles list/filter operations - applies filters and formats results
    /// for display. Read-only; never writes the data file.
    pub async fn handle_list(
        &self,
        category: Option<String>,
        priority: Option<String>,
        due: Option<String>,
        keyword: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate the category filter
        let category_filter = if let Some(ref category_str) = category {
            Some(validation::parse_category(category_str)?)
        } else {
            None
        };

        // Parse and validate the priority filter
        let priority_filter = if let Some(ref priority_str) = priority {
            Some(validation::parse_priority(priority_str)?)
        } else {
            None
        };

        // Parse and validate the due-date filter
        let due_filter = if let Some(ref date_str) = due {
            Some(validation::parse_due_date(date_str)?)
        } else {
            None
        };

        // Get the initial list of tasks filtered by category
        let data = self.data.lock().unwrap();
        let mut tasks = data.list_all(category_filter);
        drop(data);

        // Apply additional filters in sequence
        if let Some(priority) = priority_filter {
            formatting::apply_priority_filter(&mut tasks, priority);
        }

        if let Some(filter_date) = due_filter {
            formatting::apply_due_date_filter(&mut tasks, filter_date);
        }

        if let Some(ref keyword_filter) = keyword {
            formatting::apply_keyword_filter(&mut tasks, keyword_filter);
        }

        // Format and return results
        Ok(formatting::format_tasks(tasks))
    }
}
