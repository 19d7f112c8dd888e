//! Formatting helper functions for the todo MCP server
//!
//! This module contains filtering logic and display formatting for task
//! listings.

use crate::tasks::{Priority, Task};
use chrono::NaiveDate;

/// Apply due-date filtering to tasks
///
/// # Arguments
/// * `tasks` - Mutable vector of tasks to filter
/// * `filter_date` - Date to filter by
///
/// # Description
/// Keeps tasks due on or before the filter date. Tasks without a due date
/// are dropped.
pub fn apply_due_date_filter(tasks: &mut Vec<Task>, filter_date: NaiveDate) {
    tasks.retain(|task| task.due_date.is_some_and(|due| due <= filter_date));
}

/// Apply priority filtering
///
/// # Arguments
/// * `tasks` - Mutable vector of tasks to filter
/// * `priority` - Priority to filter by
pub fn apply_priority_filter(tasks: &mut Vec<Task>, priority: Priority) {
    tasks.retain(|task| task.priority == priority);
}

/// Apply keyword filtering (case-insensitive search in task text)
///
/// # Arguments
/// * `tasks` - Mutable vector of tasks to filter
/// * `keyword` - Keyword to search for (case-insensitive)
pub fn apply_keyword_filter(tasks: &mut Vec<Task>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    tasks.retain(|task| task.text.to_lowercase().contains(&keyword_lower));
}

/// Format tasks into a display string
///
/// # Arguments
/// * `tasks` - Vector of tasks to format
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: Vec<Task>) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (category: {:?}, priority: {:?})\n",
            task.id, task.text, task.category, task.priority
        ));

        if let Some(ref due) = task.due_date {
            result.push_str(&format!("  Due: {}\n", due));
        }
        result.push_str(&format!("  Created: {}\n", task.created_at));
    }

    result
}
