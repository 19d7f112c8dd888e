//! Validation helper functions for the todo MCP server
//!
//! This module contains parsing and validation logic for the category,
//! priority, and due-date parameters arriving at the tool boundary.

use crate::tasks::{Category, Priority};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Parse and validate a category parameter
///
/// # Arguments
/// * `category_str` - Category string to parse
///
/// # Returns
/// Result containing the parsed Category or an error
pub fn parse_category(category_str: &str) -> McpResult<Category> {
    category_str.parse::<Category>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid category '{}'. Valid categories: work, personal, shopping, other",
                category_str
            ),
            true,
        )
    })
}

/// Parse and validate a priority parameter
///
/// # Arguments
/// * `priority_str` - Priority string to parse
///
/// # Returns
/// Result containing the parsed Priority or an error
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.parse::<Priority>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid priority '{}'. Valid priorities: high, medium, low",
                priority_str
            ),
            true,
        )
    })
}

/// Parse and validate a due-date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing the parsed NaiveDate or an error
pub fn parse_due_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2024-01-15')",
                date_str
            ),
            true,
        )
    })
}

/// Parse an optional due-date parameter
///
/// Both an omitted parameter and an empty string mean "no due date"; the
/// empty string is how callers clear an existing date.
pub fn parse_optional_due_date(date_str: Option<&str>) -> McpResult<Option<NaiveDate>> {
    match date_str {
        None | Some("") => Ok(None),
        Some(s) => parse_due_date(s).map(Some),
    }
}
