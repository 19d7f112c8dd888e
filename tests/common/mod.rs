//! Common test utilities for integration tests

use tempfile::NamedTempFile;
use todo_mcp::TodoServerHandler;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap()).unwrap();
    (handler, temp_file)
}

/// Extract the task id from a create() response message
/// Response format: "Task created with ID: <id>"
pub fn extract_id_from_response(response: &str) -> u64 {
    response
        .rsplit("ID: ")
        .next()
        .unwrap_or("")
        .trim()
        .parse()
        .expect("response should end with a numeric task id")
}
