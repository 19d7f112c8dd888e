//! Task domain model
//!
//! This module contains the core task data structures and their
//! implementations. It is split into submodules for better organization:
//! - `task`: the Task record with its category and priority enums
//! - `task_list`: the ordered collection with all mutation rules
//! - `serde_impl`: serialization/deserialization implementations

mod serde_impl;
mod task;
mod task_list;

// Re-export all public types
pub use task::{Category, Priority, Task, utc_now};
pub use task_list::TaskList;
