use crate::tasks::task::{Category, Priority, Task, utc_now};
use chrono::NaiveDate;
use std::collections::HashSet;

/// The ordered collection of tasks
///
/// The public mutators uphold two invariants: task ids are unique within
/// the collection, and task text is never empty or surrounded by
/// whitespace.
#[derive(Debug)]
pub struct TaskList {
    /// All tasks in insertion order
    ///
    /// Vec is the primary storage: insertion order is both the display
    /// order and the order of records in the persisted JSON array.
    pub(crate) tasks: Vec<Task>,

    /// Ids of all tasks in `tasks`, for O(1) duplicate detection
    ///
    /// Kept in sync with the Vec by every mutating operation. Not
    /// persisted; rebuilt from the array during deserialization.
    pub(crate) id_index: HashSet<u64>,

    /// Highest id handed out so far
    ///
    /// Not persisted; resumes from the maximum stored id on load, so ids
    /// never regress or collide across sessions.
    pub(crate) id_counter: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            id_index: HashSet::new(),
            id_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty TaskList instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task id
    fn allocate_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Number of tasks in the collection
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check whether a task with the given id exists
    pub fn contains(&self, id: u64) -> bool {
        self.id_index.contains(&id)
    }

    /// Find a task by its id
    ///
    /// # Arguments
    /// * `id` - The task id to search for
    ///
    /// # Returns
    /// An optional reference to the task if found
    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task to the end of the collection
    ///
    /// The text is trimmed of surrounding whitespace before storage. The
    /// new task gets the next counter id and the current UTC instant as
    /// its creation time.
    ///
    /// # Arguments
    /// * `text` - Task title; blank input leaves the collection unchanged
    /// * `category` - Category for the new task
    /// * `priority` - Priority for the new task
    /// * `due_date` - Optional due date
    ///
    /// # Returns
    /// A reference to the created task, or `None` when `text` trims to empty
    pub fn create(
        &mut self,
        text: &str,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.allocate_id();
        let task = Task {
            id,
            text: text.to_string(),
            category,
            priority,
            due_date,
            created_at: utc_now(),
        };

        self.id_index.insert(id);
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Remove a task from the collection and return it
    ///
    /// The relative order of the remaining tasks is preserved. Removing an
    /// id that does not exist is a no-op.
    ///
    /// # Arguments
    /// * `id` - The task id to remove
    ///
    /// # Returns
    /// The removed task if found
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        self.id_index.remove(&id);
        Some(task)
    }

    /// Replace a task's fields in place
    ///
    /// The task keeps its id, creation time, and position in the list.
    /// Blank text rejects the entire update, leaving the task unmodified.
    ///
    /// # Arguments
    /// * `id` - The task id to update
    /// * `text` - New title; trimmed before storage
    /// * `category` - New category
    /// * `priority` - New priority
    /// * `due_date` - New due date, `None` to clear
    ///
    /// # Returns
    /// A reference to the updated task, or `None` when the id is unknown
    /// or the text trims to empty
    pub fn update(
        &mut self,
        id: u64,
        text: &str,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.text = text.to_string();
        task.category = category;
        task.priority = priority;
        task.due_date = due_date;
        Some(task)
    }

    /// List all tasks with optional category filter
    ///
    /// # Arguments
    /// * `category_filter` - Optional category to filter by
    ///
    /// # Returns
    /// Vector of Task clones matching the filter, in insertion order
    pub fn list_all(&self, category_filter: Option<Category>) -> Vec<Task> {
        if let Some(category) = category_filter {
            self.tasks
                .iter()
                .filter(|t| t.category == category)
                .cloned()
                .collect()
        } else {
            self.tasks.clone()
        }
    }
}
