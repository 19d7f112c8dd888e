//! Serialization and deserialization implementations for TaskList
//!
//! The persisted form is a bare JSON array of task records. The id index
//! and the id counter are not part of the stored data; both are rebuilt
//! here during deserialization.

use super::task::Task;
use super::task_list::TaskList;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tasks.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tasks = Vec::<Task>::deserialize(deserializer)?;

        // Rebuild the id index; stored data carrying duplicate ids violates
        // the uniqueness invariant and is rejected as malformed.
        let mut id_index = HashSet::with_capacity(tasks.len());
        let mut id_counter = 0;
        for task in &tasks {
            if !id_index.insert(task.id) {
                return Err(D::Error::custom(format!("duplicate task id {}", task.id)));
            }
            id_counter = id_counter.max(task.id);
        }

        Ok(TaskList {
            tasks,
            id_index,
            id_counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Category, Priority};

    fn populate(count: usize) -> TaskList {
        let mut list = TaskList::new();
        for i in 0..count {
            list.create(
                &format!("task {}", i),
                Category::default(),
                Priority::default(),
                None,
            );
        }
        list
    }

    #[test]
    fn test_round_trip_preserves_tasks_and_order() {
        for count in [0, 1, 5] {
            let list = populate(count);
            let json = serde_json::to_string(&list).unwrap();
            let loaded: TaskList = serde_json::from_str(&json).unwrap();

            assert_eq!(loaded.tasks, list.tasks);
        }
    }

    #[test]
    fn test_serialized_form_is_bare_array() {
        let json = serde_json::to_string(&populate(2)).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));

        let empty = serde_json::to_string(&TaskList::new()).unwrap();
        assert_eq!(empty, "[]");
    }

    #[test]
    fn test_id_counter_resumes_from_max_stored_id() {
        let json = r#"[
            {"id": 3, "text": "older", "category": "work", "priority": "medium",
             "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 7, "text": "newer", "category": "work", "priority": "medium",
             "createdAt": "2024-01-02T00:00:00Z"}
        ]"#;

        let mut loaded: TaskList = serde_json::from_str(json).unwrap();
        let task = loaded
            .create("fresh", Category::default(), Priority::default(), None)
            .unwrap();
        assert_eq!(task.id, 8);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "text": "one", "category": "work", "priority": "medium",
             "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 1, "text": "also one", "category": "work", "priority": "medium",
             "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;

        let err = serde_json::from_str::<TaskList>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate task id 1"));
    }

    #[test]
    fn test_id_index_rebuilt_on_deserialize() {
        let list = populate(3);
        let json = serde_json::to_string(&list).unwrap();

        // The index is not part of the serialized form
        assert!(!json.contains("id_index"));
        assert!(!json.contains("id_counter"));

        let loaded: TaskList = serde_json::from_str(&json).unwrap();
        assert!(loaded.contains(1));
        assert!(loaded.contains(3));
        assert!(!loaded.contains(4));
        assert_eq!(loaded.id_index.len(), loaded.tasks.len());
    }
}
