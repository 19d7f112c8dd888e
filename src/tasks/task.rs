use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current instant in UTC
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Task category
///
/// Uses lowercase naming to match the JSON serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    work,
    personal,
    shopping,
    other,
}

impl Default for Category {
    fn default() -> Self {
        Category::work
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Category::work),
            "personal" => Ok(Category::personal),
            "shopping" => Ok(Category::shopping),
            "other" => Ok(Category::other),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: work, personal, shopping, other",
                s
            )),
        }
    }
}

/// Task priority
///
/// Uses lowercase naming to match the JSON serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    high,
    medium,
    low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::medium
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::high),
            "medium" => Ok(Priority::medium),
            "low" => Ok(Priority::low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            )),
        }
    }
}

/// A single task in the list
///
/// Field names are serialized in camelCase to keep the stable schema of the
/// persisted JSON records (`dueDate`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned from the list's counter at creation
    pub id: u64,
    /// User-supplied title, trimmed of surrounding whitespace
    pub text: String,
    /// Category (work, personal, shopping, other)
    #[serde(default)]
    pub category: Category,
    /// Priority (high, medium, low)
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date (format: YYYY-MM-DD); stored data may carry "" for none
    #[serde(default, skip_serializing_if = "Option::is_none", with = "due_date_serde")]
    pub due_date: Option<NaiveDate>,
    /// Instant the task was created; never changes after creation
    pub created_at: DateTime<Utc>,
}

/// Serde adapter for the `dueDate` field
///
/// The on-disk value is a `YYYY-MM-DD` string. Absent fields and empty
/// strings (which older data files contain for dateless tasks) both
/// deserialize to `None`.
mod due_date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
