use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item, the sole resource managed by this API.
///
/// Records are created through the HTTP create operation; the store assigns
/// the `id` and both timestamps. Every successful mutation refreshes
/// `updated_at` and never touches `id` or `created_at`, so
/// `updated_at >= created_at` holds for the whole lifetime of a record.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Todo;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let todo = Todo {
///     id: 1,
///     title: "Buy milk".to_string(),
///     description: None,
///     completed: false,
///     created_at: now,
///     updated_at: now,
/// };
///
/// assert!(todo.updated_at >= todo.created_at);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Auto-increment primary key, never reused after deletion
    pub id: i32,
    /// Task title, always non-empty after trimming
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp, refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

/// Sanitized field set for creating a todo.
///
/// Produced by full-mode validation; `title` is already trimmed and
/// guaranteed non-empty, `completed` carries its default when the payload
/// omitted it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTodo {
    /// Trimmed, non-empty title
    pub title: String,
    /// Optional description; absent and JSON null both map to `None`
    pub description: Option<String>,
    /// Completion flag, `false` unless the payload said otherwise
    pub completed: bool,
}

impl NewTodo {
    /// Create a NewTodo with just a title, the common case in tests
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }
}

/// Sanitized field set for partially updating a todo.
///
/// Produced by partial-mode validation. Every field is optional; `None`
/// means "leave unchanged". `description` is doubly optional so a JSON null
/// (clear the description, `Some(None)`) stays distinct from an absent
/// field (`None`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TodoPatch {
    /// Optional new title, trimmed and non-empty when present
    pub title: Option<String>,
    /// Optional description change; `Some(None)` clears it
    pub description: Option<Option<String>>,
    /// Optional completion flag change
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// True when the patch carries no field changes
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_todo() -> Todo {
        let now = Utc::now();
        Todo {
            id: 7,
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_todo_serde_round_trip() {
        let todo = sample_todo();
        let json = serde_json::to_string(&todo).unwrap();
        let parsed: Todo = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, todo.id);
        assert_eq!(parsed.title, todo.title);
        assert_eq!(parsed.description, todo.description);
        assert_eq!(parsed.completed, todo.completed);
    }

    #[test]
    fn test_todo_timestamps_serialize_as_iso8601() {
        let todo = sample_todo();
        let value = serde_json::to_value(&todo).unwrap();

        let created_at = value["created_at"].as_str().unwrap();
        assert!(created_at.contains('T'));
        assert!(created_at.parse::<DateTime<Utc>>().is_ok());
    }

    #[test]
    fn test_new_todo_with_title() {
        let new_todo = NewTodo::with_title("Buy milk");
        assert_eq!(new_todo.title, "Buy milk");
        assert!(new_todo.description.is_none());
        assert!(!new_todo.completed);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TodoPatch::default().is_empty());

        let patch = TodoPatch {
            description: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
