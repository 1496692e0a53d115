//! Builder pattern implementations for easy test data construction

use chrono::{DateTime, Utc};
use todo_core::Todo;

/// Builder for constructing Todo instances in tests
pub struct TodoBuilder {
    todo: Todo,
}

impl Default for TodoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            todo: Todo {
                id: 1,
                title: "Test todo".to_string(),
                description: None,
                completed: false,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Set todo ID
    pub fn with_id(mut self, id: i32) -> Self {
        self.todo.id = id;
        self
    }

    /// Set todo title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.todo.title = title.into();
        self
    }

    /// Set todo description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.todo.description = Some(description.into());
        self
    }

    /// Set completion flag
    pub fn completed(mut self, completed: bool) -> Self {
        self.todo.completed = completed;
        self
    }

    /// Set creation timestamp (updated_at follows unless set separately)
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.todo.created_at = at;
        if self.todo.updated_at < at {
            self.todo.updated_at = at;
        }
        self
    }

    /// Set last-mutation timestamp
    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.todo.updated_at = at;
        self
    }

    /// Build the Todo
    pub fn build(self) -> Todo {
        self.todo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_builder_defaults() {
        let todo = TodoBuilder::new().build();
        assert_eq!(todo.id, 1);
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_builder_keeps_updated_at_after_created_at() {
        let past = Utc::now() - Duration::days(1);
        let todo = TodoBuilder::new().created_at(Utc::now()).updated_at(Utc::now()).build();
        assert!(todo.updated_at >= todo.created_at);

        let todo = TodoBuilder::new().created_at(past).build();
        assert!(todo.updated_at >= todo.created_at);
    }

    #[test]
    fn test_builder_custom_fields() {
        let todo = TodoBuilder::new()
            .with_id(9)
            .with_title("Buy milk")
            .with_description("2 liters")
            .completed(true)
            .build();

        assert_eq!(todo.id, 9);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description.as_deref(), Some("2 liters"));
        assert!(todo.completed);
    }
}
