//! Mock implementation of the TodoRepository trait
//!
//! Provides a thread-safe in-memory repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - The same observable semantics as the SQLite implementation

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};
use todo_core::{NewTodo, Result, Todo, TodoError, TodoPatch, TodoRepository};

/// Mock implementation of TodoRepository for testing
///
/// Ids are assigned from an atomic counter that never goes backwards, so
/// deleted ids are not reused, matching the store invariant.
pub struct MockTodoRepository {
    todos: Arc<Mutex<BTreeMap<i32, Todo>>>,
    next_id: Arc<AtomicI32>,
    error_injection: Arc<Mutex<Option<TodoError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            todos: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock repository with pre-populated todos
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let mut map = BTreeMap::new();
        let mut max_id = 0;

        for todo in todos {
            if todo.id > max_id {
                max_id = todo.id;
            }
            map.insert(todo.id, todo);
        }

        Self {
            todos: Arc::new(Mutex::new(map)),
            next_id: Arc::new(AtomicI32::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject an error returned by every operation until cleared
    pub fn inject_error(&self, error: TodoError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Number of todos currently stored
    pub fn len(&self) -> usize {
        self.todos.lock().len()
    }

    /// True when no todos are stored
    pub fn is_empty(&self) -> bool {
        self.todos.lock().is_empty()
    }

    fn record_call(&self, method: &str) {
        self.call_history.lock().push(method.to_string());
    }

    fn check_injected_error(&self) -> Result<()> {
        match self.error_injection.lock().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        self.record_call("create");
        self.check_injected_error()?;

        let now = Utc::now();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Todo {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: now,
            updated_at: now,
        };

        self.todos.lock().insert(id, created.clone());
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<Todo>> {
        self.record_call("get");
        self.check_injected_error()?;

        Ok(self.todos.lock().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        self.record_call("list");
        self.check_injected_error()?;

        let mut todos: Vec<Todo> = self.todos.lock().values().cloned().collect();
        todos.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(todos)
    }

    async fn update(&self, id: i32, patch: TodoPatch) -> Result<Todo> {
        self.record_call("update");
        self.check_injected_error()?;

        let mut todos = self.todos.lock();
        let todo = todos.get_mut(&id).ok_or_else(|| TodoError::not_found_id(id))?;

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();

        Ok(todo.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.record_call("delete");
        self.check_injected_error()?;

        match self.todos.lock().remove(&id) {
            Some(_) => Ok(()),
            None => Err(TodoError::not_found_id(id)),
        }
    }

    async fn toggle(&self, id: i32) -> Result<Todo> {
        self.record_call("toggle");
        self.check_injected_error()?;

        let mut todos = self.todos.lock();
        let todo = todos.get_mut(&id).ok_or_else(|| TodoError::not_found_id(id))?;

        todo.completed = !todo.completed;
        todo.updated_at = Utc::now();

        Ok(todo.clone())
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");
        self.check_injected_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MockTodoRepository::new();

        let first = repo.create(NewTodo::with_title("first")).await.unwrap();
        let second = repo.create(NewTodo::with_title("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = MockTodoRepository::new();

        let first = repo.create(NewTodo::with_title("first")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(NewTodo::with_title("second")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_error_injection() {
        let repo = MockTodoRepository::new();
        repo.inject_error(TodoError::Database("simulated outage".to_string()));

        assert!(repo.list().await.unwrap_err().is_database());

        repo.clear_error();
        assert!(repo.list().await.is_ok());
    }

    #[tokio::test]
    async fn test_call_history_tracking() {
        let repo = MockTodoRepository::new();

        let todo = repo.create(NewTodo::with_title("tracked")).await.unwrap();
        repo.get(todo.id).await.unwrap();
        repo.delete(todo.id).await.unwrap();

        assert_eq!(repo.call_history(), vec!["create", "get", "delete"]);
    }
}
