//! The in-memory todo collection.
//!
//! # Design
//! One `Mutex` guards both the ordered `Vec<Todo>` and the id counter, so
//! every operation sees and leaves a consistent pair. The guard is held for
//! the whole operation and dropped on every return path. Nothing under the
//! lock awaits I/O; lookups are a linear scan in insertion order.

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::model::{Todo, TodoInput};

#[derive(Debug)]
struct Collection {
    todos: Vec<Todo>,
    /// Always greater than every id handed out so far.
    next_id: i64,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl Collection {
    fn position(&self, id: i64) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

#[derive(Debug, Default)]
pub struct TodoStore {
    inner: Mutex<Collection>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.inner.lock().await.todos.clone()
    }

    pub async fn create(&self, input: TodoInput) -> Todo {
        let mut collection = self.inner.lock().await;
        let id = collection.next_id;
        collection.next_id += 1;

        let todo = Todo::new(id, input, Utc::now());
        collection.todos.push(todo.clone());
        tracing::debug!(id, "todo created");
        todo
    }

    /// Locate `id`, then build the replacement fields with `input`.
    ///
    /// A missing record wins over a bad payload: `input` is only evaluated
    /// once the target exists.
    pub async fn update<F>(&self, id: i64, input: F) -> Result<Todo, ApiError>
    where
        F: FnOnce() -> Result<TodoInput, ApiError>,
    {
        let mut collection = self.inner.lock().await;
        let index = collection.position(id).ok_or(ApiError::NotFound)?;
        let input = input()?;

        let todo = &mut collection.todos[index];
        todo.apply(input, Utc::now());
        tracing::debug!(id, "todo updated");
        Ok(todo.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<Todo, ApiError> {
        let mut collection = self.inner.lock().await;
        let index = collection.position(id).ok_or(ApiError::NotFound)?;
        let removed = collection.todos.remove(index);
        tracing::debug!(id, "todo deleted");
        Ok(removed)
    }
}
