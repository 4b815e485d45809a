//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` keeps records in a `Vec` in insertion order and hands out ids
//! from a counter that only moves forward, so a deleted id is never reused.
//! Lookups are a first-match linear scan; ids are unique, so at most one
//! record can match.
//!
//! The store itself is not synchronized. Handlers share it as
//! [`SharedStore`] and take the lock once per operation, which keeps the
//! counter and the list consistent under concurrent requests.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{NewTodo, Todo};

pub type SharedStore = Arc<RwLock<TodoStore>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(u64),
}

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap a fresh store for sharing between handlers.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn create(&mut self, input: NewTodo) -> Todo {
        let todo = input.into_todo(self.next_id);
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get(&self, id: u64) -> Result<Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace `name` and `email` of the record with `id`. The id itself is
    /// always kept.
    pub fn update(&mut self, id: u64, input: NewTodo) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        let todo = input.into_todo(id);
        self.todos[index] = todo.clone();
        Ok(todo)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.todos.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
