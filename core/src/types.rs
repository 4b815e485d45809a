//! Client-side DTOs for the todo API.

use serde::{Deserialize, Serialize};

/// A todo as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Body for create and update. The server assigns or keeps the id, so it
/// is never sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub name: String,
    pub email: String,
}

impl TodoInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
