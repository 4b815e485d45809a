//! Wire and domain types for the todo service.
//!
//! `Todo` is what the store owns and what every successful response
//! carries. `NewTodo` is the only input the store accepts; it can only be
//! produced by `validation::validate`, so the store never sees a missing
//! or mistyped field.

use serde::{Deserialize, Serialize};

/// A stored todo. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Validated field values for a create or update. Built from the request
/// body by `validation::validate`; any `id` in the body is dropped there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub email: String,
}

impl NewTodo {
    pub(crate) fn into_todo(self, id: u64) -> Todo {
        Todo {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            message: "Welcome to the Todos API".to_string(),
        }
    }
}
