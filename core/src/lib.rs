//! Synchronous client core for the todo service.
//!
//! Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
//! touching the network. The caller runs the actual round-trip, so
//! everything in this crate is deterministic and testable without a server.
//!
//! Types here are defined independently of the server crate; the
//! integration test against a live server catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Todo, TodoInput};
