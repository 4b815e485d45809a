//! Request validation.
//!
//! Bodies arrive as untyped JSON and are checked here before anything
//! touches the store. Validation collects every problem instead of stopping
//! at the first one, and reports them as [`FieldError`]s that the error
//! layer renders as a 422 response.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::model::NewTodo;

/// A single problem with one input location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: &[&str], kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn json_invalid(detail: impl std::fmt::Display) -> Self {
        Self::new(&["body"], "json_invalid", format!("JSON decode error: {detail}"))
    }
}

/// Check a create/update body and extract its fields.
pub fn validate(body: Value) -> Result<NewTodo, Vec<FieldError>> {
    let Value::Object(mut fields) = body else {
        return Err(vec![FieldError::new(
            &["body"],
            "model_type",
            "Input should be a valid object",
        )]);
    };

    // `id` is never read: create assigns one and update uses the path id.
    let mut errors = Vec::new();
    let name = take_string(&mut fields, "name", &mut errors);
    if matches!(&name, Some(n) if n.is_empty()) {
        errors.push(FieldError::new(
            &["body", "name"],
            "string_too_short",
            "String should have at least 1 character",
        ));
    }
    let email = take_string(&mut fields, "email", &mut errors);

    match (name, email) {
        (Some(name), Some(email)) if errors.is_empty() => Ok(NewTodo { name, email }),
        _ => Err(errors),
    }
}

/// Parse the `{todo_id}` path segment.
///
/// Any integer is a well-formed id. One outside `u64` (negative, or too
/// large) cannot belong to a stored todo and yields `NotFound`; only
/// non-integer text is an input error.
pub fn parse_todo_id(raw: &str) -> Result<u64, ApiError> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<u64>() {
        return Ok(id);
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::InvalidInput(vec![FieldError::new(
        &["path", "todo_id"],
        "int_parsing",
        "Input should be a valid integer, unable to parse string as an integer",
    )]))
}

fn take_string(
    fields: &mut Map<String, Value>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(
                &["body", key],
                "string_type",
                "Input should be a valid string",
            ));
            None
        }
        None => {
            errors.push(FieldError::new(&["body", key], "missing", "Field required"));
            None
        }
    }
}
