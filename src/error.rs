//! Loader errors.
//!
//! The layout core never fails; the only rejection happens while turning
//! raw text into an [`Application`](crate::document::Application).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("top-level document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot serialize diagram: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure of the text-in, text-out pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
