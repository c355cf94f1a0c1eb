//! Errors raised by the session and one-shot entry points.
//!
//! Every variant reaches JavaScript as a plain string via [`to_js_error`].

use part_design::DesignError;
use part_mesh::MeshError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Design(#[from] DesignError),

    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid overlay mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Converts a Rust error into a JavaScript error value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
