//! Error Types

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No receipt image selected")]
    NoFile,

    #[error("Browser window is not available")]
    NoWindow,

    #[error("Request failed: {0}")]
    Js(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is not JSON: {0}")]
    Response(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for SubmitError {
    fn from(value: JsValue) -> Self {
        SubmitError::Js(js_message(&value))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Page data element #{0} not found")]
    Missing(String),

    #[error("Invalid page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Best-effort text of a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
