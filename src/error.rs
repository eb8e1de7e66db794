//! Application Errors
//!
//! Nothing here reaches the user: callers log the error and fall back.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("content fixture {name} is invalid: {source}")]
    Content {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
