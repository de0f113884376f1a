//! Mount/host errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// The canvas refused a 2D context; callers degrade to the static fallback
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl BackgroundError {
    /// Whether the page should fall back to the static background
    pub fn is_degradable(&self) -> bool {
        matches!(self, BackgroundError::ContextUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BackgroundError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BackgroundError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<BackgroundError> for wasm_bindgen::JsValue {
    fn from(err: BackgroundError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
