use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure to attach behaviour to the rendered page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("required element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Reasons a contact form submission is rejected. The display text is shown
/// to the visitor as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
