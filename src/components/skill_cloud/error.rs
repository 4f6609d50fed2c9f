//! Errors raised while wiring the cloud into the page.
//!
//! None of these are fatal: the component logs them and falls back to the
//! empty placeholder.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudError {
	/// A required DOM node is absent.
	#[error("element #{0} not found")]
	MissingElement(&'static str),

	/// The cloud data JSON did not parse.
	#[error("invalid cloud data: {0}")]
	InvalidData(#[source] serde_json::Error),

	/// The config override JSON did not parse.
	#[error("invalid cloud config: {0}")]
	InvalidConfig(#[source] serde_json::Error),

	/// The canvas or its 2d context failed.
	#[error("canvas unavailable: {0}")]
	Canvas(String),
}

impl From<wasm_bindgen::JsValue> for CloudError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		CloudError::Canvas(format!("{value:?}"))
	}
}

/// Result with [`CloudError`].
pub type Result<T> = std::result::Result<T, CloudError>;
