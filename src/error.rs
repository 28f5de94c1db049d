//! Error types for loading and laying out the sales dataset.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type alias for treemap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating, or laying out the dataset.
#[derive(Debug, Error)]
pub enum Error {
	/// No `window` object (not running in a browser).
	#[error("browser window is not available")]
	NoWindow,

	/// The fetch promise rejected or the response body could not be read.
	#[error("request to {url} failed: {message}")]
	Fetch { url: String, message: String },

	/// The server answered with a non-success status.
	#[error("request to {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	/// The document is not valid JSON or does not match the expected shape.
	#[error("failed to parse sales data: {0}")]
	Parse(#[from] serde_json::Error),

	/// A leaf record carries no `value`.
	#[error("leaf {id} has no value")]
	MissingValue { id: String },

	/// A leaf `value` is negative, not finite, or not numeric.
	#[error("leaf {id} has invalid value {value:?}")]
	InvalidValue { id: String, value: String },

	/// A leaf record carries no `category`.
	#[error("leaf {id} has no category")]
	MissingCategory { id: String },

	/// The dataset has no leaves to draw.
	#[error("dataset {root} contains no records")]
	Empty { root: String },
}

impl Error {
	/// Build a [`Error::Fetch`] from a rejected JS promise value.
	pub fn fetch(url: &str, err: JsValue) -> Self {
		let message = err
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| err.as_string())
			.unwrap_or_else(|| format!("{err:?}"));
		Error::Fetch {
			url: url.to_string(),
			message,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_leaf() {
		let err = Error::MissingValue {
			id: "root.Wii.Wii Sports".into(),
		};
		assert_eq!(err.to_string(), "leaf root.Wii.Wii Sports has no value");

		let err = Error::Status {
			url: "https://example.test/data.json".into(),
			status: 404,
		};
		assert_eq!(
			err.to_string(),
			"request to https://example.test/data.json returned HTTP 404"
		);
	}

	#[test]
	fn parse_errors_convert() {
		let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: Error = parse.into();
		assert!(matches!(err, Error::Parse(_)));
	}
}
