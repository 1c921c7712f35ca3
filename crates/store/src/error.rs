//! Error types for store persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when persisting a record store.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error reading or writing the backing file.
	#[error("I/O error accessing {path}: {error}")]
	Io {
		/// Path to the file or directory that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Records could not be serialized or parsed as JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
