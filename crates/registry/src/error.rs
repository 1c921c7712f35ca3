//! Error types shared by the registries.

use thiserror::Error;

use soiree_store::StoreError;

/// Errors that can occur when mutating a registry.
///
/// Not-found outcomes (updating the RSVP of an unknown email, completing an
/// unknown task id) are `Ok(false)` results, not errors.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Malformed or missing required input. The message is shown to the
	/// user verbatim.
	#[error("{0}")]
	Validation(String),

	/// A guest with the same email already exists.
	#[error("guest with email {email} already exists")]
	Duplicate {
		/// The normalized (lower-cased) email that collided.
		email: String,
	},

	/// The mutation was applied in memory but could not be persisted. The
	/// on-disk file still holds the previous snapshot.
	#[error("failed to persist changes: {0}")]
	Persistence(#[from] StoreError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
