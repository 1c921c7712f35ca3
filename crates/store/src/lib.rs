//! File-backed record storage for the planner registries.
//!
//! A [`RecordStore`] owns an ordered, in-memory sequence of records of one
//! entity kind, mirrored to a single pretty-printed JSON file. One store is
//! one file is one entity kind. The registries compose a store each and
//! follow the same discipline: load on construction, append or edit in
//! memory, then persist the whole snapshot.
//!
//! # Failure model
//!
//! Opening a store never fails: a missing, unreadable, or corrupt backing
//! file is logged and the store starts empty, so bad data on disk cannot
//! keep the application from launching. Saving replaces the file atomically
//! (temp file in the same directory, then rename) and returns an error on
//! failure — the previous snapshot is never left half-written.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::{Result, StoreError};

/// Ordered collection of records mirrored to one JSON file.
///
/// Insertion order is the display order and survives save/load cycles.
pub struct RecordStore<T> {
	path: PathBuf,
	records: Vec<T>,
}

impl<T: Serialize + DeserializeOwned> RecordStore<T> {
	/// Opens the store backed by `path`, creating the parent directory if
	/// needed and loading any existing records.
	///
	/// Load failures are logged and leave the store empty; they are never
	/// surfaced to the caller.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let records = match load_records(&path) {
			Ok(records) => records,
			Err(e) => {
				tracing::warn!("failed to load {}: {e}; starting empty", path.display());
				Vec::new()
			}
		};
		Self { path, records }
	}

	/// Path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Stable, ordered, read-only view of all records.
	pub fn records(&self) -> &[T] {
		&self.records
	}

	/// Number of records currently held.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether the store holds no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Appends a record. The caller is responsible for the follow-up
	/// [`save`](Self::save).
	pub fn push(&mut self, record: T) {
		self.records.push(record);
	}

	/// Mutable iteration over records, in insertion order.
	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
		self.records.iter_mut()
	}

	/// Persists the full in-memory sequence, replacing the backing file.
	///
	/// The snapshot is written to a temporary file in the same directory
	/// and renamed into place, so a failed save leaves the previous file
	/// untouched.
	pub fn save(&self) -> Result<()> {
		let json = serde_json::to_string_pretty(&self.records)?;
		let tmp = self.path.with_extension("tmp");
		fs::write(&tmp, &json).map_err(|error| StoreError::Io {
			path: tmp.clone(),
			error,
		})?;
		fs::rename(&tmp, &self.path).map_err(|error| StoreError::Io {
			path: self.path.clone(),
			error,
		})
	}

	/// Returns every record whose flattened JSON text contains `term`,
	/// case-insensitively, in insertion order.
	///
	/// An empty term returns the full sequence unchanged.
	pub fn search(&self, term: &str) -> Vec<&T> {
		if term.is_empty() {
			return self.records.iter().collect();
		}
		let needle = term.to_lowercase();
		self.records
			.iter()
			.filter(|record| match serde_json::to_string(record) {
				Ok(flat) => flat.to_lowercase().contains(&needle),
				Err(_) => false,
			})
			.collect()
	}
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).map_err(|error| StoreError::Io {
			path: parent.to_path_buf(),
			error,
		})?;
	}
	if !path.exists() {
		return Ok(Vec::new());
	}
	let text = fs::read_to_string(path).map_err(|error| StoreError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	Ok(serde_json::from_str(&text)?)
}
