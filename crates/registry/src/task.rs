//! Task list with completion tracking.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use soiree_store::RecordStore;

use crate::error::{RegistryError, Result};

/// Default backing file for the task list.
pub const TASKS_FILE: &str = "data/tasks.json";

/// Priority assigned when the caller does not supply one.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// One planning task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
	/// Registry-assigned id, stable for the life of the file.
	pub id: u64,
	/// What needs doing; trimmed, never empty.
	pub description: String,
	/// Free-form priority label.
	pub priority: String,
	/// Optional free-form due date.
	#[serde(default)]
	pub due_date: Option<String>,
	/// Whether the task is done.
	#[serde(default)]
	pub completed: bool,
	/// When the task was added; immutable.
	pub created_at: DateTime<Local>,
	/// Stamped each time the task is marked complete.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub completed_at: Option<DateTime<Local>>,
}

/// Completion counts across the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
	/// All tasks.
	pub total: usize,
	/// Tasks marked complete.
	pub completed: usize,
	/// `total - completed`.
	pub pending: usize,
}

/// Manages the task list atop a [`RecordStore`].
///
/// Ids come from a monotonic counter seeded as `max(existing id) + 1` at
/// load time, so removing or reordering records on disk can never make a
/// new task collide with an old id.
pub struct TaskRegistry {
	store: RecordStore<Task>,
	next_id: u64,
}

impl TaskRegistry {
	/// Opens the registry at its default path.
	pub fn open() -> Self {
		Self::open_at(TASKS_FILE)
	}

	/// Opens the registry backed by an explicit file.
	pub fn open_at(path: impl Into<PathBuf>) -> Self {
		let store: RecordStore<Task> = RecordStore::open(path);
		let next_id = store.records().iter().map(|task| task.id).max().unwrap_or(0) + 1;
		Self { store, next_id }
	}

	/// Adds a task and returns its assigned id.
	///
	/// `priority` falls back to [`DEFAULT_PRIORITY`] when `None`; an empty
	/// trimmed description is rejected.
	pub fn add(
		&mut self,
		description: &str,
		priority: Option<&str>,
		due_date: Option<&str>,
	) -> Result<u64> {
		let description = description.trim();
		if description.is_empty() {
			return Err(RegistryError::Validation(
				"task description is required".to_string(),
			));
		}

		let id = self.next_id;
		tracing::debug!(id, "adding task");
		self.store.push(Task {
			id,
			description: description.to_string(),
			priority: priority.unwrap_or(DEFAULT_PRIORITY).to_string(),
			due_date: due_date.map(str::to_string),
			completed: false,
			created_at: Local::now(),
			completed_at: None,
		});
		// Consume the id before attempting the save: a failed persist keeps
		// the record in memory, so the id is spent either way.
		self.next_id += 1;
		self.store.save()?;
		Ok(id)
	}

	/// Marks the task with `task_id` complete and stamps `completed_at`.
	///
	/// Completing an already-completed task re-stamps `completed_at` and
	/// still reports `Ok(true)`. Returns `Ok(false)` when no task matches.
	pub fn complete(&mut self, task_id: u64) -> Result<bool> {
		let mut found = false;
		for task in self.store.iter_mut() {
			if task.id == task_id {
				task.completed = true;
				task.completed_at = Some(Local::now());
				found = true;
				break;
			}
		}
		if found {
			self.store.save()?;
		}
		Ok(found)
	}

	/// Completion counts across all tasks.
	pub fn summary(&self) -> TaskSummary {
		let total = self.store.len();
		let completed = self
			.store
			.records()
			.iter()
			.filter(|task| task.completed)
			.count();
		TaskSummary {
			total,
			completed,
			pending: total - completed,
		}
	}

	/// Stable, ordered, read-only view of all tasks.
	pub fn records(&self) -> &[Task] {
		self.store.records()
	}

	/// Case-insensitive substring search across the flattened records.
	pub fn search(&self, term: &str) -> Vec<&Task> {
		self.store.search(term)
	}
}
