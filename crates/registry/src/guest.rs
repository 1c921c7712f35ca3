//! Guest list with RSVP tracking.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use soiree_store::RecordStore;

use crate::error::{RegistryError, Result};
use crate::normalize::title_case;

/// Default backing file for the guest list.
pub const GUESTS_FILE: &str = "data/guests.json";

/// A guest's reply state. A record missing the field on disk deserializes
/// as [`Pending`](RsvpStatus::Pending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RsvpStatus {
	/// No reply yet; the state every guest starts in.
	#[default]
	Pending,
	/// The guest is coming.
	Confirmed,
	/// The guest is not coming.
	Declined,
}

impl fmt::Display for RsvpStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Pending => "Pending",
			Self::Confirmed => "Confirmed",
			Self::Declined => "Declined",
		})
	}
}

/// One invited guest.
///
/// `rsvp_status` is the only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
	/// Display name, trimmed and title-cased at add time.
	pub name: String,
	/// Lower-cased email; unique across the registry.
	pub email: String,
	/// Optional phone number, trimmed.
	pub phone: String,
	/// Current reply state.
	#[serde(default)]
	pub rsvp_status: RsvpStatus,
	/// When the guest was added; immutable.
	pub added_at: DateTime<Local>,
}

/// RSVP counts across the whole guest list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpTally {
	/// Guests who said yes.
	pub confirmed: usize,
	/// Guests who said no.
	pub declined: usize,
	/// Guests who have not replied.
	pub pending: usize,
}

/// Manages the guest list atop a [`RecordStore`].
pub struct GuestRegistry {
	store: RecordStore<Guest>,
}

impl GuestRegistry {
	/// Opens the registry at its default path, creating the data directory
	/// on first use.
	pub fn open() -> Self {
		Self::open_at(GUESTS_FILE)
	}

	/// Opens the registry backed by an explicit file.
	pub fn open_at(path: impl Into<PathBuf>) -> Self {
		Self {
			store: RecordStore::open(path),
		}
	}

	/// Adds a guest after normalizing and validating the input.
	///
	/// `name` is trimmed and title-cased, `email` trimmed and lower-cased.
	/// Fails when either is empty after normalization, or when another
	/// guest already uses the email (comparison is case-insensitive).
	pub fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<()> {
		let name = title_case(name.trim());
		let email = email.trim().to_lowercase();

		if name.is_empty() {
			return Err(RegistryError::Validation("name is required".to_string()));
		}
		if email.is_empty() {
			return Err(RegistryError::Validation("email is required".to_string()));
		}
		if self
			.store
			.records()
			.iter()
			.any(|guest| guest.email.eq_ignore_ascii_case(&email))
		{
			return Err(RegistryError::Duplicate { email });
		}

		tracing::debug!(%email, "adding guest");
		self.store.push(Guest {
			name,
			email,
			phone: phone.trim().to_string(),
			rsvp_status: RsvpStatus::Pending,
			added_at: Local::now(),
		});
		self.store.save()?;
		Ok(())
	}

	/// Updates the RSVP of the first guest whose email matches
	/// case-insensitively.
	///
	/// Returns `Ok(false)` without touching the backing file when no guest
	/// matches.
	pub fn update_rsvp(&mut self, email: &str, status: RsvpStatus) -> Result<bool> {
		let needle = email.trim().to_lowercase();
		let mut found = false;
		for guest in self.store.iter_mut() {
			if guest.email.eq_ignore_ascii_case(&needle) {
				guest.rsvp_status = status;
				found = true;
				break;
			}
		}
		if found {
			self.store.save()?;
		}
		Ok(found)
	}

	/// Counts guests by reply state.
	pub fn rsvp_tally(&self) -> RsvpTally {
		let mut tally = RsvpTally::default();
		for guest in self.store.records() {
			match guest.rsvp_status {
				RsvpStatus::Confirmed => tally.confirmed += 1,
				RsvpStatus::Declined => tally.declined += 1,
				RsvpStatus::Pending => tally.pending += 1,
			}
		}
		tally
	}

	/// Stable, ordered, read-only view of all guests.
	pub fn records(&self) -> &[Guest] {
		self.store.records()
	}

	/// Case-insensitive substring search across the flattened records.
	pub fn search(&self, term: &str) -> Vec<&Guest> {
		self.store.search(term)
	}
}
