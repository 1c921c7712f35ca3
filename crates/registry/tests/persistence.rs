//! Round-trip behavior across registry reopen, per-file isolation, and the
//! persistence error surface.

use soiree_registry::{ExpenseRegistry, GuestRegistry, RsvpStatus, TaskRegistry};

#[test]
fn guest_round_trip_preserves_records_field_for_field() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("guests.json");

	let mut guests = GuestRegistry::open_at(&path);
	guests.add("Ada Lovelace", "ada@example.com", "555-0100").expect("must add");
	guests.add("Grace Hopper", "grace@example.com", "").expect("must add");
	guests.add("Alan Turing", "alan@example.com", "").expect("must add");
	guests
		.update_rsvp("grace@example.com", RsvpStatus::Confirmed)
		.expect("must update");

	let reopened = GuestRegistry::open_at(&path);
	assert_eq!(reopened.records(), guests.records());
	assert_eq!(reopened.records()[1].rsvp_status, RsvpStatus::Confirmed);
}

#[test]
fn task_round_trip_preserves_order_and_ids() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("tasks.json");

	let mut tasks = TaskRegistry::open_at(&path);
	for description in ["book venue", "order cake", "send invitations"] {
		tasks.add(description, None, None).expect("must add");
	}
	tasks.complete(2).expect("must complete");

	let mut reopened = TaskRegistry::open_at(&path);
	assert_eq!(reopened.records(), tasks.records());

	// The id counter picks up where the file left off.
	let id = reopened.add("confirm caterer", None, None).expect("must add");
	assert_eq!(id, 4);
}

#[test]
fn expense_round_trip_preserves_amounts() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("budget.json");

	let mut budget = ExpenseRegistry::open_at(&path);
	budget.add("Venue", "hall", "1500").expect("must add");
	budget.add("Food", "cake", "49.95").expect("must add");

	let reopened = ExpenseRegistry::open_at(&path);
	assert_eq!(reopened.records(), budget.records());
	assert_eq!(reopened.summary().total, budget.summary().total);
}

#[test]
fn registries_do_not_share_files() {
	let dir = tempfile::tempdir().expect("must create tempdir");

	let mut guests = GuestRegistry::open_at(dir.path().join("guests.json"));
	let mut tasks = TaskRegistry::open_at(dir.path().join("tasks.json"));
	guests.add("Jane", "jane@example.com", "").expect("must add");
	tasks.add("book venue", None, None).expect("must add");

	assert_eq!(GuestRegistry::open_at(dir.path().join("guests.json")).records().len(), 1);
	assert_eq!(TaskRegistry::open_at(dir.path().join("tasks.json")).records().len(), 1);
}

#[test]
fn failed_save_surfaces_and_leaves_prior_snapshot() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("guests.json");

	let mut guests = GuestRegistry::open_at(&path);
	guests.add("Jane", "jane@example.com", "").expect("must add");
	let before = std::fs::read_to_string(&path).expect("must read");

	// Occupy the temp path with a directory so the snapshot write fails.
	std::fs::create_dir(dir.path().join("guests.tmp")).expect("must block temp path");

	let result = guests.add("Joan", "joan@example.com", "");
	assert!(matches!(
		result,
		Err(soiree_registry::RegistryError::Persistence(_))
	));

	let after = std::fs::read_to_string(&path).expect("must read");
	assert_eq!(before, after);
}
