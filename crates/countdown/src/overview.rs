//! Aggregate overview of the whole plan.

use std::fmt::Write as _;

use soiree_registry::{BudgetSummary, ExpenseRegistry, GuestRegistry, RsvpTally, TaskRegistry, TaskSummary};

/// Read-only snapshot across the three registries, gathered on demand by
/// the presentation layer's refresh tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
	/// Total guests on the list.
	pub invited: usize,
	/// RSVP counts.
	pub rsvp: RsvpTally,
	/// Task completion counts.
	pub tasks: TaskSummary,
	/// Per-category and total spend.
	pub budget: BudgetSummary,
}

impl Overview {
	/// Gathers the current tallies from all three registries.
	pub fn gather(guests: &GuestRegistry, tasks: &TaskRegistry, budget: &ExpenseRegistry) -> Self {
		Self {
			invited: guests.records().len(),
			rsvp: guests.rsvp_tally(),
			tasks: tasks.summary(),
			budget: budget.summary(),
		}
	}

	/// Renders the plain-text event summary report.
	///
	/// The per-category budget breakdown is appended only when at least
	/// one expense exists.
	pub fn render(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "EVENT PLANNING SUMMARY");
		let _ = writeln!(out, "========================");
		let _ = writeln!(out);
		let _ = writeln!(out, "GUESTS:");
		let _ = writeln!(out, "- Total Invited: {}", self.invited);
		let _ = writeln!(out, "- Confirmed: {}", self.rsvp.confirmed);
		let _ = writeln!(out, "- Declined: {}", self.rsvp.declined);
		let _ = writeln!(out, "- Pending: {}", self.rsvp.pending);
		let _ = writeln!(out);
		let _ = writeln!(out, "TASKS:");
		let _ = writeln!(out, "- Total Tasks: {}", self.tasks.total);
		let _ = writeln!(out, "- Completed: {}", self.tasks.completed);
		let _ = writeln!(out, "- Remaining: {}", self.tasks.pending);
		let _ = writeln!(out);
		let _ = writeln!(out, "BUDGET:");
		let _ = writeln!(out, "- Total Expenses: ${:.2}", self.budget.total);
		if !self.budget.by_category.is_empty() {
			let _ = writeln!(out);
			let _ = writeln!(out, "Budget by Category:");
			for (category, amount) in &self.budget.by_category {
				let _ = writeln!(out, "- {category}: ${amount:.2}");
			}
		}
		out
	}
}
