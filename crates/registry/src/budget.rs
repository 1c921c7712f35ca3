//! Budget expenses grouped by a closed category set.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use soiree_store::RecordStore;

use crate::error::{RegistryError, Result};
use crate::normalize::title_case;

/// Default backing file for the expense list.
pub const BUDGET_FILE: &str = "data/budget.json";

/// The closed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
	Venue,
	Food,
	Decorations,
	Entertainment,
	Miscellaneous,
}

impl Category {
	/// All categories, in declaration order.
	pub const ALL: [Category; 5] = [
		Category::Venue,
		Category::Food,
		Category::Decorations,
		Category::Entertainment,
		Category::Miscellaneous,
	];

	/// Parses free-form input: trimmed and title-cased before matching, so
	/// `" venue "` and `"FOOD"` are accepted.
	///
	/// The failure message enumerates the whole valid set.
	pub fn parse(input: &str) -> Result<Self> {
		match title_case(input.trim()).as_str() {
			"Venue" => Ok(Self::Venue),
			"Food" => Ok(Self::Food),
			"Decorations" => Ok(Self::Decorations),
			"Entertainment" => Ok(Self::Entertainment),
			"Miscellaneous" => Ok(Self::Miscellaneous),
			_ => {
				let valid: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
				Err(RegistryError::Validation(format!(
					"invalid category {:?}: must be one of {}",
					input.trim(),
					valid.join(", ")
				)))
			}
		}
	}

	/// Canonical display name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Venue => "Venue",
			Self::Food => "Food",
			Self::Decorations => "Decorations",
			Self::Entertainment => "Entertainment",
			Self::Miscellaneous => "Miscellaneous",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One recorded expense. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
	/// Registry-assigned id, stable for the life of the file.
	pub id: u64,
	/// Which part of the budget this belongs to.
	pub category: Category,
	/// What the money went on; trimmed, never empty.
	pub description: String,
	/// Positive amount.
	pub amount: f64,
	/// When the expense was recorded; immutable.
	pub date: DateTime<Local>,
}

/// Per-category sums plus the grand total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetSummary {
	/// Sums keyed by category, in first-occurrence insertion order. Only
	/// categories with at least one expense appear.
	pub by_category: IndexMap<Category, f64>,
	/// Total across all expenses.
	pub total: f64,
}

/// Manages the expense list atop a [`RecordStore`]. Ids follow the same
/// monotonic counter scheme as the task registry.
pub struct ExpenseRegistry {
	store: RecordStore<Expense>,
	next_id: u64,
}

impl ExpenseRegistry {
	/// Opens the registry at its default path.
	pub fn open() -> Self {
		Self::open_at(BUDGET_FILE)
	}

	/// Opens the registry backed by an explicit file.
	pub fn open_at(path: impl Into<PathBuf>) -> Self {
		let store: RecordStore<Expense> = RecordStore::open(path);
		let next_id = store
			.records()
			.iter()
			.map(|expense| expense.id)
			.max()
			.unwrap_or(0)
			+ 1;
		Self { store, next_id }
	}

	/// Records an expense and returns its assigned id.
	///
	/// `category` is matched against the closed set after trimming and
	/// title-casing; `amount` is parsed from free-form text and must come
	/// out a positive finite number.
	pub fn add(&mut self, category: &str, description: &str, amount: &str) -> Result<u64> {
		let category = Category::parse(category)?;

		let description = description.trim();
		if description.is_empty() {
			return Err(RegistryError::Validation(
				"expense description is required".to_string(),
			));
		}

		let amount: f64 = amount.trim().parse().map_err(|_| {
			RegistryError::Validation("amount must be a valid number".to_string())
		})?;
		if !amount.is_finite() || amount <= 0.0 {
			return Err(RegistryError::Validation(
				"amount must be positive".to_string(),
			));
		}

		let id = self.next_id;
		tracing::debug!(id, %category, amount, "adding expense");
		self.store.push(Expense {
			id,
			category,
			description: description.to_string(),
			amount,
			date: Local::now(),
		});
		// Consume the id before attempting the save: a failed persist keeps
		// the record in memory, so the id is spent either way.
		self.next_id += 1;
		self.store.save()?;
		Ok(id)
	}

	/// Sums expenses per category and overall.
	pub fn summary(&self) -> BudgetSummary {
		let mut summary = BudgetSummary::default();
		for expense in self.store.records() {
			*summary.by_category.entry(expense.category).or_insert(0.0) += expense.amount;
			summary.total += expense.amount;
		}
		summary
	}

	/// Stable, ordered, read-only view of all expenses.
	pub fn records(&self) -> &[Expense] {
		self.store.records()
	}

	/// Case-insensitive substring search across the flattened records.
	pub fn search(&self, term: &str) -> Vec<&Expense> {
		self.store.search(term)
	}
}
