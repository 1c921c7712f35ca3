//! Domain registries for the event planner.
//!
//! Three registries cover the planner's state: [`GuestRegistry`] (who is
//! invited and whether they replied), [`TaskRegistry`] (what still needs
//! doing), and [`ExpenseRegistry`] (where the money went). Each one
//! composes its own [`soiree_store::RecordStore`] — one file per entity
//! kind under `data/` — and layers validation and aggregate queries on
//! top.
//!
//! All operations are synchronous and run to completion, including the
//! persist, before returning. Validation and duplicate failures carry
//! user-facing messages; a failed persist surfaces as
//! [`RegistryError::Persistence`] rather than disappearing into a log.

pub mod budget;
pub mod error;
pub mod guest;
mod normalize;
pub mod task;

pub use budget::{BudgetSummary, Category, Expense, ExpenseRegistry};
pub use error::{RegistryError, Result};
pub use guest::{Guest, GuestRegistry, RsvpStatus, RsvpTally};
pub use task::{Task, TaskRegistry, TaskSummary};
