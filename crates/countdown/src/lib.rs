//! Countdown and overview computations for the event planner.
//!
//! Everything here is a pure, read-only computation over the registries:
//! parse the event date the user typed, work out how long is left, and
//! assemble the aggregate overview report. The periodic refresh that the
//! planner UI runs every minute lives in the presentation layer — it calls
//! [`Countdown::until`] and [`Overview::gather`] with a fresh `now` and
//! displays the result, so no timer or concurrency primitive is needed in
//! the core.

pub mod event;
pub mod overview;

pub use event::{Countdown, EventDate, EventDateError};
pub use overview::Overview;
