//! Event date and time-remaining arithmetic.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Error parsing a user-entered event date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventDateError {
	/// The input did not match `YYYY-MM-DD`.
	#[error("invalid date format {0:?}: use YYYY-MM-DD")]
	InvalidFormat(String),
}

/// The day of the event. The event moment is local midnight of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventDate(NaiveDate);

impl EventDate {
	/// Parses user input in `YYYY-MM-DD` form, ignoring surrounding
	/// whitespace.
	pub fn parse(input: &str) -> Result<Self, EventDateError> {
		let input = input.trim();
		NaiveDate::parse_from_str(input, "%Y-%m-%d")
			.map(Self)
			.map_err(|_| EventDateError::InvalidFormat(input.to_string()))
	}

	/// The default planning horizon: thirty days from `today`.
	pub fn default_horizon(today: NaiveDate) -> Self {
		Self(today + Duration::days(30))
	}

	/// The calendar day.
	pub fn date(&self) -> NaiveDate {
		self.0
	}

	/// The moment the countdown targets.
	pub fn moment(&self) -> NaiveDateTime {
		self.0.and_time(NaiveTime::MIN)
	}
}

impl fmt::Display for EventDate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.format("%Y-%m-%d"))
	}
}

/// Time remaining until the event, recomputed on demand.
///
/// The caller (the presentation layer's refresh tick) decides when to
/// recompute; nothing here holds a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
	/// The event is still ahead.
	Remaining {
		days: i64,
		hours: i64,
		minutes: i64,
	},
	/// The event moment is now or in the past.
	Passed,
}

impl Countdown {
	/// Computes the time left between `now` and `event`.
	pub fn until(event: NaiveDateTime, now: NaiveDateTime) -> Self {
		if event <= now {
			return Self::Passed;
		}
		let delta = event - now;
		Self::Remaining {
			days: delta.num_days(),
			hours: delta.num_hours() % 24,
			minutes: delta.num_minutes() % 60,
		}
	}
}

impl fmt::Display for Countdown {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Remaining {
				days,
				hours,
				minutes,
			} => write!(f, "{days} days, {hours} hours, {minutes} minutes"),
			Self::Passed => f.write_str("Event has passed!"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(date: &str, time: &str) -> NaiveDateTime {
		NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M")
			.expect("must parse fixture")
	}

	#[test]
	fn parses_iso_dates_and_trims() {
		let date = EventDate::parse("  2026-09-15 ").expect("must parse");
		assert_eq!(date.to_string(), "2026-09-15");
	}

	#[test]
	fn rejects_other_formats() {
		for input in ["15/09/2026", "2026-9", "next tuesday", ""] {
			assert!(EventDate::parse(input).is_err(), "{input:?} should fail");
		}
	}

	#[test]
	fn default_horizon_is_thirty_days_out() {
		let today = NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date");
		let event = EventDate::default_horizon(today);
		assert_eq!(event.date(), NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date"));
	}

	#[test]
	fn countdown_divmod_matches_expectation() {
		let event = at("2026-09-15", "00:00");
		let now = at("2026-09-12", "21:30");
		assert_eq!(
			Countdown::until(event, now),
			Countdown::Remaining {
				days: 2,
				hours: 2,
				minutes: 30
			}
		);
	}

	#[test]
	fn countdown_renders_like_the_planner() {
		let event = at("2026-09-15", "00:00");
		let now = at("2026-09-12", "21:30");
		assert_eq!(
			Countdown::until(event, now).to_string(),
			"2 days, 2 hours, 30 minutes"
		);
	}

	#[test]
	fn event_at_or_before_now_has_passed() {
		let event = at("2026-09-15", "00:00");
		assert_eq!(Countdown::until(event, event), Countdown::Passed);
		assert_eq!(
			Countdown::until(event, at("2026-09-16", "08:00")).to_string(),
			"Event has passed!"
		);
	}
}
