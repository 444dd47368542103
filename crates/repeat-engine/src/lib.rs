//! # repeat-engine
//!
//! Deterministic expansion of recurring calendar events.
//!
//! Given an anchor event with a recurrence rule (daily, weekly, monthly or
//! yearly, an interval, and an optional end date), the engine produces every
//! occurrence date up to the end date, or up to a configured maximum horizon
//! when the rule has none. Dates are zone-less calendar dates. Months lacking
//! the anchor's day (the 31st, or Feb 29 in common years) are skipped, never
//! clamped.
//!
//! ```rust
//! use repeat_engine::{
//!     calendar::parse_date, create_repeating_events, AnchorEvent, EngineConfig,
//!     EventDetails, RecurrenceKind, RecurrenceSpec,
//! };
//!
//! let event = AnchorEvent::new(
//!     parse_date("2025-08-31").unwrap(),
//!     EventDetails {
//!         title: "Rent".into(),
//!         repeat: RecurrenceSpec::new(RecurrenceKind::Monthly, 1)
//!             .with_end_date(parse_date("2025-10-31").unwrap()),
//!         ..EventDetails::default()
//!     },
//! );
//!
//! let dates: Vec<String> = create_repeating_events(&event, &EngineConfig::default())
//!     .unwrap()
//!     .iter()
//!     .map(|o| o.date.to_string())
//!     .collect();
//! assert_eq!(dates, ["2025-08-31", "2025-10-31"]);
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — leap years, month lengths, weekday, non-clamping date shifts
//! - [`evaluator`] — is a given date an occurrence of an event?
//! - [`generator`] — anchor event → ordered occurrences
//! - [`event`] — anchor, occurrence and rule types (JSON form of the event editor)
//! - [`batch`] — single-vs-batch save planning
//! - [`rrule_text`] — RFC 5545 rendering of a rule
//! - [`config`] — maximum horizon configuration
//! - [`error`] — Error types

pub mod batch;
pub mod calendar;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod generator;
pub mod rrule_text;

pub use batch::{OccurrenceBatch, SavePlan};
pub use calendar::{is_leap_year, last_day_of_month, Shifted};
pub use config::{EngineConfig, DEFAULT_MAX_HORIZON};
pub use error::{RepeatError, Result};
pub use evaluator::{effective_bound, should_create_event_for_date};
pub use event::{AnchorEvent, EventDetails, Occurrence, RecurrenceKind, RecurrenceSpec};
pub use generator::{create_repeating_events, occurrence_dates, OccurrenceDates};
