//! Recurrence predicate: is a given date an occurrence of an event?
//!
//! This answers membership for one date without enumerating anything. The
//! generator in [`crate::generator`] enumerates directly, and the two always
//! agree on which dates belong to a rule.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{day_of_week, days_between, months_between, years_between};
use crate::config::EngineConfig;
use crate::event::{AnchorEvent, RecurrenceKind, RecurrenceSpec};

/// The last date (inclusive) a rule may produce: its end date if it has one,
/// otherwise the configured maximum horizon.
pub fn effective_bound(rule: &RecurrenceSpec, config: &EngineConfig) -> NaiveDate {
    rule.end_date.unwrap_or(config.max_horizon)
}

/// Decide whether `candidate` is a legal occurrence of `event`.
///
/// The anchor date itself counts as an occurrence. Dates before the anchor or
/// after the effective bound never do. A `None` rule, or a rule with an
/// interval below 1, matches nothing.
///
/// A monthly rule anchored on the 31st never matches in a 30-day month, and a
/// yearly rule anchored on Feb 29 only matches in leap years: the candidate
/// must carry the anchor's exact day (and month), so no nearby date is
/// substituted.
pub fn should_create_event_for_date(
    event: &AnchorEvent,
    candidate: NaiveDate,
    config: &EngineConfig,
) -> bool {
    let rule = event.repeat();
    if rule.validate().is_err() {
        return false;
    }

    let anchor = event.date;
    if candidate < anchor || candidate > effective_bound(rule, config) {
        return false;
    }

    let interval = i64::from(rule.interval);
    match rule.kind {
        RecurrenceKind::None => false,
        RecurrenceKind::Daily => days_between(anchor, candidate) % interval == 0,
        RecurrenceKind::Weekly => {
            day_of_week(candidate) == day_of_week(anchor)
                && (days_between(anchor, candidate) / 7) % interval == 0
        }
        RecurrenceKind::Monthly => {
            candidate.day() == anchor.day() && months_between(anchor, candidate) % interval == 0
        }
        RecurrenceKind::Yearly => {
            candidate.month() == anchor.month()
                && candidate.day() == anchor.day()
                && years_between(anchor, candidate) % interval == 0
        }
    }
}
