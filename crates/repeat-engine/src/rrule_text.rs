//! RFC 5545 rendering of a recurrence rule.
//!
//! Calendar dates are written as midnight UTC (`YYYYMMDDT000000Z`) and `UNTIL`
//! is the effective bound, so an RFC 5545 expander produces the same dates as
//! [`crate::generator`]: both drop steps whose day does not exist in the target
//! month.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::evaluator::effective_bound;
use crate::event::{AnchorEvent, RecurrenceKind};

fn ical_stamp(date: NaiveDate) -> String {
    format!("{}T000000Z", date.format("%Y%m%d"))
}

/// The `RRULE` value for `event`, e.g. `FREQ=WEEKLY;INTERVAL=2;UNTIL=20251030T000000Z`.
///
/// Returns `None` for a non-repeating rule or one with an interval below 1.
pub fn to_rrule(event: &AnchorEvent, config: &EngineConfig) -> Option<String> {
    let rule = event.repeat();
    if rule.validate().is_err() {
        return None;
    }
    let freq = match rule.kind {
        RecurrenceKind::None => return None,
        RecurrenceKind::Daily => "DAILY",
        RecurrenceKind::Weekly => "WEEKLY",
        RecurrenceKind::Monthly => "MONTHLY",
        RecurrenceKind::Yearly => "YEARLY",
    };
    Some(format!(
        "FREQ={};INTERVAL={};UNTIL={}",
        freq,
        rule.interval,
        ical_stamp(effective_bound(rule, config))
    ))
}

/// `DTSTART` and `RRULE` lines for `event`, ready for an iCalendar parser.
pub fn to_rrule_set(event: &AnchorEvent, config: &EngineConfig) -> Option<String> {
    let rrule = to_rrule(event, config)?;
    Some(format!(
        "DTSTART:{}\nRRULE:{}",
        ical_stamp(event.date),
        rrule
    ))
}
