//! Occurrence generation -- expands a repeating anchor event into concrete
//! dated occurrences.
//!
//! Step `n` is always computed from the anchor (`anchor + n * interval`), never
//! from the previous occurrence, so a monthly rule anchored on the 31st comes
//! back to the 31st after skipping a short month instead of drifting to the
//! 30th.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::calendar::{
    first_of_month, try_shift_by_days, try_shift_by_months, try_shift_by_years, Shifted,
};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::evaluator::effective_bound;
use crate::event::{AnchorEvent, Occurrence, RecurrenceKind};

/// Resolution of one interval step against the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The step lands on an existing date within the bound.
    Emit(NaiveDate),
    /// The step lands in a month lacking the anchor's day; move on.
    Skip,
    /// The step is past the bound (or the calendar); nothing further can match.
    Stop,
}

/// Lazy, ascending sequence of occurrence dates for one anchor event.
///
/// Created by [`occurrence_dates`].
#[derive(Debug, Clone)]
pub struct OccurrenceDates {
    anchor: NaiveDate,
    kind: RecurrenceKind,
    interval: i64,
    bound: NaiveDate,
    next_step: i64,
    done: bool,
}

impl OccurrenceDates {
    /// Inclusive last date this sequence may yield.
    pub fn bound(&self) -> NaiveDate {
        self.bound
    }

    fn resolve(&self, n: i64) -> Step {
        let Some(offset) = n.checked_mul(self.interval) else {
            return Step::Stop;
        };

        let shifted = match self.kind {
            RecurrenceKind::None => return Step::Stop,
            RecurrenceKind::Daily => try_shift_by_days(self.anchor, offset),
            RecurrenceKind::Weekly => offset
                .checked_mul(7)
                .map_or(Shifted::OutOfRange, |days| {
                    try_shift_by_days(self.anchor, days)
                }),
            RecurrenceKind::Monthly => i32::try_from(offset)
                .map_or(Shifted::OutOfRange, |months| {
                    try_shift_by_months(self.anchor, months)
                }),
            RecurrenceKind::Yearly => i32::try_from(offset)
                .map_or(Shifted::OutOfRange, |years| {
                    try_shift_by_years(self.anchor, years)
                }),
        };

        match shifted {
            Shifted::Exists(date) if date <= self.bound => Step::Emit(date),
            Shifted::Exists(_) | Shifted::OutOfRange => Step::Stop,
            // A missing day only stops generation once its whole month lies
            // past the bound; otherwise a later step may still land in range.
            Shifted::Missing { year, month } => match first_of_month(year, month) {
                Some(first) if first <= self.bound => Step::Skip,
                _ => Step::Stop,
            },
        }
    }
}

impl Iterator for OccurrenceDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while !self.done {
            let n = self.next_step;
            self.next_step += 1;
            match self.resolve(n) {
                Step::Emit(date) => return Some(date),
                Step::Skip => trace!(step = n, "no matching day in target month, skipping"),
                Step::Stop => self.done = true,
            }
        }
        None
    }
}

impl FusedIterator for OccurrenceDates {}

/// Build the lazy date sequence for `event`.
///
/// A non-repeating event yields an empty sequence.
///
/// # Errors
/// Returns `RepeatError::InvalidInterval` if the rule repeats with an
/// interval below 1.
pub fn occurrence_dates(event: &AnchorEvent, config: &EngineConfig) -> Result<OccurrenceDates> {
    let rule = event.repeat();
    rule.validate()?;

    Ok(OccurrenceDates {
        anchor: event.date,
        kind: rule.kind,
        interval: i64::from(rule.interval),
        bound: effective_bound(rule, config),
        next_step: 0,
        done: !rule.is_repeating(),
    })
}

/// Expand a repeating event into one [`Occurrence`] per valid date.
///
/// Occurrences are in ascending date order, start at the anchor date and end
/// at or before the rule's end date (or `config.max_horizon` when the rule has
/// none). Every field other than `date` is copied from the anchor.
///
/// Returns an empty list for a non-repeating event: the caller stores such an
/// event as-is. An empty list is also a valid result for a repeating rule
/// whose every step is skipped or out of range.
///
/// # Errors
/// Returns `RepeatError::InvalidInterval` before generating anything if the
/// rule repeats with an interval below 1.
pub fn create_repeating_events(
    event: &AnchorEvent,
    config: &EngineConfig,
) -> Result<Vec<Occurrence>> {
    let dates = occurrence_dates(event, config)?;
    if !event.repeat().is_repeating() {
        return Ok(Vec::new());
    }

    debug!(
        anchor = %event.date,
        kind = %event.repeat().kind,
        interval = event.repeat().interval,
        bound = %dates.bound(),
        "expanding repeating event"
    );

    let occurrences: Vec<Occurrence> = dates
        .map(|date| Occurrence::from_anchor(event, date))
        .collect();

    debug!(count = occurrences.len(), "expansion complete");
    Ok(occurrences)
}
