//! Event data model: the anchor an author submits and the occurrences
//! generated from it.
//!
//! The JSON shape matches the event form of the calendar front end:
//!
//! ```json
//! {
//!   "title": "Standup",
//!   "date": "2025-08-01",
//!   "startTime": "10:00",
//!   "endTime": "11:00",
//!   "description": "",
//!   "location": "",
//!   "category": "work",
//!   "notificationTime": 10,
//!   "repeat": { "type": "weekly", "interval": 1, "endDate": "2025-10-30" }
//! }
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RepeatError, Result};

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    /// A single event; recurrence expansion does not apply.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecurrenceKind::None => "none",
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
            RecurrenceKind::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

/// A recurrence rule: kind, interval, and an optional inclusive end date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceSpec {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
    /// Step size in units of `kind`. Ignored when `kind` is `None`.
    #[serde(default)]
    pub interval: i32,
    /// Last date (inclusive) an occurrence may fall on. When absent the
    /// configured maximum horizon applies.
    #[serde(
        default,
        with = "opt_date_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceSpec {
    pub fn new(kind: RecurrenceKind, interval: i32) -> Self {
        Self {
            kind,
            interval,
            end_date: None,
        }
    }

    /// A non-repeating rule.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn is_repeating(&self) -> bool {
        self.kind != RecurrenceKind::None
    }

    /// Check the interval of a repeating rule.
    ///
    /// # Errors
    /// Returns `RepeatError::InvalidInterval` when `kind` repeats and
    /// `interval < 1`. A `None` rule always validates.
    pub fn validate(&self) -> Result<()> {
        if self.is_repeating() && self.interval < 1 {
            return Err(RepeatError::InvalidInterval {
                kind: self.kind,
                interval: self.interval,
            });
        }
        Ok(())
    }
}

/// Every field of an event except its date. Copied verbatim into each
/// generated occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDetails {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    /// Minutes before start at which to notify.
    pub notification_time: i32,
    pub repeat: RecurrenceSpec,
}

/// The user-authored template all occurrences are computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorEvent {
    #[serde(with = "date_serde")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl AnchorEvent {
    pub fn new(date: NaiveDate, details: EventDetails) -> Self {
        Self { date, details }
    }

    /// Parse an anchor event from its JSON form.
    ///
    /// # Errors
    /// Returns `RepeatError::Json` for malformed JSON or a malformed date field.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn repeat(&self) -> &RecurrenceSpec {
        &self.details.repeat
    }
}

/// One generated instance of a recurring event. Carries no identifier; the
/// store assigns one when the occurrence is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(with = "date_serde")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl Occurrence {
    /// Materialize the anchor on `date`.
    pub fn from_anchor(anchor: &AnchorEvent, date: NaiveDate) -> Self {
        Self {
            date,
            details: anchor.details.clone(),
        }
    }
}

mod date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calendar::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// `null`, a missing key, and `""` all mean "no date".
mod opt_date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calendar::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&format_date(*date)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
