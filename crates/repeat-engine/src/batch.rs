//! Save planning: what a caller should hand to its store for a submitted event.
//!
//! A non-repeating event is stored as-is. A repeating event is expanded, and
//! the occurrences go out together as one create-many request whose body is
//! `{"events": [...]}`. No I/O happens here.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::event::{AnchorEvent, Occurrence};
use crate::generator::create_repeating_events;

/// Body of a create-many request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OccurrenceBatch {
    pub events: Vec<Occurrence>,
}

impl OccurrenceBatch {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the request body as compact JSON.
    ///
    /// # Errors
    /// Returns `RepeatError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<Occurrence>> for OccurrenceBatch {
    fn from(events: Vec<Occurrence>) -> Self {
        Self { events }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePlan {
    /// Store the anchor event unchanged.
    Single(AnchorEvent),
    /// Store every generated occurrence in one request.
    Batch(OccurrenceBatch),
}

impl SavePlan {
    /// # Errors
    /// Returns `RepeatError::InvalidInterval` for a repeating rule with an
    /// interval below 1.
    pub fn for_event(event: &AnchorEvent, config: &EngineConfig) -> Result<Self> {
        if !event.repeat().is_repeating() {
            return Ok(SavePlan::Single(event.clone()));
        }
        let occurrences = create_repeating_events(event, config)?;
        Ok(SavePlan::Batch(occurrences.into()))
    }
}
