//! WASM bindings for repeat-engine.
//!
//! Exposes occurrence generation, the recurrence predicate and the calendar
//! helpers to the browser event editor via `wasm-bindgen`. Events cross the
//! boundary as JSON strings in the editor's own form shape
//! (`{"title", "date", "startTime", ..., "repeat": {"type", "interval", "endDate"}}`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p repeat-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/repeat-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/repeat_engine_wasm.wasm
//! ```

use repeat_engine::calendar::parse_date;
use repeat_engine::{AnchorEvent, EngineConfig};
use wasm_bindgen::prelude::*;

/// JSON-in / JSON-out functions behind the exports, free of `JsValue` so they
/// run (and are tested) on native targets too.
pub mod bridge {
    use super::*;

    fn config(horizon: Option<&str>) -> Result<EngineConfig, String> {
        match horizon {
            Some(raw) => parse_date(raw)
                .map(|date| EngineConfig::default().with_max_horizon(date))
                .map_err(|e| e.to_string()),
            None => Ok(EngineConfig::default()),
        }
    }

    fn event(json: &str) -> Result<AnchorEvent, String> {
        AnchorEvent::from_json(json).map_err(|e| format!("Invalid event JSON: {}", e))
    }

    /// Expand `event_json` and return the occurrences as a JSON array.
    pub fn create_repeating_events(event_json: &str, horizon: Option<&str>) -> Result<String, String> {
        let event = event(event_json)?;
        let config = config(horizon)?;
        let occurrences =
            repeat_engine::create_repeating_events(&event, &config).map_err(|e| e.to_string())?;
        serde_json::to_string(&occurrences).map_err(|e| format!("Serialization error: {}", e))
    }

    pub fn should_create_event_for_date(
        event_json: &str,
        date: &str,
        horizon: Option<&str>,
    ) -> Result<bool, String> {
        let event = event(event_json)?;
        let candidate = parse_date(date).map_err(|e| e.to_string())?;
        let config = config(horizon)?;
        Ok(repeat_engine::should_create_event_for_date(
            &event, candidate, &config,
        ))
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = "isLeapYear")]
pub fn is_leap_year(year: i32) -> bool {
    repeat_engine::is_leap_year(year)
}

/// Number of days in `month` (1-12). Throws for any other month.
#[wasm_bindgen(js_name = "lastDayOfMonth")]
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32, JsValue> {
    repeat_engine::last_day_of_month(year, month).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether `date` (YYYY-MM-DD) is an occurrence of the event in `event_json`.
///
/// `horizon` is the last date considered when the rule has no end date;
/// defaults to the engine's built-in horizon.
#[wasm_bindgen(js_name = "shouldCreateEventForDate")]
pub fn should_create_event_for_date(
    event_json: &str,
    date: &str,
    horizon: Option<String>,
) -> Result<bool, JsValue> {
    bridge::should_create_event_for_date(event_json, date, horizon.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}

/// Expand the event in `event_json` into its occurrences.
///
/// Returns a JSON string containing an array of event objects, one per
/// occurrence, each identical to the input except for `date`. A non-repeating
/// event yields `[]`.
#[wasm_bindgen(js_name = "createRepeatingEvents")]
pub fn create_repeating_events(event_json: &str, horizon: Option<String>) -> Result<String, JsValue> {
    bridge::create_repeating_events(event_json, horizon.as_deref())
        .map_err(|e| JsValue::from_str(&e))
}
