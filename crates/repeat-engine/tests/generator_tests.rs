//! Tests for occurrence generation (`create_repeating_events`, `occurrence_dates`).

use chrono::NaiveDate;
use repeat_engine::calendar::format_date;
use repeat_engine::{
    create_repeating_events, occurrence_dates, AnchorEvent, EngineConfig, EventDetails,
    Occurrence, RecurrenceKind, RecurrenceSpec, RepeatError,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn d(s: &str) -> NaiveDate {
    repeat_engine::calendar::parse_date(s).unwrap()
}

fn event(date: &str, kind: RecurrenceKind, interval: i32, end: Option<&str>) -> AnchorEvent {
    let mut repeat = RecurrenceSpec::new(kind, interval);
    repeat.end_date = end.map(d);
    AnchorEvent::new(
        d(date),
        EventDetails {
            title: "Repeat test".into(),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            description: "weekly sync".into(),
            location: "Room 4".into(),
            category: "work".into(),
            notification_time: 10,
            repeat,
        },
    )
}

fn dates(occurrences: &[Occurrence]) -> Vec<String> {
    occurrences.iter().map(|o| format_date(o.date)).collect()
}

fn expand(ev: &AnchorEvent) -> Vec<String> {
    dates(&create_repeating_events(ev, &EngineConfig::default()).expect("should expand"))
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_daily_interval_one() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, Some("2025-08-03"));
    assert_eq!(expand(&ev), ["2025-08-01", "2025-08-02", "2025-08-03"]);
}

#[test]
fn scenario_b_daily_interval_two() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 2, Some("2025-08-05"));
    assert_eq!(expand(&ev), ["2025-08-01", "2025-08-03", "2025-08-05"]);
}

#[test]
fn scenario_c_monthly_without_end_date_stops_at_horizon() {
    let ev = event("2025-08-01", RecurrenceKind::Monthly, 1, None);
    let config = EngineConfig::default().with_max_horizon(d("2025-10-30"));

    let result = dates(&create_repeating_events(&ev, &config).unwrap());
    assert_eq!(result, ["2025-08-01", "2025-09-01", "2025-10-01"]);
    assert!(!result.iter().any(|date| date == "2025-11-01"));
}

#[test]
fn scenario_c_default_horizon_matches_system_end_date() {
    let ev = event("2025-08-01", RecurrenceKind::Monthly, 1, None);
    assert_eq!(expand(&ev), ["2025-08-01", "2025-09-01", "2025-10-01"]);
}

#[test]
fn scenario_d_monthly_31st_skips_short_months() {
    let ev = event("2025-08-31", RecurrenceKind::Monthly, 1, Some("2025-10-31"));
    assert_eq!(expand(&ev), ["2025-08-31", "2025-10-31"]);
}

#[test]
fn scenario_e_yearly_feb_29_only_in_leap_years() {
    let ev = event("2020-02-29", RecurrenceKind::Yearly, 1, Some("2025-03-01"));
    assert_eq!(expand(&ev), ["2020-02-29", "2024-02-29"]);
}

#[test]
fn scenario_f_weekly_same_weekday() {
    // 2025-08-07 is a Thursday.
    let ev = event("2025-08-07", RecurrenceKind::Weekly, 1, Some("2025-08-21"));
    assert_eq!(expand(&ev), ["2025-08-07", "2025-08-14", "2025-08-21"]);
}

// ---------------------------------------------------------------------------
// Skip policy
// ---------------------------------------------------------------------------

#[test]
fn monthly_31st_over_a_full_year() {
    let ev = event("2024-01-31", RecurrenceKind::Monthly, 1, Some("2024-12-31"));
    assert_eq!(
        expand(&ev),
        [
            "2024-01-31",
            "2024-03-31",
            "2024-05-31",
            "2024-07-31",
            "2024-08-31",
            "2024-10-31",
            "2024-12-31",
        ]
    );
}

#[test]
fn monthly_skip_does_not_shift_later_steps() {
    // Every two months from Jan 31: Sep and Nov have 30 days and are skipped,
    // while the steps before them stay on the 31st.
    let ev = event("2025-01-31", RecurrenceKind::Monthly, 2, Some("2025-12-31"));
    assert_eq!(
        expand(&ev),
        ["2025-01-31", "2025-03-31", "2025-05-31", "2025-07-31"]
    );
}

#[test]
fn monthly_30th_skips_february_only() {
    let ev = event("2025-01-30", RecurrenceKind::Monthly, 1, Some("2025-04-30"));
    assert_eq!(expand(&ev), ["2025-01-30", "2025-03-30", "2025-04-30"]);
}

#[test]
fn yearly_feb_29_follows_century_rule() {
    let ev = event("2000-02-29", RecurrenceKind::Yearly, 100, Some("2400-12-31"));
    assert_eq!(expand(&ev), ["2000-02-29", "2400-02-29"]);
}

#[test]
fn yearly_feb_29_across_decade() {
    let ev = event("2024-02-29", RecurrenceKind::Yearly, 1, Some("2033-01-01"));
    assert_eq!(expand(&ev), ["2024-02-29", "2028-02-29", "2032-02-29"]);
}

#[test]
fn weekly_interval_two() {
    let ev = event("2025-08-07", RecurrenceKind::Weekly, 2, Some("2025-09-04"));
    assert_eq!(expand(&ev), ["2025-08-07", "2025-08-21", "2025-09-04"]);
}

#[test]
fn daily_crosses_month_and_leap_day() {
    let ev = event("2024-02-27", RecurrenceKind::Daily, 1, Some("2024-03-02"));
    assert_eq!(
        expand(&ev),
        ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
    );
}

// ---------------------------------------------------------------------------
// Bounds and empty results
// ---------------------------------------------------------------------------

#[test]
fn end_date_equal_to_anchor_yields_anchor_only() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, Some("2025-08-01"));
    assert_eq!(expand(&ev), ["2025-08-01"]);
}

#[test]
fn end_date_before_anchor_yields_nothing() {
    let ev = event("2025-08-10", RecurrenceKind::Weekly, 1, Some("2025-08-01"));
    assert!(expand(&ev).is_empty());
}

#[test]
fn feb_29_with_end_before_next_leap_year_yields_anchor_only() {
    let ev = event("2024-02-29", RecurrenceKind::Yearly, 1, Some("2027-12-31"));
    assert_eq!(expand(&ev), ["2024-02-29"]);
}

#[test]
fn anchor_after_default_horizon_without_end_date_yields_nothing() {
    let ev = event("2026-01-01", RecurrenceKind::Daily, 1, None);
    assert!(expand(&ev).is_empty());
}

#[test]
fn non_repeating_event_yields_empty_list() {
    let ev = event("2025-08-01", RecurrenceKind::None, 1, Some("2025-10-30"));
    assert!(expand(&ev).is_empty());
}

#[test]
fn non_repeating_event_ignores_interval() {
    let ev = event("2025-08-01", RecurrenceKind::None, 0, None);
    let result = create_repeating_events(&ev, &EngineConfig::default()).unwrap();
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_interval_is_rejected() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 0, Some("2025-08-03"));
    let err = create_repeating_events(&ev, &EngineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RepeatError::InvalidInterval {
            kind: RecurrenceKind::Daily,
            interval: 0
        }
    ));
}

#[test]
fn negative_interval_is_rejected_for_every_kind() {
    for kind in [
        RecurrenceKind::Daily,
        RecurrenceKind::Weekly,
        RecurrenceKind::Monthly,
        RecurrenceKind::Yearly,
    ] {
        let ev = event("2025-08-01", kind, -2, Some("2025-10-30"));
        assert!(
            create_repeating_events(&ev, &EngineConfig::default()).is_err(),
            "{kind} with interval -2"
        );
        assert!(occurrence_dates(&ev, &EngineConfig::default()).is_err());
    }
}

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

#[test]
fn occurrences_copy_every_non_date_field() {
    let ev = event("2025-08-01", RecurrenceKind::Weekly, 3, Some("2025-10-30"));
    let result = create_repeating_events(&ev, &EngineConfig::default()).unwrap();

    assert_eq!(result.len(), 5);
    for occurrence in &result {
        assert_eq!(occurrence.details, ev.details);
        assert_eq!(occurrence.details.repeat.kind, RecurrenceKind::Weekly);
        assert_eq!(occurrence.details.repeat.interval, 3);
    }
}

#[test]
fn generation_is_idempotent() {
    let ev = event("2025-01-31", RecurrenceKind::Monthly, 1, Some("2026-12-31"));
    let config = EngineConfig::default();
    let first = create_repeating_events(&ev, &config).unwrap();
    let second = create_repeating_events(&ev, &config).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Lazy iteration
// ---------------------------------------------------------------------------

#[test]
fn occurrence_dates_is_lazy() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, None);
    let config = EngineConfig::default().with_max_horizon(NaiveDate::MAX);

    let first: Vec<NaiveDate> = occurrence_dates(&ev, &config).unwrap().take(3).collect();
    assert_eq!(first, [d("2025-08-01"), d("2025-08-02"), d("2025-08-03")]);
}

#[test]
fn occurrence_dates_reports_bound() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, Some("2025-08-09"));
    let iter = occurrence_dates(&ev, &EngineConfig::default()).unwrap();
    assert_eq!(iter.bound(), d("2025-08-09"));
    assert_eq!(iter.count(), 9);
}

#[test]
fn generation_stops_at_end_of_representable_calendar() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, None);
    let ev = AnchorEvent::new(NaiveDate::MAX, ev.details);
    let config = EngineConfig::default().with_max_horizon(NaiveDate::MAX);

    let result = create_repeating_events(&ev, &config).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].date, NaiveDate::MAX);
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let ev = event("2025-08-01", RecurrenceKind::Daily, 1, Some("2025-08-01"));
    let mut iter = occurrence_dates(&ev, &EngineConfig::default()).unwrap();
    assert_eq!(iter.next(), Some(d("2025-08-01")));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}
