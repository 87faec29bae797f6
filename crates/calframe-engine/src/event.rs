//! Events and the event-source capability.
//!
//! The engine never fetches calendars itself. It consumes events through the
//! [`EventSource`] trait: a source is asked to preload a date window once per
//! render, then queried per date. [`AggregateSource`] fans one logical source
//! out to several concrete ones; [`StaticSource`] serves a fixed in-memory
//! event list and doubles as the test fixture source.

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};
use thiserror::Error;

/// One calendar event.
///
/// Multi-day events are a single value spanning `start..end`; the layouts
/// derive per-day presentation (from/through/to glyphs) by comparing the
/// event's date span against the date being rendered. The engine only reads
/// events, it never mutates or stores them beyond one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Start of the event.
    pub start: DateTime<Local>,
    /// End of the event.
    pub end: DateTime<Local>,
    /// Display text.
    pub summary: String,
    /// Whole-date event with no intra-day time component.
    pub all_day: bool,
}

impl Event {
    /// Create an event.
    pub fn new(
        start: DateTime<Local>,
        end: DateTime<Local>,
        summary: impl Into<String>,
        all_day: bool,
    ) -> Self {
        Self {
            start,
            end,
            summary: summary.into(),
            all_day,
        }
    }

    /// Whether this event occupies `date`.
    ///
    /// All-day events end on the morning of their end date, so the end date
    /// itself is exclusive; timed events include their end date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.all_day {
            self.start.date_naive() <= date && date < self.end.date_naive()
        } else {
            self.start.date_naive() <= date && date <= self.end.date_naive()
        }
    }
}

/// An event source failed to load its window.
///
/// The engine performs no retry and no partial-window recovery; a failed
/// preload aborts the entire render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("event source {provider} failed: {reason}")]
pub struct FetchError {
    /// Name of the failing source.
    pub provider: String,
    /// Human-readable failure description.
    pub reason: String,
}

impl FetchError {
    /// Create a fetch error for the named source.
    pub fn new(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

/// Capability the engine requires from an event provider.
///
/// Sources are expected to return events pre-sorted by start time; the
/// engine imposes no ordering of its own.
pub trait EventSource {
    /// Load everything needed to answer queries for `[from, to]`.
    fn preload(&mut self, from: NaiveDate, to: NaiveDate) -> Result<(), FetchError>;

    /// Timed events occupying `date`.
    fn events_on(&self, date: NaiveDate) -> Vec<Event>;

    /// All-day events occupying `date`.
    fn all_day_events_on(&self, date: NaiveDate) -> Vec<Event>;

    /// Whether `date` should be styled as a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Fan-out over several event sources.
///
/// `preload` is fail-fast in source order with no partial-success merge;
/// event queries concatenate results without de-duplication; a date is a
/// holiday if any source says so.
#[derive(Default)]
pub struct AggregateSource {
    sources: Vec<Box<dyn EventSource>>,
}

impl AggregateSource {
    /// Aggregate the given sources.
    pub fn new(sources: Vec<Box<dyn EventSource>>) -> Self {
        Self { sources }
    }

    /// Append another source.
    pub fn push(&mut self, source: Box<dyn EventSource>) {
        self.sources.push(source);
    }
}

impl EventSource for AggregateSource {
    fn preload(&mut self, from: NaiveDate, to: NaiveDate) -> Result<(), FetchError> {
        for source in &mut self.sources {
            source.preload(from, to)?;
        }
        Ok(())
    }

    fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.sources
            .iter()
            .flat_map(|source| source.events_on(date))
            .collect()
    }

    fn all_day_events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.sources
            .iter()
            .flat_map(|source| source.all_day_events_on(date))
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.sources.iter().any(|source| source.is_holiday(date))
    }
}

/// Fixed in-memory event source.
///
/// Sundays are holidays by default; [`StaticSource::with_week_holidays`]
/// overrides that. With [`StaticSource::holiday_calendar`] enabled, every
/// date carrying an event counts as a holiday too, which lets a dedicated
/// public-holiday calendar drive the accent color.
#[derive(Debug, Clone)]
pub struct StaticSource {
    events: Vec<Event>,
    week_holidays: Vec<Weekday>,
    holiday_calendar: bool,
}

impl StaticSource {
    /// Source serving the given events.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            week_holidays: vec![Weekday::Sun],
            holiday_calendar: false,
        }
    }

    /// Override which weekdays count as holidays.
    #[must_use]
    pub fn with_week_holidays(mut self, weekdays: Vec<Weekday>) -> Self {
        self.week_holidays = weekdays;
        self
    }

    /// Treat every date carrying an event as a holiday.
    #[must_use]
    pub fn holiday_calendar(mut self, enabled: bool) -> Self {
        self.holiday_calendar = enabled;
        self
    }
}

impl EventSource for StaticSource {
    fn preload(&mut self, _from: NaiveDate, _to: NaiveDate) -> Result<(), FetchError> {
        Ok(())
    }

    fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| !event.all_day && event.occurs_on(date))
            .cloned()
            .collect()
    }

    fn all_day_events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.all_day && event.occurs_on(date))
            .cloned()
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        if self.week_holidays.contains(&date.weekday()) {
            return true;
        }
        self.holiday_calendar && self.events.iter().any(|event| event.occurs_on(date))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn timed_event_includes_its_end_date() {
        let event = Event::new(at(2024, 1, 10, 9, 0), at(2024, 1, 12, 17, 0), "trip", false);
        assert!(!event.occurs_on(date(2024, 1, 9)));
        assert!(event.occurs_on(date(2024, 1, 10)));
        assert!(event.occurs_on(date(2024, 1, 11)));
        assert!(event.occurs_on(date(2024, 1, 12)));
        assert!(!event.occurs_on(date(2024, 1, 13)));
    }

    #[test]
    fn all_day_event_excludes_its_end_date() {
        let event = Event::new(at(2024, 1, 10, 0, 0), at(2024, 1, 12, 0, 0), "fair", true);
        assert!(event.occurs_on(date(2024, 1, 10)));
        assert!(event.occurs_on(date(2024, 1, 11)));
        assert!(!event.occurs_on(date(2024, 1, 12)));
    }

    #[test]
    fn static_source_splits_timed_and_all_day() {
        let source = StaticSource::new(vec![
            Event::new(at(2024, 1, 10, 9, 0), at(2024, 1, 10, 10, 0), "standup", false),
            Event::new(at(2024, 1, 10, 0, 0), at(2024, 1, 11, 0, 0), "fair", true),
        ]);
        assert_eq!(source.events_on(date(2024, 1, 10)).len(), 1);
        assert_eq!(source.all_day_events_on(date(2024, 1, 10)).len(), 1);
        assert!(source.events_on(date(2024, 1, 11)).is_empty());
    }

    #[test]
    fn sunday_is_a_holiday_by_default() {
        let source = StaticSource::new(Vec::new());
        assert!(source.is_holiday(date(2024, 1, 7)));
        assert!(!source.is_holiday(date(2024, 1, 8)));
    }

    #[test]
    fn holiday_calendar_flags_event_dates() {
        let source = StaticSource::new(vec![Event::new(
            at(2024, 1, 10, 0, 0),
            at(2024, 1, 11, 0, 0),
            "public holiday",
            true,
        )])
        .with_week_holidays(Vec::new())
        .holiday_calendar(true);
        assert!(source.is_holiday(date(2024, 1, 10)));
        assert!(!source.is_holiday(date(2024, 1, 11)));
    }

    #[test]
    fn aggregate_concatenates_and_ors_holidays() {
        let saturday_off = StaticSource::new(vec![Event::new(
            at(2024, 1, 10, 9, 0),
            at(2024, 1, 10, 10, 0),
            "a",
            false,
        )])
        .with_week_holidays(vec![Weekday::Sat]);
        let sunday_off = StaticSource::new(vec![Event::new(
            at(2024, 1, 10, 11, 0),
            at(2024, 1, 10, 12, 0),
            "b",
            false,
        )]);

        let aggregate =
            AggregateSource::new(vec![Box::new(saturday_off), Box::new(sunday_off)]);
        assert_eq!(aggregate.events_on(date(2024, 1, 10)).len(), 2);
        assert!(aggregate.is_holiday(date(2024, 1, 6)));
        assert!(aggregate.is_holiday(date(2024, 1, 7)));
        assert!(!aggregate.is_holiday(date(2024, 1, 8)));
    }

    struct FailingSource;

    impl EventSource for FailingSource {
        fn preload(&mut self, _: NaiveDate, _: NaiveDate) -> Result<(), FetchError> {
            Err(FetchError::new("caldav", "connection refused"))
        }
        fn events_on(&self, _: NaiveDate) -> Vec<Event> {
            Vec::new()
        }
        fn all_day_events_on(&self, _: NaiveDate) -> Vec<Event> {
            Vec::new()
        }
        fn is_holiday(&self, _: NaiveDate) -> bool {
            false
        }
    }

    #[test]
    fn aggregate_preload_fails_fast() {
        let mut aggregate = AggregateSource::new(vec![
            Box::new(FailingSource),
            Box::new(StaticSource::new(Vec::new())),
        ]);
        let err = aggregate
            .preload(date(2024, 1, 1), date(2024, 1, 31))
            .unwrap_err();
        assert_eq!(err.provider, "caldav");
    }
}
