//! End-to-end render checks against a fixed reference date.
//!
//! The reference is Wednesday 2024-01-03 at noon. With the default two weeks
//! past and four weeks future, the grid runs from Monday 2023-12-18 to
//! Sunday 2024-01-28: 42 cells in 6 rows. With the default 880x528 canvas
//! the calendar panel is 660x528, giving 93x86 day cells; the reference cell
//! sits at (187, 175) inside the panel.

#![allow(clippy::unwrap_used)]

use calframe_engine::{
    ConfigError, Event, EventSource, FetchError, FrameComposer, RenderConfig, RenderError,
    StaticSource,
};
use calframe_testing::FrameProbe;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

fn reference() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
}

fn monochrome_config() -> RenderConfig {
    RenderConfig {
        monochrome: true,
        ..RenderConfig::default()
    }
}

fn fixture_events() -> Vec<Event> {
    let at = |d: u32, h: u32| Local.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap();
    vec![
        Event::new(at(3, 9), at(3, 10), "standup", false),
        Event::new(at(5, 14), at(7, 11), "ski trip", false),
        Event::new(at(4, 0), at(5, 0), "inventory", true),
    ]
}

fn render_fixture(config: RenderConfig) -> FrameProbe {
    let source = StaticSource::new(fixture_events());
    let mut composer = FrameComposer::new(config, source).unwrap();
    FrameProbe::new(composer.render(reference()).unwrap())
}

#[test]
fn full_color_render_yields_one_plane_of_full_size() {
    let probe = render_fixture(RenderConfig::default());
    assert_eq!(probe.plane_count(), 1);
    assert_eq!(probe.size(), Size::new(880, 528));
}

#[test]
fn monochrome_render_yields_one_plane_per_color() {
    let probe = render_fixture(monochrome_config());
    assert_eq!(probe.plane_count(), 2);
    assert_eq!(probe.size(), Size::new(880, 528));
}

#[test]
fn todays_cell_has_a_thick_solid_border() {
    let probe = render_fixture(monochrome_config());

    // Top edge of the reference cell: four solid rows, no gaps.
    for y in 175..179 {
        for x in 187..=278 {
            probe.assert_ink(0, x, y);
        }
    }
}

#[test]
fn past_cells_have_dashed_borders() {
    let probe = render_fixture(monochrome_config());

    // Tuesday 2024-01-02 sits one column left of the reference cell. Its
    // top edge starts with a 3-pixel dash followed by a 6-pixel gap.
    for x in 94..97 {
        probe.assert_ink(0, x, 175);
    }
    for x in 97..103 {
        probe.assert_blank(0, x, 175);
    }
}

#[test]
fn future_cells_in_the_current_month_are_solid() {
    let probe = render_fixture(monochrome_config());

    // Thursday 2024-01-04: top edge continuous over the full cell width.
    for x in 280..=371 {
        probe.assert_ink(0, x, 175);
    }
}

#[test]
fn holiday_cells_draw_on_the_accent_plane() {
    let probe = render_fixture(monochrome_config());

    // Sunday 2024-01-07, weekend column 6 with the weekend margin applied.
    let x = 1 + 6 * 93 + 7;
    probe.assert_ink(1, x, 175);
    probe.assert_blank(0, x, 175);
}

#[test]
fn grid_spans_exactly_six_weeks() {
    let probe = render_fixture(monochrome_config());

    // Row 5 (last week) carries cell borders; below the grid is blank.
    let last_row_top = 1 + 5 * 87;
    probe.assert_ink(0, 1, last_row_top as u32);
    let below_grid = last_row_top + 86;
    probe.assert_region_blank(
        0,
        Rectangle::new(Point::new(0, below_grid + 1), Size::new(660, (528 - below_grid - 1) as u32)),
    );
    probe.assert_region_blank(
        1,
        Rectangle::new(Point::new(0, below_grid + 1), Size::new(660, (528 - below_grid - 1) as u32)),
    );
}

#[test]
fn side_panels_draw_their_borders() {
    let probe = render_fixture(monochrome_config());

    // Today panel: left edge and bottom edge.
    probe.assert_ink(0, 660, 0);
    probe.assert_ink(0, 660, 175);
    probe.assert_ink(0, 700, 175);

    // Task list: left edge only.
    probe.assert_ink(0, 660, 176);
    probe.assert_ink(0, 660, 527);
}

#[test]
fn task_list_lists_fixture_events() {
    let probe = render_fixture(monochrome_config());

    // The fixture has events on Jan 3-7, so the task list region carries a
    // reasonable amount of ink beyond its border column.
    let body = Rectangle::new(Point::new(662, 176), Size::new(218, 352));
    assert!(probe.ink_count_in(0, body) > 100);
}

#[test]
fn render_is_deterministic() {
    let source = StaticSource::new(fixture_events());
    let mut composer = FrameComposer::new(monochrome_config(), source).unwrap();
    let first = composer.render(reference()).unwrap();
    let second = composer.render(reference()).unwrap();
    assert_eq!(first, second);
}

struct FailingSource;

impl EventSource for FailingSource {
    fn preload(&mut self, _: NaiveDate, _: NaiveDate) -> Result<(), FetchError> {
        Err(FetchError::new("ics", "malformed feed"))
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
fn failed_preload_aborts_the_render() {
    let mut composer = FrameComposer::new(monochrome_config(), FailingSource).unwrap();
    let err = composer.render(reference()).unwrap_err();
    assert!(matches!(err, RenderError::Fetch(_)));
}

#[test]
fn undersized_calendar_panel_fails_construction() {
    let mut config = monochrome_config();
    config.calendar.size = Size::new(8, 528);
    let err = match FrameComposer::new(config, StaticSource::new(fixture_events())) {
        Ok(_) => panic!("expected validation to reject an 8px calendar panel"),
        Err(err) => err,
    };
    assert_eq!(
        err,
        ConfigError::UndersizedPanel {
            panel: "calendar",
            width: 8,
            height: 528
        }
    );
}

#[test]
fn invalid_config_fails_construction() {
    let mut config = RenderConfig::default();
    config.colors.truncate(1);
    let err = match FrameComposer::new(config, StaticSource::new(Vec::new())) {
        Ok(_) => panic!("expected validation to reject a single-color config"),
        Err(err) => err,
    };
    assert_eq!(err, ConfigError::TooFewColors { found: 1 });
}
