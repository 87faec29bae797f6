//! Sunrise and sunset calculation with a multi-day trend indicator.
//!
//! Times come from the NOAA sunrise equation with the standard refraction
//! zenith of 90.833 degrees, rounded to whole minutes. At high latitudes the
//! sun may not rise or set at all on a given date; those queries return
//! `None` and the today panel simply omits the readout.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Utc};

const TREND_DAYS: i64 = 5;
const ZENITH_DEG: f64 = 90.833;

/// Next sunrise and sunset relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    /// Next sunrise.
    pub sunrise: DateTime<Local>,
    /// Next sunset.
    pub sunset: DateTime<Local>,
    /// Day-over-day sunrise direction, see [`trend_of`].
    pub sunrise_trend: f32,
    /// Day-over-day sunset direction.
    pub sunset_trend: f32,
    /// Sunset comes before the next sunrise and should be listed first.
    pub sunset_first: bool,
}

/// Computes sun event times for a fixed geographic location.
#[derive(Debug, Clone, Copy)]
pub struct SunCalculator {
    latitude: f64,
    longitude: f64,
}

impl SunCalculator {
    /// Calculator for the given coordinates in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Local sunrise time on `date`, or `None` during polar night/day.
    pub fn sunrise(&self, date: NaiveDate) -> Option<DateTime<Local>> {
        self.event_time(date, true)
    }

    /// Local sunset time on `date`, or `None` during polar night/day.
    pub fn sunset(&self, date: NaiveDate) -> Option<DateTime<Local>> {
        self.event_time(date, false)
    }

    /// Next sunrise/sunset relative to `now`, with per-event trends.
    ///
    /// An event already in the past rolls to the next day. When exactly one
    /// event has passed (the normal daytime case: sunrise is behind us,
    /// sunset ahead) the readout is flagged `sunset_first`; when both or
    /// neither have passed, default sunrise-first ordering applies.
    pub fn observe(&self, now: DateTime<Local>) -> Option<SunTimes> {
        let today = now.date_naive();
        let tomorrow = today.succ_opt()?;

        let mut passed = 0u8;
        let mut sunrise = self.sunrise(today)?;
        if sunrise < now {
            sunrise = self.sunrise(tomorrow)?;
            passed += 1;
        }
        let mut sunset = self.sunset(today)?;
        if sunset < now {
            sunset = self.sunset(tomorrow)?;
            passed += 1;
        }
        if passed > 1 {
            passed = 0;
        }

        let sunrise_trend = trend_of(sunrise, |d| self.sunrise(d));
        let sunset_trend = trend_of(sunset, |d| self.sunset(d));

        Some(SunTimes {
            sunrise,
            sunset,
            sunrise_trend,
            sunset_trend,
            sunset_first: passed == 1,
        })
    }

    // NOAA sunrise equation. Works in degrees throughout, matching the
    // published almanac formulation.
    fn event_time(&self, date: NaiveDate, is_sunrise: bool) -> Option<DateTime<Local>> {
        let day_of_year = f64::from(date.ordinal());
        let lng_hour = self.longitude / 15.0;

        let t = if is_sunrise {
            day_of_year + (6.0 - lng_hour) / 24.0
        } else {
            day_of_year + (18.0 - lng_hour) / 24.0
        };

        // Mean anomaly and true longitude of the sun.
        let m = 0.9856 * t - 3.289;
        let l = (m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634).rem_euclid(360.0);

        // Right ascension, shifted into the same quadrant as L.
        let mut ra = atan_deg(0.91764 * tan_deg(l)).rem_euclid(360.0);
        let l_quadrant = (l / 90.0).floor() * 90.0;
        let ra_quadrant = (ra / 90.0).floor() * 90.0;
        ra = (ra + l_quadrant - ra_quadrant) / 15.0;

        // Declination.
        let sin_dec = 0.39782 * sin_deg(l);
        let cos_dec = sin_dec.asin().cos();

        // Local hour angle; out of range means the sun never crosses the
        // zenith on this date at this latitude.
        let cos_h = (cos_deg(ZENITH_DEG) - sin_dec * sin_deg(self.latitude))
            / (cos_dec * cos_deg(self.latitude));
        if !(-1.0..=1.0).contains(&cos_h) {
            return None;
        }

        let h = if is_sunrise {
            360.0 - cos_h.acos().to_degrees()
        } else {
            cos_h.acos().to_degrees()
        } / 15.0;

        let mean_time = h + ra - 0.06571 * t - 6.622;
        let ut = (mean_time - lng_hour).rem_euclid(24.0);

        let mut total_minutes = (ut * 60.0).round() as i64;
        let mut day = date;
        if total_minutes >= 24 * 60 {
            total_minutes -= 24 * 60;
            day = day.succ_opt()?;
        }

        let naive = day.and_hms_opt((total_minutes / 60) as u32, (total_minutes % 60) as u32, 0)?;
        Some(Utc.from_utc_datetime(&naive).with_timezone(&Local))
    }
}

/// Day-over-day direction of a sun event.
///
/// Samples up to five subsequent days, shifting each sample back by its day
/// offset so only the time of day is compared. The first sample that differs
/// from `reference` decides the sign; five identical samples mean flat. The
/// magnitude is scaled by 1/5 so the result lies in `{-0.2, 0.0, 0.2}`.
pub fn trend_of(
    reference: DateTime<Local>,
    mut sample: impl FnMut(NaiveDate) -> Option<DateTime<Local>>,
) -> f32 {
    let base = reference.date_naive();
    for i in 0..TREND_DAYS {
        let Some(date) = base.checked_add_signed(Duration::days(i)) else {
            break;
        };
        let Some(instant) = sample(date) else {
            break;
        };
        let shifted = instant - Duration::days(i);
        match shifted.cmp(&reference) {
            Ordering::Less => return -1.0 / TREND_DAYS as f32,
            Ordering::Greater => return 1.0 / TREND_DAYS as f32,
            Ordering::Equal => {}
        }
    }
    0.0
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}
