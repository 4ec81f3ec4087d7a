//! Human-readable report: ASCII scene, current conditions, forecast tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseResult};
use std::fmt::Write;
use tracing::debug;

use crate::{
    condition::WeatherKind,
    model::{DailySeries, DailyUnits, HourlySeries, HourlyUnits, ResolvedLocation, WeatherSnapshot},
};

pub const HOURLY_LIMIT: usize = 24;
pub const DAILY_LIMIT: usize = 7;

const HOURLY_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DAILY_FORMAT: &str = "%Y-%m-%d";

/// Which forecast tables to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub hourly: bool,
    pub daily: bool,
}

impl RenderOptions {
    pub fn new(hourly: bool, daily: bool) -> Self {
        Self { hourly, daily }
    }
}

/// Render the full report.
///
/// A requested table the service did not return is skipped silently.
pub fn render(snapshot: &WeatherSnapshot, location: &ResolvedLocation, opts: RenderOptions) -> String {
    let mut out = String::new();
    write_current(&mut out, snapshot, location);

    if let Some(hourly) = snapshot.hourly.as_ref().filter(|_| opts.hourly) {
        let units = snapshot.hourly_units.clone().unwrap_or_default();
        write_hourly(&mut out, hourly, &units);
    }

    if let Some(daily) = snapshot.daily.as_ref().filter(|_| opts.daily) {
        let units = snapshot.daily_units.clone().unwrap_or_default();
        write_daily(&mut out, daily, &units);
    }

    out
}

// Writing into a String cannot fail, so the fmt::Results below are dropped.
fn write_current(out: &mut String, snapshot: &WeatherSnapshot, location: &ResolvedLocation) {
    let c = &snapshot.current;
    let u = &snapshot.current_units;
    let kind = WeatherKind::from_code(c.weather_code);

    let _ = writeln!(out, "\n{}", kind.ascii_art());
    let _ = writeln!(out, "📍 Location: {}", location.label());
    let _ = writeln!(
        out,
        "🌡️  Temperature: {:.1}{} (feels like {:.1}{})",
        c.temperature, u.temperature, c.apparent_temperature, u.apparent_temperature
    );
    let _ = writeln!(out, "💧 Humidity: {:.0}{}", c.humidity, u.humidity);
    let _ = writeln!(out, "🌧️  Precipitation: {:.1}{}", c.precipitation, u.precipitation);
    let _ = writeln!(
        out,
        "💨 Wind: {:.1}{} at {:.0}°",
        c.wind_speed, u.wind_speed, c.wind_direction
    );
    let _ = writeln!(out, "⏰ Updated: {}\n", c.time);
}

fn write_hourly(out: &mut String, hourly: &HourlySeries, units: &HourlyUnits) {
    let _ = writeln!(out, "🕐 24-Hour Forecast:");
    let _ = writeln!(out, "{}", "─".repeat(20));

    let rows = hourly
        .time
        .iter()
        .zip(&hourly.temperature)
        .zip(&hourly.weather_code)
        .zip(&hourly.precipitation)
        .take(HOURLY_LIMIT);

    for (((time, temp), code), precip) in rows {
        let at = parse_or_epoch(time, HOURLY_FORMAT);
        let _ = writeln!(
            out,
            "{} {} {:.1}{} ({:.1}mm)",
            at.format("%H:%M"),
            WeatherKind::from_code(*code).icon(),
            temp,
            units.temperature,
            precip
        );
    }
    out.push('\n');
}

fn write_daily(out: &mut String, daily: &DailySeries, units: &DailyUnits) {
    let _ = writeln!(out, "📅 7-Day Forecast:");
    let _ = writeln!(out, "{}", "─".repeat(17));

    let rows = daily
        .time
        .iter()
        .zip(&daily.temperature_max)
        .zip(&daily.temperature_min)
        .zip(&daily.weather_code)
        .zip(&daily.precipitation_sum)
        .take(DAILY_LIMIT);

    for ((((time, max), min), code), precip) in rows {
        let day = parse_or_epoch(time, DAILY_FORMAT);
        let _ = writeln!(
            out,
            "{} {} {:.1}/{:.1}{} ({:.1}mm)",
            day.format("%a %b %-d"),
            WeatherKind::from_code(*code).icon(),
            max,
            min,
            units.temperature_max,
            precip
        );
    }
    out.push('\n');
}

/// Parse a forecast timestamp: the service's compact format first, then RFC 3339.
///
/// `compact` may be a date-only format, in which case midnight is assumed.
pub fn parse_forecast_time(raw: &str, compact: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, compact)
        .or_else(|_| NaiveDate::parse_from_str(raw, compact).map(|d| d.and_time(Default::default())))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_local()))
}

fn parse_or_epoch(raw: &str, compact: &str) -> NaiveDateTime {
    parse_forecast_time(raw, compact).unwrap_or_else(|err| {
        debug!(raw, %err, "unparseable forecast timestamp, showing epoch");
        NaiveDateTime::default()
    })
}
