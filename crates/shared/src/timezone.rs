use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;

const CLOCK_TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parses a 24-hour `HH:MM` or `HH:MM:SS` wall-clock time.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    CLOCK_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

pub fn parse_time_zone(value: &str) -> Option<Tz> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<Tz>().ok()
}

/// Wall-clock time in `time_zone` at `now_utc`, or `None` for an unknown zone.
pub fn local_time_in_zone(now_utc: DateTime<Utc>, time_zone: &str) -> Option<NaiveTime> {
    let tz = parse_time_zone(time_zone)?;
    Some(now_utc.with_timezone(&tz).time())
}
