use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::advice::{AdviceInput, DayPart};
use crate::models::{FieldError, NextActionRequest};
use crate::session_memo::MAX_SESSION_ID_LEN;
use crate::timezone::{local_time_in_zone, parse_clock_time};

pub const MIN_AGE_WEEKS: i64 = 6;
pub const MAX_AGE_WEEKS: i64 = 104;
pub const MAX_NOTES_CHARS: usize = 2_000;

#[derive(Debug, Error)]
#[error("request failed validation: {}", summarize(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub input: AdviceInput,
    pub session_id: Option<String>,
}

#[derive(Default)]
struct FieldErrors {
    fields: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

/// Checks every field and reports all failures at once. `now` is only read
/// when the day-part has to come from `time_zone`.
pub fn validate_next_action(
    req: &NextActionRequest,
    now: DateTime<Utc>,
) -> Result<ValidatedRequest, ValidationError> {
    let mut errors = FieldErrors::default();

    let age_weeks = if (MIN_AGE_WEEKS..=MAX_AGE_WEEKS).contains(&req.puppy_age_weeks) {
        u32::try_from(req.puppy_age_weeks).ok()
    } else {
        errors.push(
            "puppy_age_weeks",
            format!("must be between {MIN_AGE_WEEKS} and {MAX_AGE_WEEKS}"),
        );
        None
    };

    let potty_hours = non_negative(&mut errors, "hours_since_last_potty", req.hours_since_last_potty);
    let meal_hours = non_negative(&mut errors, "hours_since_last_meal", req.hours_since_last_meal);
    let activity_minutes = req
        .minutes_since_last_activity
        .map(|minutes| non_negative(&mut errors, "minutes_since_last_activity", minutes));

    let day_part = resolve_day_part(&mut errors, req, now);

    let notes = req.notes.clone().unwrap_or_default();
    if notes.chars().count() > MAX_NOTES_CHARS {
        errors.push("notes", format!("must be at most {MAX_NOTES_CHARS} characters"));
    }

    let session_id = match req.session_id.as_deref() {
        Some(raw) => match normalize_session_id(raw) {
            Some(normalized) => Some(normalized),
            None => {
                errors.push(
                    "session_id",
                    format!(
                        "must be 1-{MAX_SESSION_ID_LEN} characters of letters, digits, '-', '_' or '.'"
                    ),
                );
                None
            }
        },
        None => None,
    };

    let (Some(age_weeks), Some(potty_hours), Some(meal_hours), Some(day_part)) =
        (age_weeks, potty_hours, meal_hours, day_part)
    else {
        return Err(ValidationError {
            fields: errors.fields,
        });
    };
    if !errors.fields.is_empty() {
        return Err(ValidationError {
            fields: errors.fields,
        });
    }

    let minutes_since_last_activity = match activity_minutes {
        Some(Some(minutes)) => minutes,
        _ => potty_hours.min(meal_hours) * 60.0,
    };

    Ok(ValidatedRequest {
        input: AdviceInput {
            age_weeks,
            day_part,
            hours_since_last_potty: potty_hours,
            hours_since_last_meal: meal_hours,
            minutes_since_last_activity,
            notes,
            mood: req.caregiver_mood,
        },
        session_id,
    })
}

fn non_negative(errors: &mut FieldErrors, field: &str, value: f64) -> Option<f64> {
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        errors.push(field, "must be a finite number greater than or equal to 0");
        None
    }
}

fn resolve_day_part(
    errors: &mut FieldErrors,
    req: &NextActionRequest,
    now: DateTime<Utc>,
) -> Option<DayPart> {
    if let Some(raw) = req.local_time.as_deref() {
        return match parse_clock_time(raw) {
            Some(time) => Some(DayPart::from_time(time)),
            None => {
                errors.push("local_time", "must be a 24-hour time in HH:MM format");
                None
            }
        };
    }

    if let Some(day_part) = req.time_of_day {
        return Some(day_part);
    }

    if let Some(zone) = req.time_zone.as_deref() {
        return match local_time_in_zone(now, zone) {
            Some(time) => Some(DayPart::from_time(time)),
            None => {
                errors.push("time_zone", "must be a valid IANA time zone name");
                None
            }
        };
    }

    errors.push(
        "local_time",
        "is required unless time_of_day or time_zone is provided",
    );
    None
}

pub fn normalize_session_id(raw: &str) -> Option<String> {
    normalize_opaque_id(raw, MAX_SESSION_ID_LEN)
}

/// Trims `raw` and accepts 1..=`max_len` bytes of `[A-Za-z0-9._-]`. Used for
/// caller-chosen identifiers such as session and request ids.
pub fn normalize_opaque_id(raw: &str, max_len: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > max_len {
        return None;
    }

    let valid = trimmed
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.'));
    valid.then(|| trimmed.to_string())
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|field| field.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
