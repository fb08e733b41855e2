// src/validate.rs

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::DATE_FORMAT;

/// A submission that passed validation: trimmed text fields, parsed date.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

/// What the user submitted, kept so a rejected form can be shown again
/// without losing input. `title` and `content` are the trimmed values,
/// `date` is exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub date: String,
    pub content: String,
}

/// A rejected submission. Never persisted; the caller redisplays the draft.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// One or more required fields were blank.
    #[error("Title, date and content are all required.")]
    MissingField(Draft),

    /// The date text was present but is not a real YYYY-MM-DD date.
    #[error("Invalid date {:?}, expected YYYY-MM-DD.", .0.date)]
    InvalidDateFormat(Draft),
}

impl Rejection {
    pub fn draft(&self) -> &Draft {
        match self {
            Rejection::MissingField(draft) | Rejection::InvalidDateFormat(draft) => draft,
        }
    }
}

/// Checks a raw `(title, date, content)` submission and normalizes it.
///
/// The required-field check runs first: an empty date string is reported as
/// a missing field, not as a malformed date.
pub fn validate(title: &str, date: &str, content: &str) -> Result<ValidEntry, Rejection> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() || date.is_empty() || content.is_empty() {
        return Err(Rejection::MissingField(Draft {
            title: title.to_string(),
            date: date.to_string(),
            content: content.to_string(),
        }));
    }

    // chrono accepts unpadded components like "2024-6-15"; the round-trip
    // comparison pins the input to the zero-padded form.
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) if parsed.format(DATE_FORMAT).to_string() == date => Ok(ValidEntry {
            title: title.to_string(),
            date: parsed,
            content: content.to_string(),
        }),
        _ => Err(Rejection::InvalidDateFormat(Draft {
            title: title.to_string(),
            date: date.to_string(),
            content: content.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_is_trimmed_and_parsed() {
        let valid = validate("  Trip  ", "2024-06-15", "\nWent hiking\n").unwrap();
        assert_eq!(valid.title, "Trip");
        assert_eq!(valid.content, "Went hiking");
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_blank_title_is_missing_field() {
        let err = validate("   ", "2024-06-15", "x").unwrap_err();
        assert!(matches!(err, Rejection::MissingField(_)));
    }

    #[test]
    fn test_blank_content_is_missing_field() {
        let err = validate("x", "2024-06-15", " \t ").unwrap_err();
        assert!(matches!(err, Rejection::MissingField(_)));
    }

    #[test]
    fn test_empty_date_is_missing_field_not_bad_format() {
        // Missing field takes priority over date parsing.
        let err = validate("x", "", "x").unwrap_err();
        assert!(matches!(err, Rejection::MissingField(_)));
    }

    #[test]
    fn test_missing_field_reported_even_with_bad_date() {
        let err = validate("", "not-a-date", "x").unwrap_err();
        assert!(matches!(err, Rejection::MissingField(_)));
    }

    #[test]
    fn test_bad_dates_are_rejected() {
        for bad in [
            "2024-13-01",
            "not-a-date",
            "2024/01/01",
            "15-06-2024",
            "2024-02-30",
            "2024-6-15",
        ] {
            let err = validate("x", bad, "x").unwrap_err();
            assert!(
                matches!(err, Rejection::InvalidDateFormat(_)),
                "{:?} should be an invalid date",
                bad
            );
        }
    }

    #[test]
    fn test_leap_day_only_on_leap_years() {
        assert!(validate("x", "2024-02-29", "x").is_ok());
        let err = validate("x", "2023-02-29", "x").unwrap_err();
        assert!(matches!(err, Rejection::InvalidDateFormat(_)));
    }

    #[test]
    fn test_rejection_keeps_submitted_values() {
        let err = validate("  Trip ", "15-06-2024", " hike ").unwrap_err();
        let draft = err.draft();
        assert_eq!(draft.title, "Trip");
        assert_eq!(draft.date, "15-06-2024"); // raw, exactly as typed
        assert_eq!(draft.content, "hike");
    }
}
