//! Date input parsing and display-format conversion.

use crate::domain::task::parse_deadline;
use crate::error::TodoError;
use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};

/// Day-month-year form used in exported files.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Parse a user-supplied deadline relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `DD-MM-YYYY`, `today`, `tomorrow`, `+Nd`, `+Nw`
/// and weekday names (the next such day, never today).
pub fn parse_due(input: &str, today: NaiveDate) -> Result<NaiveDate, TodoError> {
    let input = input.trim().to_lowercase();
    let invalid = || TodoError::InvalidDate(input.clone());

    if let Some(date) = parse_deadline(&input).or_else(|| parse_display(&input)) {
        return Ok(date);
    }

    match input.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return today.succ_opt().ok_or_else(invalid),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('+') {
        let unit = rest.chars().last().ok_or_else(invalid)?;
        let count: i64 = rest[..rest.len() - unit.len_utf8()]
            .parse()
            .map_err(|_| invalid())?;
        let offset = match unit {
            'd' => TimeDelta::try_days(count),
            'w' => TimeDelta::try_weeks(count),
            _ => None,
        }
        .ok_or_else(invalid)?;
        return today.checked_add_signed(offset).ok_or_else(invalid);
    }

    weekday(&input)
        .and_then(|target| next_weekday(today, target))
        .ok_or_else(invalid)
}

/// Parse `DD-MM-YYYY`.
pub fn parse_display(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_FORMAT).ok()
}

/// Canonical `YYYY-MM-DD` to `DD-MM-YYYY`. `None` if `canonical` is malformed.
pub fn canonical_to_display(canonical: &str) -> Option<String> {
    parse_deadline(canonical).map(|d| d.format(DISPLAY_FORMAT).to_string())
}

fn weekday(s: &str) -> Option<Weekday> {
    let day = match s {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let current = from.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    let ahead = (wanted + 7 - current) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    from.checked_add_days(Days::new(u64::from(ahead)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 5).unwrap() // Wednesday
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn canonical_and_display_input() {
        assert_eq!(parse_due("2025-03-15", today()).unwrap(), date(2025, 3, 15));
        assert_eq!(parse_due("15-03-2025", today()).unwrap(), date(2025, 3, 15));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_due("Today", today()).unwrap(), today());
        assert_eq!(parse_due("tomorrow", today()).unwrap(), date(2025, 2, 6));
    }

    #[test]
    fn relative_offsets() {
        assert_eq!(parse_due("+3d", today()).unwrap(), date(2025, 2, 8));
        assert_eq!(parse_due("+0d", today()).unwrap(), today());
        assert_eq!(parse_due("+2w", today()).unwrap(), date(2025, 2, 19));
    }

    #[test]
    fn weekdays() {
        assert_eq!(parse_due("friday", today()).unwrap(), date(2025, 2, 7));
        assert_eq!(parse_due("mon", today()).unwrap(), date(2025, 2, 10));
        // Same weekday means next week.
        assert_eq!(parse_due("wednesday", today()).unwrap(), date(2025, 2, 12));
    }

    #[test]
    fn invalid_input() {
        assert!(parse_due("", today()).is_err());
        assert!(parse_due("soon", today()).is_err());
        assert!(parse_due("+xd", today()).is_err());
        assert!(parse_due("+3m", today()).is_err());
        assert!(parse_due("+", today()).is_err());
        assert!(parse_due("2025-02-30", today()).is_err());
    }

    #[test]
    fn multibyte_unit_is_rejected() {
        assert!(matches!(parse_due("+é", today()), Err(TodoError::InvalidDate(_))));
        assert!(matches!(parse_due("+3日", today()), Err(TodoError::InvalidDate(_))));
        assert!(parse_due("é", today()).is_err());
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        assert!(matches!(
            parse_due("+200000000000000d", today()),
            Err(TodoError::InvalidDate(_))
        ));
        assert!(parse_due("+9223372036854775807w", today()).is_err());
        assert!(parse_due("+99999999d", today()).is_err());
        assert!(parse_due("tomorrow", NaiveDate::MAX).is_err());
        assert!(parse_due("friday", NaiveDate::MAX).is_err());
    }

    #[test]
    fn display_conversion() {
        assert_eq!(canonical_to_display("2024-07-04").as_deref(), Some("04-07-2024"));
        assert_eq!(
            parse_display("04-07-2024"),
            NaiveDate::from_ymd_opt(2024, 7, 4)
        );
        assert_eq!(canonical_to_display("04-07-2024"), None);
        assert_eq!(parse_display("2024-07-04"), None);
        assert_eq!(parse_display(""), None);
    }
}
