use chrono::{Local, NaiveDate};

use crate::error::HabitError;

/// Storage format for calendar days (`yyyy-MM-dd`).
pub const DAY_FORMAT: &str = "%Y-%m-%d";

const HEADING_FORMAT: &str = "%A, %B %-d";

/// The current calendar day in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn parse_day(input: &str) -> Result<NaiveDate, HabitError> {
    NaiveDate::parse_from_str(input.trim(), DAY_FORMAT)
        .map_err(|_| HabitError::InvalidDay(input.to_string()))
}

/// Whole calendar days from `earlier` to `later`; negative when `later` precedes `earlier`.
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

pub fn is_today(day: NaiveDate, today: NaiveDate) -> bool {
    day == today
}

pub fn is_yesterday(day: NaiveDate, today: NaiveDate) -> bool {
    today.pred_opt() == Some(day)
}

/// Long-form heading shown above the daily list, e.g. `Sunday, October 18`.
pub fn format_heading(day: NaiveDate) -> String {
    day.format(HEADING_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_and_parses_storage_days() {
        assert_eq!(format_day(day(2024, 1, 3)), "2024-01-03");
        assert_eq!(parse_day("2024-01-03").unwrap(), day(2024, 1, 3));
        assert_eq!(parse_day(" 2024-12-31 ").unwrap(), day(2024, 12, 31));
    }

    #[test]
    fn rejects_malformed_days() {
        assert!(matches!(
            parse_day("03/01/2024"),
            Err(HabitError::InvalidDay(raw)) if raw == "03/01/2024"
        ));
        assert!(parse_day("2024-02-30").is_err());
    }

    #[test]
    fn day_difference_crosses_month_and_year_boundaries() {
        assert_eq!(days_between(day(2024, 3, 1), day(2024, 2, 28)), 2);
        assert_eq!(days_between(day(2025, 1, 1), day(2024, 12, 31)), 1);
        assert_eq!(days_between(day(2024, 1, 1), day(2024, 1, 3)), -2);
    }

    #[test]
    fn today_and_yesterday_checks() {
        let today = day(2024, 1, 1);
        assert!(is_today(today, today));
        assert!(is_yesterday(day(2023, 12, 31), today));
        assert!(!is_yesterday(today, today));
        assert!(!is_yesterday(day(2024, 1, 2), today));
    }

    #[test]
    fn heading_uses_weekday_and_month_names() {
        assert_eq!(format_heading(day(2026, 10, 18)), "Sunday, October 18");
        assert_eq!(format_heading(day(2024, 1, 3)), "Wednesday, January 3");
    }
}
