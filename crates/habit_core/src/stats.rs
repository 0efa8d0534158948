//! Streak and completion statistics over a habit's completion days.
//!
//! Every function here is pure: "today" is passed in rather than read from a
//! clock, and duplicate days are collapsed before scanning so that only a gap
//! of exactly one day extends a run.

use chrono::NaiveDate;

use crate::date;
use crate::habit::HabitStats;

/// Current streak length at which a habit counts as "on fire".
pub const HOT_STREAK_DAYS: u32 = 7;

/// Length of the unbroken run ending at the most recent completion, or 0 when
/// that completion is neither `today` nor the day before.
pub fn current_streak<'a, I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut days = distinct_days(dates);
    days.reverse();

    let Some(&most_recent) = days.first() else {
        return 0;
    };
    if !date::is_today(most_recent, today) && !date::is_yesterday(most_recent, today) {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if date::days_between(pair[0], pair[1]) != 1 {
            break;
        }
        streak += 1;
    }
    streak
}

/// Best run of consecutive days ever recorded.
pub fn longest_streak<'a, I>(dates: I) -> u32
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let days = distinct_days(dates);
    if days.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut running = 1;
    for pair in days.windows(2) {
        if date::days_between(pair[1], pair[0]) == 1 {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 1;
        }
    }
    longest
}

pub fn compute_stats<'a, I>(dates: I, today: NaiveDate) -> HabitStats
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let days = distinct_days(dates);
    if days.is_empty() {
        return HabitStats::default();
    }
    HabitStats {
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&days),
        total_completions: u32::try_from(days.len()).unwrap_or(u32::MAX),
    }
}

/// Ascending, deduplicated copy of `dates`.
fn distinct_days<'a, I>(dates: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut days: Vec<NaiveDate> = dates.into_iter().copied().collect();
    days.sort_unstable();
    days.dedup();
    days
}
