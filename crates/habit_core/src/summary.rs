use chrono::NaiveDate;
use serde::Serialize;

use crate::date;
use crate::habit::{Habit, HabitStats};
use crate::stats;

/// Today's progress across all habits.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub completed_today: usize,
    pub total_habits: usize,
}

impl DailySummary {
    pub fn for_day(habits: &[Habit], today: NaiveDate) -> Self {
        Self {
            completed_today: habits
                .iter()
                .filter(|habit| habit.is_completed_on(today))
                .count(),
            total_habits: habits.len(),
        }
    }

    /// An empty list is never "all completed".
    pub fn all_completed(&self) -> bool {
        self.total_habits > 0 && self.completed_today == self.total_habits
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_habits == 0 {
            return 0.0;
        }
        self.completed_today as f64 / self.total_habits as f64
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitRow {
    pub habit: Habit,
    pub completed_today: bool,
    pub stats: HabitStats,
}

pub fn habit_rows(habits: &[Habit], today: NaiveDate) -> Vec<HabitRow> {
    habits
        .iter()
        .map(|habit| HabitRow {
            habit: habit.clone(),
            completed_today: habit.is_completed_on(today),
            stats: stats::compute_stats(habit.completed_dates(), today),
        })
        .collect()
}

/// Everything the daily screen renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub heading: String,
    pub summary: DailySummary,
    pub all_completed: bool,
    pub rows: Vec<HabitRow>,
}

impl DashboardView {
    pub fn build(habits: &[Habit], today: NaiveDate) -> Self {
        let summary = DailySummary::for_day(habits, today);
        Self {
            heading: date::format_heading(today),
            summary,
            all_completed: summary.all_completed(),
            rows: habit_rows(habits, today),
        }
    }
}
