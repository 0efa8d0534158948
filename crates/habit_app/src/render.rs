use std::fmt::Write;

use habit_core::habit::{Habit, HabitStats, EMBLEM_PALETTE};
use habit_core::summary::{DashboardView, HabitRow};

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading);
    let _ = writeln!(out, "Daily Habits");

    if view.rows.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Start building better habits");
        let _ = writeln!(out, "Add your first habit with `habits add <name>`");
        return out;
    }

    let _ = writeln!(
        out,
        "{}/{} completed ({:.0}%)",
        view.summary.completed_today,
        view.summary.total_habits,
        view.summary.progress() * 100.0
    );
    if view.all_completed {
        let _ = writeln!(out, "All habits completed!");
    }
    let _ = writeln!(out);
    for row in &view.rows {
        let _ = writeln!(out, "{}", habit_row(row));
    }
    out
}

pub fn habit_row(row: &HabitRow) -> String {
    let check = if row.completed_today { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{check} {} {}  {}",
        row.habit.emoji(),
        row.habit.name(),
        stats_line(&row.stats)
    );
    if row.stats.current_streak > 0 {
        let flame = if row.stats.is_hot() { "🔥🔥" } else { "🔥" };
        let _ = write!(line, "  {flame} {}", row.stats.current_streak);
    }
    let _ = write!(line, "  ({})", row.habit.id());
    line
}

pub fn stats_line(stats: &HabitStats) -> String {
    let mut line = format!("{} total", stats.total_completions);
    if stats.longest_streak > 0 {
        let _ = write!(line, " · Best: {}d", stats.longest_streak);
    }
    line
}

pub fn habit_detail(habit: &Habit, stats: &HabitStats, completed_today: bool) -> String {
    format!(
        "{} {}\n  created:        {}\n  done today:     {}\n  current streak: {}\n  longest streak: {}\n  completions:    {}\n",
        habit.emoji(),
        habit.name(),
        habit.created_at().format("%Y-%m-%d %H:%M UTC"),
        if completed_today { "yes" } else { "no" },
        stats.current_streak,
        stats.longest_streak,
        stats.total_completions,
    )
}

pub fn palette() -> String {
    EMBLEM_PALETTE.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_line_hides_best_when_never_completed() {
        assert_eq!(stats_line(&HabitStats::default()), "0 total");
        let stats = HabitStats {
            current_streak: 2,
            longest_streak: 5,
            total_completions: 9,
        };
        assert_eq!(stats_line(&stats), "9 total · Best: 5d");
    }

    #[test]
    fn palette_lists_every_emblem() {
        assert_eq!(palette().split(' ').count(), EMBLEM_PALETTE.len());
    }
}
