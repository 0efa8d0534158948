use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emblems offered when creating a habit. The first entry is the default.
pub const EMBLEM_PALETTE: [&str; 12] = [
    "💪", "📚", "🧘", "💧", "🏃", "😴", "🥗", "✍️", "🎯", "🌅", "💊", "🧹",
];

pub const DEFAULT_EMBLEM: &str = EMBLEM_PALETTE[0];

/// Opaque habit identity. Snapshots may carry ids produced by older versions,
/// so any string is accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for HabitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked daily habit. Fields are read-only outside the crate; the store
/// is the only writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    id: HabitId,
    name: String,
    emoji: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    pub(crate) fn new(name: String, emoji: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: HabitId::generate(),
            name,
            emoji,
            created_at,
            completed_dates: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.completed_dates
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Flips completion for `day` and returns the new state.
    pub(crate) fn toggle(&mut self, day: NaiveDate) -> bool {
        if self.completed_dates.remove(&day) {
            false
        } else {
            self.completed_dates.insert(day);
            true
        }
    }
}

/// Derived statistics; never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
}

impl HabitStats {
    /// Streaks at or above [`crate::stats::HOT_STREAK_DAYS`] get highlighted.
    pub fn is_hot(&self) -> bool {
        self.current_streak >= crate::stats::HOT_STREAK_DAYS
    }
}

/// Decode a persisted snapshot.
pub fn decode_snapshot(raw: &str) -> serde_json::Result<Vec<Habit>> {
    serde_json::from_str(raw)
}

/// Encode the full collection as a snapshot.
pub fn encode_snapshot(habits: &[Habit]) -> serde_json::Result<String> {
    serde_json::to_string(habits)
}
