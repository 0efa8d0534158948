use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    error::{HabitError, StorageError},
    habit::{self, Habit, HabitId, HabitStats},
    observer::HabitObserver,
    stats,
    storage::{MemoryStorage, SnapshotStorage},
    summary::{DailySummary, DashboardView},
};

/// Key the habit snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "habit-tracker-habits";

/// Authoritative habit collection. All mutations go through this type and
/// are written to storage before the call returns.
pub struct HabitStore {
    habits: Vec<Habit>,
    storage: Box<dyn SnapshotStorage>,
    storage_key: String,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn HabitObserver>>,
}

pub struct HabitStoreBuilder {
    storage: Option<Box<dyn SnapshotStorage>>,
    storage_key: String,
    clock: Option<Box<dyn Clock>>,
    observers: Vec<Box<dyn HabitObserver>>,
}

impl HabitStoreBuilder {
    pub fn new() -> Self {
        Self {
            storage: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            clock: None,
            observers: Vec::new(),
        }
    }

    pub fn with_storage(mut self, storage: impl SnapshotStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn with_observer(mut self, observer: impl HabitObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Builds the store and loads the persisted snapshot. Never fails: an
    /// unreadable snapshot starts an empty collection.
    pub fn build(self) -> HabitStore {
        let mut store = HabitStore {
            habits: Vec::new(),
            storage: self
                .storage
                .unwrap_or_else(|| Box::new(MemoryStorage::new())),
            storage_key: self.storage_key,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            observers: self.observers,
        };
        store.load();
        store
    }
}

impl Default for HabitStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitStore {
    pub fn builder() -> HabitStoreBuilder {
        HabitStoreBuilder::new()
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id() == id)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Adds a habit with no completions and returns its id. The name is
    /// trimmed; names that are blank after trimming are rejected.
    pub fn add_habit(&mut self, name: &str, emoji: &str) -> Result<HabitId, HabitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyName);
        }
        let habit = Habit::new(name.to_string(), emoji.to_string(), self.clock.now());
        let id = habit.id().clone();
        debug!(%id, habit_name = name, "adding habit");
        self.habits.push(habit);
        self.commit();
        Ok(id)
    }

    /// Removes and returns the habit; unknown ids are ignored.
    pub fn remove_habit(&mut self, id: &HabitId) -> Option<Habit> {
        let removed = self
            .habits
            .iter()
            .position(|habit| habit.id() == id)
            .map(|idx| self.habits.remove(idx));
        debug!(%id, removed = removed.is_some(), "removing habit");
        self.commit();
        removed
    }

    /// Marks or unmarks today for the habit and returns the new state.
    /// Unknown ids leave the collection untouched and return `None`.
    pub fn toggle_today(&mut self, id: &HabitId) -> Option<bool> {
        let today = self.clock.today();
        let completed = self
            .habits
            .iter_mut()
            .find(|habit| habit.id() == id)
            .map(|habit| habit.toggle(today));
        debug!(%id, %today, ?completed, "toggled habit");
        self.commit();
        completed
    }

    pub fn is_completed_today(&self, habit: &Habit) -> bool {
        habit.is_completed_on(self.clock.today())
    }

    pub fn current_streak(&self, habit: &Habit) -> u32 {
        stats::current_streak(habit.completed_dates(), self.clock.today())
    }

    pub fn stats(&self, habit: &Habit) -> HabitStats {
        stats::compute_stats(habit.completed_dates(), self.clock.today())
    }

    pub fn summary(&self) -> DailySummary {
        DailySummary::for_day(&self.habits, self.clock.today())
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView::build(&self.habits, self.clock.today())
    }
}

impl HabitStore {
    fn load(&mut self) {
        self.habits = match self.storage.read(&self.storage_key) {
            Ok(Some(raw)) => match habit::decode_snapshot(&raw) {
                Ok(habits) => {
                    info!(key = %self.storage_key, count = habits.len(), "loaded habit snapshot");
                    habits
                }
                Err(err) => {
                    warn!(key = %self.storage_key, %err, "discarding unreadable habit snapshot");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!(key = %self.storage_key, "no habit snapshot yet");
                Vec::new()
            }
            Err(err) => {
                warn!(key = %self.storage_key, %err, "unable to read habit snapshot");
                Vec::new()
            }
        };
    }

    /// Persist the full collection and notify observers. Write failures keep
    /// the in-memory state.
    fn commit(&self) {
        if let Err(err) = self.persist() {
            warn!(key = %self.storage_key, %err, "failed to persist habit snapshot");
        }
        for observer in &self.observers {
            observer.habits_changed(&self.habits);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = habit::encode_snapshot(&self.habits)?;
        self.storage.write(&self.storage_key, &raw)
    }
}
