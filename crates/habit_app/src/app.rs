use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use habit_core::{
    clock::{Clock, SystemClock},
    habit::Habit,
    storage::FileStorage,
    store::DEFAULT_STORAGE_KEY,
    HabitId, HabitStore,
};
use tracing::{debug, info};

use crate::cli::Command;
use crate::render;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub(crate) data_dir: PathBuf,
    pub(crate) storage_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("HABITS_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        if let Ok(key) = std::env::var("HABITS_STORAGE_KEY") {
            let key = key.trim();
            if !key.is_empty() {
                config.storage_key = key.to_string();
            }
        }
        FileStorage::new(&config.data_dir)
            .path_for(&config.storage_key)
            .context("HABITS_STORAGE_KEY is not usable as a file name")?;
        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        info!(path = %dir.display(), "using data directory from command line");
        self.data_dir = dir;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share/habits"))
            .unwrap_or_else(|| PathBuf::from(".habits"));
        Self {
            data_dir,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

pub fn open_store(config: &AppConfig, clock: impl Clock + 'static) -> HabitStore {
    HabitStore::builder()
        .with_storage(FileStorage::new(&config.data_dir))
        .with_storage_key(config.storage_key.clone())
        .with_clock(clock)
        .with_observer(|habits: &[Habit]| {
            debug!(count = habits.len(), "habit snapshot updated");
        })
        .build()
}

pub fn run(config: AppConfig, command: Command) -> Result<()> {
    let mut store = open_store(&config, SystemClock);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut store, command, &mut out)
}

/// Applies one command to the store and writes the user-facing output.
pub fn execute(store: &mut HabitStore, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List => {
            write!(out, "{}", render::dashboard(&store.dashboard()))?;
        }
        Command::Add { name, emoji } => {
            let id = store
                .add_habit(&name, &emoji)
                .with_context(|| format!("cannot add habit `{name}`"))?;
            writeln!(out, "Added {} {} ({id})", emoji, name.trim())?;
        }
        Command::Remove { id } => match store.remove_habit(&HabitId::from(id.as_str())) {
            Some(habit) => writeln!(out, "Removed {} {}", habit.emoji(), habit.name())?,
            None => writeln!(out, "No habit with id {id}")?,
        },
        Command::Toggle { id } => {
            let id = HabitId::from(id);
            match store.toggle_today(&id) {
                Some(done) => {
                    let habit = store.get(&id).context("toggled habit vanished")?;
                    let state = if done { "done" } else { "not done" };
                    writeln!(
                        out,
                        "{} {} marked {state} for {}",
                        habit.emoji(),
                        habit.name(),
                        store.today()
                    )?;
                    if done {
                        let streak = store.current_streak(habit);
                        writeln!(out, "Current streak: {streak}")?;
                    }
                }
                None => writeln!(out, "No habit with id {id}")?,
            }
        }
        Command::Stats { id } => {
            let id = HabitId::from(id);
            match store.get(&id) {
                Some(habit) => {
                    let stats = store.stats(habit);
                    let done = store.is_completed_today(habit);
                    write!(out, "{}", render::habit_detail(habit, &stats, done))?;
                }
                None => writeln!(out, "No habit with id {id}")?,
            }
        }
        Command::Emojis => {
            writeln!(out, "{}", render::palette())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_core::clock::FixedClock;
    use habit_core::date::parse_day;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            data_dir: dir.to_path_buf(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    fn run_on(store: &mut HabitStore, command: Command) -> String {
        let mut out = Vec::new();
        execute(store, command, &mut out).expect("execute");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn add_toggle_and_list_through_commands() {
        let temp = tempdir().expect("tempdir");
        let config = config_in(temp.path());
        let today = parse_day("2024-01-03").unwrap();
        let mut store = open_store(&config, FixedClock::on(today));

        let added = run_on(
            &mut store,
            Command::Add {
                name: "  Read  ".into(),
                emoji: "📚".into(),
            },
        );
        assert!(added.starts_with("Added 📚 Read ("));
        let id = store.habits()[0].id().to_string();

        let toggled = run_on(&mut store, Command::Toggle { id: id.clone() });
        assert!(toggled.contains("marked done for 2024-01-03"));
        assert!(toggled.contains("Current streak: 1"));

        let listing = run_on(&mut store, Command::List);
        assert!(listing.starts_with("Wednesday, January 3\n"));
        assert!(listing.contains("1/1 completed (100%)"));
        assert!(listing.contains("All habits completed!"));
        assert!(listing.contains("[x] 📚 Read"));

        let reopened = open_store(&config, FixedClock::on(today));
        assert_eq!(reopened.habits(), store.habits());
    }

    #[test]
    fn blank_name_is_reported_as_error() {
        let temp = tempdir().expect("tempdir");
        let mut store = open_store(
            &config_in(temp.path()),
            FixedClock::on(parse_day("2024-01-03").unwrap()),
        );
        let mut out = Vec::new();
        let err = execute(
            &mut store,
            Command::Add {
                name: "   ".into(),
                emoji: "💪".into(),
            },
            &mut out,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("must not be empty"));
        assert!(store.habits().is_empty());
    }

    #[test]
    fn unknown_ids_are_reported_not_failed() {
        let temp = tempdir().expect("tempdir");
        let mut store = open_store(
            &config_in(temp.path()),
            FixedClock::on(parse_day("2024-01-03").unwrap()),
        );
        for command in [
            Command::Toggle { id: "nope".into() },
            Command::Remove { id: "nope".into() },
            Command::Stats { id: "nope".into() },
        ] {
            assert_eq!(run_on(&mut store, command), "No habit with id nope\n");
        }
    }

    #[test]
    fn empty_list_shows_onboarding_hint() {
        let temp = tempdir().expect("tempdir");
        let mut store = open_store(
            &config_in(temp.path()),
            FixedClock::on(parse_day("2024-01-03").unwrap()),
        );
        let listing = run_on(&mut store, Command::List);
        assert!(listing.contains("Start building better habits"));
        assert!(!listing.contains("All habits completed!"));
    }
}
