use std::path::PathBuf;

use clap::{Parser, Subcommand};

use habit_core::habit::DEFAULT_EMBLEM;

#[derive(Debug, Parser)]
#[command(name = "habits", about = "Track daily habits and streaks", version)]
pub struct Cli {
    /// Directory holding the habit snapshot (overrides HABITS_DATA_DIR).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show today's habits with streaks.
    List,
    /// Add a new habit.
    Add {
        name: String,
        #[arg(long, short, default_value = DEFAULT_EMBLEM)]
        emoji: String,
    },
    /// Delete a habit.
    Remove { id: String },
    /// Mark or unmark a habit as done today.
    Toggle { id: String },
    /// Show statistics for one habit.
    Stats { id: String },
    /// Print the emblem palette.
    Emojis,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_listing() {
        let cli = Cli::try_parse_from(["habits"]).expect("parse");
        assert_eq!(cli.command(), Command::List);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn add_uses_default_emblem() {
        let cli = Cli::try_parse_from(["habits", "add", "Read a chapter"]).expect("parse");
        assert_eq!(
            cli.command(),
            Command::Add {
                name: "Read a chapter".into(),
                emoji: DEFAULT_EMBLEM.into(),
            }
        );
    }

    #[test]
    fn data_dir_flag_is_global() {
        let cli = Cli::try_parse_from(["habits", "toggle", "abc", "--data-dir", "/tmp/h"])
            .expect("parse");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/h")));
        assert_eq!(cli.command(), Command::Toggle { id: "abc".into() });
    }
}
