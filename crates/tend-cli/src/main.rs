//! `tend` — command-line front end for the Tend habit store.
//!
//! # Usage
//!
//! ```
//! tend add "Morning run" --frequency daily
//! tend done <id>
//! tend list
//! ```
//!
//! The store itself lives in `tend-store-json`; this binary only parses
//! arguments and formats records.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tend_core::{
  habit::{Frequency, HabitPatch, NewHabit},
  store::HabitStore,
};
use tend_store_json::JsonStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tend", about = "Track habits in a single JSON file")]
struct Cli {
  /// Path to the habit file (created on first write).
  #[arg(
    long,
    env = "TEND_FILE",
    value_name = "FILE",
    default_value = "~/.tend/habits.json"
  )]
  file: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Add a new habit.
  Add {
    /// Display name of the habit.
    name: String,

    /// daily, weekly, or custom.
    #[arg(short, long, default_value = "daily")]
    frequency: Frequency,

    /// Optional free-form description.
    #[arg(short, long)]
    description: Option<String>,
  },

  /// List every habit.
  List,

  /// Show one habit, including its completion log.
  Show { id: Uuid },

  /// Mark a habit done for a date (today when omitted).
  Done {
    id: Uuid,

    /// Completion date, YYYY-MM-DD.
    #[arg(long)]
    date: Option<NaiveDate>,
  },

  /// Change a habit's name, description, or frequency.
  Edit {
    id: Uuid,

    #[arg(short, long)]
    name: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    frequency: Option<Frequency>,
  },

  /// Delete a habit and its completion log.
  Remove { id: Uuid },
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let path = expand_tilde(&cli.file);

  let mut store = JsonStore::open(&path)
    .await
    .with_context(|| format!("failed to open habit file {}", path.display()))?;

  run(&mut store, cli.command).await
}

// ─── Commands ────────────────────────────────────────────────────────────────

/// Dispatch one subcommand against any store backend.
async fn run<S: HabitStore>(store: &mut S, command: Command) -> anyhow::Result<()> {
  match command {
    Command::Add { name, frequency, description } => {
      let mut input = NewHabit::new(name, frequency);
      input.description = description;
      let habit = store.add_habit(input).await?;
      println!("added {} ({})", habit.name, habit.id);
    }

    Command::List => {
      let habits = store.list_habits().await?;
      if habits.is_empty() {
        println!("no habits yet");
        return Ok(());
      }
      for habit in habits {
        println!(
          "{}  {:<24} {:<7} {} done",
          habit.id,
          habit.name,
          habit.frequency,
          habit.completions.len(),
        );
      }
    }

    Command::Show { id } => {
      let habit = store
        .get_habit(id)
        .await?
        .with_context(|| format!("no habit with id {id}"))?;
      println!("{} ({})", habit.name, habit.id);
      if let Some(description) = &habit.description {
        println!("  {description}");
      }
      println!("  frequency: {}", habit.frequency);
      println!("  since:     {}", habit.created_at.date_naive());
      for date in &habit.completions {
        println!("  done {date}");
      }
    }

    Command::Done { id, date } => {
      let date = date.unwrap_or_else(|| Local::now().date_naive());
      let habit = store.log_completion(id, date).await?;
      println!(
        "{} done on {} ({} total)",
        habit.name,
        date,
        habit.completions.len()
      );
    }

    Command::Edit { id, name, description, frequency } => {
      let patch = HabitPatch { name, description, frequency };
      let habit = store.update_habit(id, patch).await?;
      println!("updated {} ({})", habit.name, habit.id);
    }

    Command::Remove { id } => {
      if store.delete_habit(id).await? {
        println!("removed {id}");
      } else {
        println!("no habit with id {id}");
      }
    }
  }

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
