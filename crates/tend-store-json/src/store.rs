//! [`JsonStore`], the single-file JSON implementation of [`HabitStore`].

use std::{
  io::ErrorKind,
  path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tend_core::{
  habit::{Habit, HabitPatch, NewHabit},
  store::HabitStore,
};

use crate::{Error, Result};

// ─── Document ────────────────────────────────────────────────────────────────

/// The on-disk shape: a single object holding the full habit list. This is
/// the sole unit of durable storage; there is no per-record file or secondary
/// index.
#[derive(Debug, Serialize, Deserialize)]
struct HabitDocument {
  habits: Vec<Habit>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A habit store backed by a single JSON file.
///
/// The in-memory index is authoritative between saves. It is keyed by habit
/// id and enumerates in insertion order. Every mutating operation applies the
/// change in memory, then rewrites the whole document before returning; a
/// failed save therefore leaves memory ahead of disk until the next
/// successful save or a reload.
///
/// One process, one instance per path. Two instances pointed at the same
/// file can silently overwrite each other's saves; that mode is unsupported.
#[derive(Debug)]
pub struct JsonStore {
  path:   PathBuf,
  habits: IndexMap<Uuid, Habit>,
}

impl JsonStore {
  /// Open a store bound to `path` and perform the initial load.
  ///
  /// This is the only construction path: a `JsonStore` that has not loaded
  /// its backing file is never observable. A missing file is a first run,
  /// not an error, and the file is not created until the first save.
  pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let mut store = Self {
      path:   path.into(),
      habits: IndexMap::new(),
    };
    store.load().await?;
    Ok(store)
  }

  /// The path of the backing file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Rebuild the in-memory index from the backing file.
  async fn load(&mut self) -> Result<()> {
    let bytes = match tokio::fs::read(&self.path).await {
      Ok(bytes) => bytes,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        tracing::debug!(
          path = %self.path.display(),
          "no habit file yet, starting empty"
        );
        self.habits = IndexMap::new();
        return Ok(());
      }
      Err(err) => return Err(err.into()),
    };

    let doc: HabitDocument =
      serde_json::from_slice(&bytes).map_err(|source| Error::Corrupt {
        path: self.path.clone(),
        source,
      })?;

    // Keyed by id; a duplicate id later in the file wins over an earlier
    // one, the same last-write-wins rule the in-memory index applies.
    self.habits = doc
      .habits
      .into_iter()
      .map(|habit| (habit.id, habit))
      .collect();

    tracing::debug!(
      path = %self.path.display(),
      habits = self.habits.len(),
      "loaded habit file"
    );
    Ok(())
  }

  /// Serialise the full collection and atomically replace the backing file.
  ///
  /// Writes to a `.tmp` sibling, then renames over the target, so the target
  /// path always holds a complete document. Rename is only atomic within a
  /// single volume; the temp file lives next to the target for that reason.
  async fn save(&self) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }

    let doc = HabitDocument {
      habits: self.habits.values().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&doc)?;

    let tmp = tmp_path(&self.path);
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, &self.path).await?;

    tracing::debug!(
      path = %self.path.display(),
      habits = self.habits.len(),
      "saved habit file"
    );
    Ok(())
  }
}

/// The temporary sibling written before each rename: the target path with
/// `.tmp` appended.
fn tmp_path(path: &Path) -> PathBuf {
  let mut tmp = path.as_os_str().to_owned();
  tmp.push(".tmp");
  PathBuf::from(tmp)
}

// ─── HabitStore impl ─────────────────────────────────────────────────────────

impl HabitStore for JsonStore {
  type Error = Error;

  async fn add_habit(&mut self, input: NewHabit) -> Result<Habit> {
    let habit = Habit {
      id:          input.id.unwrap_or_else(Uuid::new_v4),
      name:        input.name,
      description: input.description,
      frequency:   input.frequency,
      completions: Vec::new(),
      created_at:  input.created_at.unwrap_or_else(Utc::now),
    };

    self.habits.insert(habit.id, habit.clone());
    self.save().await?;
    Ok(habit)
  }

  async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>> {
    Ok(self.habits.get(&id).cloned())
  }

  async fn list_habits(&self) -> Result<Vec<Habit>> {
    Ok(self.habits.values().cloned().collect())
  }

  async fn update_habit(
    &mut self,
    id: Uuid,
    patch: HabitPatch,
  ) -> Result<Habit> {
    let habit = self.habits.get_mut(&id).ok_or(Error::HabitNotFound(id))?;

    if let Some(name) = patch.name {
      habit.name = name;
    }
    if let Some(description) = patch.description {
      habit.description = Some(description);
    }
    if let Some(frequency) = patch.frequency {
      habit.frequency = frequency;
    }

    let updated = habit.clone();
    self.save().await?;
    Ok(updated)
  }

  async fn delete_habit(&mut self, id: Uuid) -> Result<bool> {
    // shift_remove keeps the remaining records in insertion order.
    if self.habits.shift_remove(&id).is_none() {
      return Ok(false);
    }
    self.save().await?;
    Ok(true)
  }

  async fn log_completion(&mut self, id: Uuid, date: NaiveDate) -> Result<Habit> {
    let habit = self.habits.get_mut(&id).ok_or(Error::HabitNotFound(id))?;

    // Already logged for that date: succeed without touching the file.
    if habit.completions.contains(&date) {
      return Ok(habit.clone());
    }

    habit.completions.push(date);
    let updated = habit.clone();
    self.save().await?;
    Ok(updated)
  }
}
