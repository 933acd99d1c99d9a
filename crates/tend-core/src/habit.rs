//! Habit types, the fundamental unit of the Tend store.
//!
//! A habit is a single mutable record. Its metadata can be patched and its
//! completion log grows over time; `id` and `created_at` are fixed at
//! creation and never change afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Frequency ───────────────────────────────────────────────────────────────

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
  Daily,
  Weekly,
  Custom,
}

impl Frequency {
  /// The lowercase form stored in the habit file. Must match the
  /// `rename_all = "lowercase"` serde tags above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Custom => "custom",
    }
  }
}

impl std::fmt::Display for Frequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`Frequency`] from user input.
#[derive(Debug, thiserror::Error)]
#[error("unknown frequency {0:?} (expected daily, weekly, or custom)")]
pub struct ParseFrequencyError(String);

impl std::str::FromStr for Frequency {
  type Err = ParseFrequencyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "daily" => Ok(Self::Daily),
      "weekly" => Ok(Self::Weekly),
      "custom" => Ok(Self::Custom),
      other => Err(ParseFrequencyError(other.to_owned())),
    }
  }
}

// ─── Habit ───────────────────────────────────────────────────────────────────

/// One tracked behaviour and its completion history.
///
/// `completions` is logically a set (the store never records the same date
/// twice), kept in the order the completions were logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
  pub id:          Uuid,
  pub name:        String,
  /// Omitted from the persisted document entirely when not set.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub frequency:   Frequency,
  pub completions: Vec<NaiveDate>,
  /// Set by the store at creation; never changes afterwards.
  pub created_at:  DateTime<Utc>,
}

// ─── NewHabit ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::HabitStore::add_habit`].
///
/// `id` and `created_at` are filled by the store when not supplied; the
/// completion log always starts empty.
#[derive(Debug, Clone)]
pub struct NewHabit {
  pub id:          Option<Uuid>,
  pub name:        String,
  pub description: Option<String>,
  pub frequency:   Frequency,
  pub created_at:  Option<DateTime<Utc>>,
}

impl NewHabit {
  /// Convenience constructor with all optional fields unset.
  pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
    Self {
      id: None,
      name: name.into(),
      description: None,
      frequency,
      created_at: None,
    }
  }
}

// ─── HabitPatch ──────────────────────────────────────────────────────────────

/// Field-wise update for [`crate::store::HabitStore::update_habit`].
///
/// A `None` field leaves the stored value unchanged. Identity, creation time,
/// and the completion log are not patchable; the completion log is only ever
/// touched through `log_completion`.
#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
  pub name:        Option<String>,
  pub description: Option<String>,
  pub frequency:   Option<Frequency>,
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn habit_serialises_with_camel_case_keys() {
    let habit = Habit {
      id:          Uuid::nil(),
      name:        "Read".into(),
      description: None,
      frequency:   Frequency::Weekly,
      completions: vec!["2024-03-15".parse().unwrap()],
      created_at:  Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
    };

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["frequency"], "weekly");
    assert_eq!(json["completions"][0], "2024-03-15");
    assert!(json.get("createdAt").is_some());
    // Absent, not null.
    assert!(json.get("description").is_none());
  }

  #[test]
  fn frequency_parses_from_lowercase_only() {
    assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
    assert_eq!("custom".parse::<Frequency>().unwrap(), Frequency::Custom);
    assert!("Hourly".parse::<Frequency>().is_err());
  }
}
