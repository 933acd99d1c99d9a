//! The `HabitStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tend-store-json`).
//! Higher layers (`tend-cli`) depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::habit::{Habit, HabitPatch, NewHabit};

/// Abstraction over a Tend habit store backend.
///
/// Reads take `&self`; every mutating operation takes `&mut self` and has
/// persisted its effect durably before the returned future resolves. Backends
/// perform no internal locking: exclusive access is expressed in the
/// receiver, and callers are expected to await each call before issuing the
/// next.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait HabitStore: Send {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and persist a new habit. `id` and `created_at` default when not
  /// supplied by the caller; the completion log starts empty. Returns the
  /// stored record.
  fn add_habit(
    &mut self,
    input: NewHabit,
  ) -> impl Future<Output = Result<Habit, Self::Error>> + Send + '_;

  /// Retrieve a habit by id. Returns `None` if not found.
  fn get_habit(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Habit>, Self::Error>> + Send + '_;

  /// List every habit, in the order the records entered the store.
  fn list_habits(
    &self,
  ) -> impl Future<Output = Result<Vec<Habit>, Self::Error>> + Send + '_;

  /// Merge `patch` over an existing habit and persist the result.
  ///
  /// `id` and `created_at` cannot be changed by a patch. Returns an error if
  /// `id` is unknown.
  fn update_habit(
    &mut self,
    id: Uuid,
    patch: HabitPatch,
  ) -> impl Future<Output = Result<Habit, Self::Error>> + Send + '_;

  /// Remove a habit. Returns `false`, with no side effect, if `id` is
  /// unknown.
  fn delete_habit(
    &mut self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Record that a habit was done on `date`.
  ///
  /// Idempotent: a date already present in the completion log is a no-op
  /// that does not touch the backing storage. Returns an error if `id` is
  /// unknown.
  fn log_completion(
    &mut self,
    id: Uuid,
    date: NaiveDate,
  ) -> impl Future<Output = Result<Habit, Self::Error>> + Send + '_;
}
