//! The `ScheduleStore` trait.
//!
//! The trait is implemented by persistence backends (e.g.
//! `timetable-store-sqlite`). Higher layers (`timetable-cli`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::lesson::Lesson;

/// Persistence for a whole lesson collection, stored as a single value.
///
/// There is no partial-update path: every save overwrites the previous
/// collection.
pub trait ScheduleStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the saved collection. A store that has never been written returns
  /// an empty collection, not an error.
  fn load(&self) -> impl Future<Output = Result<Vec<Lesson>, Self::Error>> + Send + '_;

  /// Overwrite the saved collection with `lessons`.
  fn save<'a>(
    &'a self,
    lessons: &'a [Lesson],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
