//! [`Planner`] — a [`Schedule`] bound to a [`ScheduleStore`].
//!
//! Every successful mutation is written through to the store straight away.
//! A failed write is logged and otherwise ignored: the in-memory schedule
//! stays authoritative for the rest of the session.

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  lesson::{Lesson, LessonDraft, LessonId},
  schedule::Schedule,
  store::ScheduleStore,
};

pub struct Planner<S> {
  schedule: Schedule,
  store:    S,
}

impl<S: ScheduleStore> Planner<S> {
  /// Load the saved collection from `store`.
  pub async fn open(store: S) -> Result<Self> {
    let lessons = store.load().await.map_err(|e| Error::Store(Box::new(e)))?;
    debug!(count = lessons.len(), "loaded schedule");
    let schedule = Schedule::from_lessons(lessons)?;
    Ok(Self { schedule, store })
  }

  pub fn schedule(&self) -> &Schedule { &self.schedule }

  pub fn lessons(&self) -> &[Lesson] { self.schedule.list() }

  pub fn store(&self) -> &S { &self.store }

  pub async fn add(&mut self, draft: LessonDraft) -> Result<Lesson> {
    let lesson = self.schedule.add(draft)?.clone();
    debug!(id = %lesson.id, "added lesson");
    self.persist().await;
    Ok(lesson)
  }

  pub async fn update(&mut self, id: &LessonId, draft: LessonDraft) -> Result<Lesson> {
    let lesson = self.schedule.update(id, draft)?.clone();
    debug!(%id, "updated lesson");
    self.persist().await;
    Ok(lesson)
  }

  pub async fn remove(&mut self, id: &LessonId) -> Result<Lesson> {
    let lesson = self.schedule.remove(id)?;
    debug!(%id, "removed lesson");
    self.persist().await;
    Ok(lesson)
  }

  /// Replace the whole collection, e.g. after an import.
  pub async fn replace_all(&mut self, lessons: Vec<Lesson>) -> Result<()> {
    self.schedule.replace_all(lessons)?;
    info!(count = self.schedule.len(), "replaced schedule");
    self.persist().await;
    Ok(())
  }

  async fn persist(&self) {
    if let Err(e) = self.store.save(self.schedule.list()).await {
      warn!(error = %e, "failed to persist schedule; keeping in-memory state");
    }
  }
}
