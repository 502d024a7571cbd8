//! Schedule-conflict detection.
//!
//! Two lessons conflict when they share at least one weekday and their
//! half-open time spans overlap. Back-to-back lessons do not conflict.

use crate::lesson::Lesson;

/// Whether `a` and `b` clash. Symmetric in its arguments.
pub fn clashes(a: &Lesson, b: &Lesson) -> bool {
  a.shares_day(b) && a.span().overlaps(&b.span())
}

/// Every lesson in `others` that clashes with `candidate`, in input order.
///
/// The caller is responsible for leaving the candidate's own previous version
/// out of `others` when editing.
pub fn conflicts<'a, I>(
  candidate: &'a Lesson,
  others: I,
) -> impl Iterator<Item = &'a Lesson>
where
  I: IntoIterator<Item = &'a Lesson>,
{
  others.into_iter().filter(move |other| clashes(candidate, other))
}

/// Whether `candidate` clashes with any lesson in `others`.
pub fn has_conflict<'a, I>(candidate: &'a Lesson, others: I) -> bool
where
  I: IntoIterator<Item = &'a Lesson>,
{
  conflicts(candidate, others).next().is_some()
}
