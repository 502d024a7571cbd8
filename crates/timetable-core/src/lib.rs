//! Core types and algorithms for the Timetable weekly study schedule.
//!
//! Lessons, the conflict rule, the week grid and the in-memory schedule live
//! here. Storage backends implement [`store::ScheduleStore`]; the CLI drives
//! everything through [`planner::Planner`].

pub mod conflict;
pub mod error;
pub mod grid;
pub mod lesson;
pub mod planner;
pub mod schedule;
pub mod store;

pub use error::{Error, Result, TimeError};
