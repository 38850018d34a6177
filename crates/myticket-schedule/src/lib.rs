//! Scheduling core: recurrence rules, their expansion into dates, and the
//! consistency checks that run before tasks are stored.

pub mod cycle;
pub mod error;
pub mod task;
