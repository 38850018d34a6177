//! Consistency checks for task hierarchies.

mod links;

pub use links::{InMemoryTaskGraph, TaskGraph, validate_task_links};
