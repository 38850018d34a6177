use std::num::NonZeroU32;

use chrono::{Month, NaiveDate, Weekday};
use myticket_core::types::TaskId;

use super::tag::{CycleModel, StepUnit, Tag};

/// The repeat pattern of a rule, one payload per model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Step one `unit` at a time.
    Each { unit: Tag<StepUnit> },
    /// Step `count` units at a time.
    Every { count: NonZeroU32, unit: Tag<StepUnit> },
    /// Weekly, starting on the first `weekday` on or after the start date.
    DayOfWeek { weekday: Tag<Weekday> },
    /// Reserved; expands to nothing.
    MonthsOfYear { month: Option<Tag<Month>> },
    /// Reserved; expands to nothing.
    FirstLastOf,
    /// Reserved; expands to nothing.
    DayOfMonth,
    /// A model name outside the known set; expands to nothing.
    Unrecognized(String),
}

impl Pattern {
    /// Returns the model this pattern belongs to, or `None` for unrecognized models.
    #[must_use]
    pub const fn model(&self) -> Option<CycleModel> {
        match self {
            Self::Each { .. } => Some(CycleModel::Each),
            Self::Every { .. } => Some(CycleModel::Every),
            Self::DayOfWeek { .. } => Some(CycleModel::DayOfWeek),
            Self::MonthsOfYear { .. } => Some(CycleModel::MonthsOfYear),
            Self::FirstLastOf => Some(CycleModel::FirstLastOf),
            Self::DayOfMonth => Some(CycleModel::DayOfMonth),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the model's wire name, or the raw name for unrecognized models.
    #[must_use]
    pub fn model_name(&self) -> &str {
        match self {
            Self::Unrecognized(name) => name,
            _ => self.model().map_or("", CycleModel::as_str),
        }
    }
}

/// A recurrence rule ("cycle") attached to a task or meeting.
///
/// Bounds are inclusive. Either bound may be missing, in which case the rule
/// expands to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub pattern: Pattern,
    /// Task that owns the rule. Lookup only; the rule never owns the task.
    pub source_task: Option<TaskId>,
}

impl RecurrenceRule {
    /// Creates a rule with both bounds set and no owning task.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate, pattern: Pattern) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            pattern,
            source_task: None,
        }
    }

    #[must_use]
    pub fn with_source_task(mut self, task: TaskId) -> Self {
        self.source_task = Some(task);
        self
    }

    /// Returns `(start, end)` when both bounds are present.
    #[must_use]
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    /// Returns the number of days between start and end for rules that can fire.
    ///
    /// `None` when a bound is missing or the bounds are inverted.
    #[must_use]
    pub fn span_days(&self) -> Option<i64> {
        let (start, end) = self.bounds()?;
        (end >= start).then(|| (end - start).num_days())
    }
}
