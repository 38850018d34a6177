//! Flat wire form of a recurrence rule, as stored and sent by the API.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use myticket_core::datetime::parse_calendar_date;
use myticket_core::types::TaskId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::rule::{Pattern, RecurrenceRule};
use super::tag::{CycleModel, StepUnit, Tag, parse_month, parse_weekday};
use crate::error::{ScheduleError, ScheduleResult};

/// A recurrence rule as exchanged with the persistence and API layers.
///
/// Every field is optional, enumerated fields are plain strings and `number`
/// takes any JSON value, so a field a model ignores never fails the record.
/// `source_task` is an integer or a numeric string. [`CycleRecord::to_rule`]
/// does the validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleRecord {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(alias = "cycle_model")]
    pub model: Option<String>,
    /// Unit for `Each` rules: day, week, month or year.
    pub one_level: Option<String>,
    /// Multiplier for `Every` rules.
    #[serde(alias = "cycle_distance")]
    pub number: Option<StepCount>,
    /// Unit for `Every` rules: days, weeks, months or years.
    pub level: Option<String>,
    pub weekday: Option<String>,
    pub month: Option<String>,
    #[serde(deserialize_with = "lenient_task_id")]
    pub source_task: Option<TaskId>,
}

/// Step multiplier as sent by clients.
///
/// Integers and numeric strings are the usual shapes; anything else lands in
/// `Other` and only fails once an `Every` rule needs the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepCount {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl StepCount {
    /// Coerces the value to a positive integer. Integral floats such as `2.0` count.
    #[must_use]
    pub fn coerce(&self) -> Option<NonZeroU32> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<i64>().ok()?,
            // f64 Display drops a zero fraction, so only integral values parse
            Self::Other(value) => value.as_f64()?.to_string().parse::<i64>().ok()?,
        };
        u32::try_from(value).ok().and_then(NonZeroU32::new)
    }
}

impl From<i64> for StepCount {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl CycleRecord {
    /// ## Summary
    /// Validates the record and converts it into a [`RecurrenceRule`].
    ///
    /// Blank dates count as missing. Unknown model, unit, weekday and month
    /// names are kept as unrecognized values rather than rejected.
    ///
    /// ## Errors
    /// Returns an error if a date is present but unparsable, or if an `Every`
    /// rule lacks a positive `number`.
    pub fn to_rule(&self) -> ScheduleResult<RecurrenceRule> {
        Ok(RecurrenceRule {
            start: optional_date(self.start.as_deref())?,
            end: optional_date(self.end.as_deref())?,
            pattern: self.pattern()?,
            source_task: self.source_task,
        })
    }

    fn pattern(&self) -> ScheduleResult<Pattern> {
        let raw_model = field(self.model.as_deref());
        let Some(model) = CycleModel::parse(raw_model) else {
            return Ok(Pattern::Unrecognized(raw_model.to_string()));
        };

        Ok(match model {
            CycleModel::Each => Pattern::Each {
                unit: Tag::parse(field(self.one_level.as_deref()), StepUnit::parse_singular),
            },
            CycleModel::Every => Pattern::Every {
                count: self.step_count()?,
                unit: Tag::parse(field(self.level.as_deref()), StepUnit::parse_plural),
            },
            CycleModel::DayOfWeek => Pattern::DayOfWeek {
                weekday: Tag::parse(field(self.weekday.as_deref()), parse_weekday),
            },
            CycleModel::MonthsOfYear => Pattern::MonthsOfYear {
                month: self
                    .month
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .map(|m| Tag::parse(m, parse_month)),
            },
            CycleModel::FirstLastOf => Pattern::FirstLastOf,
            CycleModel::DayOfMonth => Pattern::DayOfMonth,
        })
    }

    fn step_count(&self) -> ScheduleResult<NonZeroU32> {
        let Some(number) = &self.number else {
            return Err(ScheduleError::ValidationError(
                "an Every rule needs a number".to_string(),
            ));
        };
        number.coerce().ok_or_else(|| {
            ScheduleError::ValidationError(format!(
                "number must be a positive integer, got {number:?}"
            ))
        })
    }
}

/// Reads a task id from a JSON integer or a numeric string. Blank strings count as absent.
fn lenient_task_id<'de, D>(deserializer: D) -> Result<Option<TaskId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireTaskId {
        Id(i64),
        Text(String),
    }

    match Option::<WireTaskId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireTaskId::Id(id)) => Ok(Some(TaskId(id))),
        Some(WireTaskId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(|id| Some(TaskId(id)))
                .map_err(|_| D::Error::custom(format!("invalid task id {text:?}")))
        }
    }
}

fn field(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn optional_date(value: Option<&str>) -> ScheduleResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Ok(Some(parse_calendar_date(text)?)),
    }
}
