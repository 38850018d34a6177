//! Recurrence rules ("cycles") and their expansion into calendar dates.
//!
//! A [`RecurrenceRule`] is immutable input; [`expand`] and
//! [`RecurrenceRule::occurrences`] turn it into the ascending dates on which
//! the rule fires. Malformed rules never fail here: they expand to an empty or
//! truncated sequence. Rejecting bad input is the job of
//! [`CycleRecord::to_rule`] and [`RuleLimits::check`].

mod expand;
mod limits;
mod record;
mod rule;
mod tag;

pub use expand::{Occurrences, expand};
pub use limits::RuleLimits;
pub use record::{CycleRecord, StepCount};
pub use rule::{Pattern, RecurrenceRule};
pub use tag::{CycleModel, StepUnit, Tag, parse_month, parse_weekday};
