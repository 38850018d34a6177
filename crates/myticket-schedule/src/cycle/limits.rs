use myticket_core::config::CycleConfig;

use super::rule::RecurrenceRule;
use crate::error::{ScheduleError, ScheduleResult};

/// Upper bound on the work a single expansion may do.
///
/// The expander itself never consults limits; callers run [`RuleLimits::check`]
/// before expanding rules they did not author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLimits {
    pub max_span_days: u32,
}

impl RuleLimits {
    /// ## Summary
    /// Rejects rules whose start-to-end distance exceeds `max_span_days`.
    ///
    /// Rules with a missing bound or an end before their start pass: they
    /// expand to nothing.
    ///
    /// ## Errors
    /// Returns `ScheduleError::SpanTooLarge` when the span is over the limit.
    pub fn check(&self, rule: &RecurrenceRule) -> ScheduleResult<()> {
        match rule.span_days() {
            Some(span_days) if span_days > i64::from(self.max_span_days) => {
                tracing::debug!(
                    span_days,
                    max_span_days = self.max_span_days,
                    "Recurrence rule exceeds span limit"
                );
                Err(ScheduleError::SpanTooLarge {
                    span_days,
                    max_span_days: self.max_span_days,
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<&CycleConfig> for RuleLimits {
    fn from(config: &CycleConfig) -> Self {
        Self {
            max_span_days: config.max_span_days,
        }
    }
}
