use myticket_core::types::TaskId;
use thiserror::Error;

/// Scheduling layer errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error(transparent)]
    CoreError(#[from] myticket_core::error::CoreError),

    #[error(transparent)]
    LinkError(#[from] LinkError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Rule spans {span_days} days, the limit is {max_span_days}")]
    SpanTooLarge { span_days: i64, max_span_days: u32 },
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

/// Rejected parent/prerequisite links between tasks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("A task's parent cannot also be one of its prerequisites ({0})")]
    ParentIsPrerequisite(TaskId),

    #[error("Cyclic parent relationship detected for {0}")]
    CyclicParent(TaskId),

    #[error("Cyclic prerequisite chain detected for {0}")]
    CyclicPrerequisite(TaskId),
}
