use std::collections::{HashMap, HashSet};

use myticket_core::types::TaskId;

use crate::error::LinkError;

/// Read access to the stored parent and prerequisite links of tasks.
pub trait TaskGraph {
    /// Parent of `task`, if it has one.
    fn parent(&self, task: TaskId) -> Option<TaskId>;

    /// Tasks that must be finished before `task`.
    fn prerequisites(&self, task: TaskId) -> Vec<TaskId>;
}

#[derive(Debug, Clone, Default)]
struct TaskLinks {
    parent: Option<TaskId>,
    prerequisites: Vec<TaskId>,
}

/// Hash-map backed [`TaskGraph`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGraph {
    tasks: HashMap<TaskId, TaskLinks>,
}

impl InMemoryTaskGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the links of `task`.
    pub fn insert(&mut self, task: TaskId, parent: Option<TaskId>, prerequisites: Vec<TaskId>) {
        self.tasks.insert(
            task,
            TaskLinks {
                parent,
                prerequisites,
            },
        );
    }
}

impl TaskGraph for InMemoryTaskGraph {
    fn parent(&self, task: TaskId) -> Option<TaskId> {
        self.tasks.get(&task).and_then(|links| links.parent)
    }

    fn prerequisites(&self, task: TaskId) -> Vec<TaskId> {
        self.tasks
            .get(&task)
            .map(|links| links.prerequisites.clone())
            .unwrap_or_default()
    }
}

/// ## Summary
/// Checks the proposed parent and prerequisites of a task before it is saved.
///
/// `task` is `None` for a task that has not been stored yet; such a task
/// cannot be part of a cycle, so only the parent/prerequisite overlap is
/// checked. Walks keep a visited set, so cycles already present elsewhere in
/// `graph` do not stall the check.
///
/// ## Errors
/// - `LinkError::ParentIsPrerequisite` if `parent` is listed in `prerequisites`
/// - `LinkError::CyclicParent` if the parent chain leads back to `task`
/// - `LinkError::CyclicPrerequisite` if a prerequisite chain leads back to `task`
pub fn validate_task_links<G: TaskGraph + ?Sized>(
    graph: &G,
    task: Option<TaskId>,
    parent: Option<TaskId>,
    prerequisites: &[TaskId],
) -> Result<(), LinkError> {
    if let Some(parent) = parent.filter(|p| prerequisites.contains(p)) {
        return Err(LinkError::ParentIsPrerequisite(parent));
    }

    let Some(task) = task else {
        return Ok(());
    };

    if parent_chain_reaches(graph, parent, task) {
        tracing::debug!(%task, "Rejected cyclic parent link");
        return Err(LinkError::CyclicParent(task));
    }

    if prerequisites_reach(graph, prerequisites, task) {
        tracing::debug!(%task, "Rejected cyclic prerequisite link");
        return Err(LinkError::CyclicPrerequisite(task));
    }

    Ok(())
}

fn parent_chain_reaches<G: TaskGraph + ?Sized>(
    graph: &G,
    from: Option<TaskId>,
    target: TaskId,
) -> bool {
    let mut visited = HashSet::new();
    let mut current = from;
    while let Some(node) = current {
        if node == target {
            return true;
        }
        if !visited.insert(node) {
            return false;
        }
        current = graph.parent(node);
    }
    false
}

fn prerequisites_reach<G: TaskGraph + ?Sized>(
    graph: &G,
    from: &[TaskId],
    target: TaskId,
) -> bool {
    let mut visited = HashSet::new();
    let mut stack: Vec<TaskId> = from.to_vec();
    while let Some(node) = stack.pop() {
        if node == target {
            return true;
        }
        if visited.insert(node) {
            stack.extend(graph.prerequisites(node));
        }
    }
    false
}
