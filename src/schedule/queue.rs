use std::collections::VecDeque;

use crate::model::version::Library;

/// One pending acquisition of a single library. The executing stage decides,
/// from its own verification outcome, what to forward into the later queues;
/// this crate only decides what enters `check` and in which order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireTask {
    pub library: Library,
}

impl AcquireTask {
    pub fn new(library: Library) -> AcquireTask {
        AcquireTask { library }
    }

    pub fn description(&self) -> String {
        format!("Verifying {}.", self.library.name)
    }
}

/// Append-only during graph construction; drained FIFO by the external
/// executor once construction has completed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskQueue {
    tasks: VecDeque<AcquireTask>,
}

impl TaskQueue {
    pub fn new() -> TaskQueue {
        TaskQueue::default()
    }

    pub fn append(&mut self, task: AcquireTask) {
        self.tasks.push_back(task);
    }

    pub fn pop(&mut self) -> Option<AcquireTask> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AcquireTask> {
        self.tasks.iter()
    }
}

/// The four cooperating stages an acquisition task may traverse. Passed as a
/// single aggregate so every task sees the same queue wiring.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueSet {
    /// Verifies dependencies not resolvable by repository convention.
    pub non_maven_check: TaskQueue,
    /// Verifies presence and integrity in the local cache.
    pub check: TaskQueue,
    /// Fetches a dependency that failed verification.
    pub download: TaskQueue,
    /// Materializes a verified dependency into the package working dir.
    pub copy: TaskQueue,
}

impl QueueSet {
    pub fn new() -> QueueSet {
        QueueSet::default()
    }
}
