//! Generation-tagged delayed tasks.
//!
//! Tasks are queued with a due time and the generation of the game that
//! armed them. The scheduler never owns a clock: callers pass the current
//! time in milliseconds when they ask for due tasks.
//!
//! Tasks fire in due order; tasks due at the same time fire in the order
//! they were scheduled.

use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl TaskId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Delayed work the session performs on behalf of the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Turn a mismatched pair back over.
    ResolveMismatch,
    /// Surface the win to the player.
    AnnounceWin { moves: u32 },
}

/// A queued task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,

    /// Time at or after which the task fires.
    pub due_ms: u64,

    /// Game generation that armed the task.
    pub generation: u64,

    pub task: Task,
}

/// Queue of delayed tasks ordered by due time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// Sorted by `(due_ms, id)`.
    entries: Vec<ScheduledTask>,

    next_id: u32,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, generation: u64, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        let at = self
            .entries
            .partition_point(|e| (e.due_ms, e.id) <= (due_ms, id));
        self.entries.insert(
            at,
            ScheduledTask {
                id,
                due_ms,
                generation,
                task,
            },
        );
        id
    }

    /// Remove a task before it fires.
    ///
    /// Returns true if the task was still queued.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every task not armed by `generation`.
    ///
    /// Returns how many tasks were dropped.
    pub fn retain_generation(&mut self, generation: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.generation == generation);
        before - self.entries.len()
    }

    /// Remove and return every task due at or before `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<ScheduledTask> {
        let split = self.entries.partition_point(|e| e.due_ms <= now_ms);
        self.entries.drain(..split).collect()
    }

    /// Due time of the earliest queued task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.first().map(|e| e.due_ms)
    }

    /// Queued tasks in firing order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTask] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_display() {
        assert_eq!(format!("{}", TaskId::new(3)), "Task(3)");
        assert_eq!(TaskId::new(3).raw(), 3);
    }

    #[test]
    fn test_take_due_in_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1000, 1, Task::ResolveMismatch);
        scheduler.schedule(500, 1, Task::AnnounceWin { moves: 4 });
        scheduler.schedule(500, 1, Task::ResolveMismatch);

        assert_eq!(scheduler.next_due(), Some(500));
        assert!(scheduler.take_due(499).is_empty());

        let due = scheduler.take_due(500);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].task, Task::AnnounceWin { moves: 4 });
        assert_eq!(due[1].task, Task::ResolveMismatch);

        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.take_due(5000).len(), 1);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(10, 1, Task::ResolveMismatch);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(100).is_empty());
    }

    #[test]
    fn test_retain_generation() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(10, 1, Task::ResolveMismatch);
        scheduler.schedule(20, 2, Task::ResolveMismatch);
        scheduler.schedule(30, 1, Task::AnnounceWin { moves: 1 });

        assert_eq!(scheduler.retain_generation(2), 2);
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].generation, 2);
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(42, 1, Task::ResolveMismatch);
        assert_eq!(scheduler.take_due(42).len(), 1);
    }
}
