use crate::domain::{Task, TaskDraft, TaskId};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory task collection, newest first.
///
/// Every mutation builds a new collection and swaps it in, so a snapshot
/// handed out earlier never changes underneath its holder.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<Vec<Task>>,
    last_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current collection
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current collection
    pub fn snapshot(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a pending task and put it at the front
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId> {
        self.add_task_at(draft, Local::now())
    }

    pub fn add_task_at(&mut self, draft: TaskDraft, now: DateTime<Local>) -> Result<TaskId> {
        if draft.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        let id = self.next_id(now);
        let task = Task::from_draft(id, draft, now);
        info!(id, name = %task.name, "task added");

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task);
        next.extend(self.tasks.iter().cloned());
        self.tasks = Arc::new(next);
        Ok(id)
    }

    /// Remove a task. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            debug!(id, "delete ignored, no such task");
            return;
        }
        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.tasks = Arc::new(next);
        info!(id, "task deleted");
    }

    /// Flip completion. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId) {
        self.toggle_task_at(id, Local::now());
    }

    pub fn toggle_task_at(&mut self, id: TaskId, now: DateTime<Local>) {
        if self.replace(id, |task| task.toggled(now)) {
            info!(id, "task toggled");
        } else {
            debug!(id, "toggle ignored, no such task");
        }
    }

    /// Record that the due-soon notification fired for a task
    pub fn mark_notified(&mut self, id: TaskId) {
        if self.replace(id, Task::notified) {
            debug!(id, "notification recorded");
        }
    }

    fn replace<F>(&mut self, id: TaskId, update: F) -> bool
    where
        F: Fn(&Task) -> Task,
    {
        if self.get(id).is_none() {
            return false;
        }
        let next: Vec<Task> = self
            .tasks
            .iter()
            .map(|t| if t.id == id { update(t) } else { t.clone() })
            .collect();
        self.tasks = Arc::new(next);
        true
    }

    /// Millisecond timestamp, bumped past the last issued id on collision
    fn next_id(&mut self, now: DateTime<Local>) -> TaskId {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = candidate.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
