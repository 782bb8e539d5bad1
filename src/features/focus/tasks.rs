//! Task list with a single "current" task.

use chrono::Utc;
use tracing::debug;

/// Identifier of a task: its creation time in milliseconds since the epoch.
pub type TaskId = i64;

/// A user-entered task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID (creation timestamp)
    pub id: TaskId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

/// Ordered list of tasks plus the current-task reference.
///
/// Every operation is total: unknown IDs and blank text are ignored.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    current: Option<TaskId>,
    last_id: TaskId,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Returns its ID, or `None` when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id(Utc::now().timestamp_millis());
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        debug!(id, text, "task added");
        Some(id)
    }

    /// Remove a task, clearing the current reference if it pointed at it.
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!(id, "task removed");
        }
        self.release_current(id);
    }

    /// Mark a task completed, clearing the current reference if it pointed at it.
    pub fn complete(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = true;
            debug!(id, "task completed");
        }
        self.release_current(id);
    }

    /// Make a task current, replacing any previous selection.
    pub fn select(&mut self, id: TaskId) {
        if self.get(id).is_some() {
            self.current = Some(id);
            debug!(id, "task selected");
        }
    }

    /// Complete the current task, if any. Returns the ID that was completed.
    pub fn complete_current(&mut self) -> Option<TaskId> {
        let id = self.current?;
        self.complete(id);
        Some(id)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub const fn current_id(&self) -> Option<TaskId> {
        self.current
    }

    /// The current task, if one is selected.
    #[must_use]
    pub fn current(&self) -> Option<&Task> {
        self.current.and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    fn release_current(&mut self, id: TaskId) {
        if self.current == Some(id) {
            self.current = None;
        }
    }

    // Timestamps can repeat within a millisecond; keep IDs strictly increasing.
    fn next_id(&mut self, candidate: TaskId) -> TaskId {
        let id = candidate.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
