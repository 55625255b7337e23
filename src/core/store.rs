use crate::core::models::Task;
use crate::errors::Result;

/// In-memory task collection. Tasks keep insertion order (listing shows
/// them in creation order) and ids come from a counter that only moves
/// forward, so a deleted id is never handed out again.
///
/// Absent ids are an expected outcome of interactive use, not a fault:
/// lookups return `Option` and `delete` returns `bool`.
#[derive(Debug)]
pub struct TaskStore {
    items: Vec<Task>,
    next_id: i32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek_next_id(&self) -> i32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates and appends a new task under the next free id.
    pub fn add(&mut self, title: impl Into<String>, description: Option<String>) -> Result<&Task> {
        let mut task = Task::new(title, description)?;
        let id = self.next_id;
        self.next_id += 1;
        task.id = id;
        self.items.push(task);
        Ok(self.items.last().expect("inserted task missing"))
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.items
    }

    pub fn find(&self, id: i32) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: i32) -> Option<&mut Task> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    /// Applies the provided fields to the task with `id`; `None` fields stay
    /// unchanged. `Ok(None)` when no task matched. A validation failure
    /// leaves the task exactly as it was.
    pub fn update(
        &mut self,
        id: i32,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Option<&Task>> {
        match self.find_mut(id) {
            Some(task) => {
                task.modify(title, description)?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Removes the task with `id`, closing the gap in the sequence. The
    /// freed id is not reissued.
    pub fn delete(&mut self, id: i32) -> bool {
        match self.items.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sets the completion flag on the task with `id`. Idempotent on the
    /// flag itself; `updated_at` refreshes on every successful call.
    pub fn set_completed(&mut self, id: i32, completed: bool) -> Option<&Task> {
        match self.find_mut(id) {
            Some(task) => {
                task.set_completed(completed);
                Some(task)
            }
            None => None,
        }
    }
}
