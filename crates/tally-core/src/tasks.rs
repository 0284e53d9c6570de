//! Ordered, in-memory task collection with write-through persistence.
//!
//! [`TaskList`] owns every task it holds. Insertion order is the display
//! and persistence order. All indices exposed to callers are 1-based, as
//! shown to the end user, and every operation checks `1 <= i <= len`
//! before touching state — an out-of-range index fails without mutating
//! anything and without touching the save file.
//!
//! Every successful mutation writes the whole collection through
//! [`Storage::save`]; queries never persist.

use log::debug;

use crate::error::{Result, TallyError};
use crate::models::Task;
use crate::storage::Storage;

/// The ordered sequence of all current tasks for a session.
pub struct TaskList {
    tasks: Vec<Task>,
    storage: Option<Storage>,
}

impl TaskList {
    /// Creates an in-memory-only list with no backing save file.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            storage: None,
        }
    }

    /// Creates a list backed by a save file. Every successful mutation is
    /// written through to `storage`.
    pub fn with_storage(tasks: Vec<Task>, storage: Storage) -> Self {
        Self {
            tasks,
            storage: Some(storage),
        }
    }

    /// Returns the number of tasks currently stored.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are stored.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrowed view of the tasks in display order. Callers outside the
    /// list get shared references only; mutation goes through the indexed
    /// operations.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task to the end of the list and persists.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::WriteFailure`] if the save fails; the task is
    /// still in the list.
    pub fn add(&mut self, task: Task) -> Result<&Task> {
        self.tasks.push(task);
        self.persist()?;
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    /// Removes and returns the task at the given 1-based index, shifting
    /// later tasks down by one, then persists.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::IndexOutOfRange`] without mutating if the
    /// index is outside `[1, len]`.
    pub fn remove(&mut self, index: i64) -> Result<Task> {
        let offset = self.offset(index)?;
        let removed = self.tasks.remove(offset);
        self.persist()?;
        Ok(removed)
    }

    /// Marks the task at the given 1-based index as done (idempotent) and
    /// persists.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::IndexOutOfRange`] without mutating if the
    /// index is outside `[1, len]`.
    pub fn mark_done(&mut self, index: i64) -> Result<&Task> {
        let offset = self.offset(index)?;
        self.tasks[offset].mark_done();
        self.persist()?;
        Ok(&self.tasks[offset])
    }

    /// Clears the done flag of the task at the given 1-based index
    /// (idempotent) and persists.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::IndexOutOfRange`] without mutating if the
    /// index is outside `[1, len]`.
    pub fn unmark_done(&mut self, index: i64) -> Result<&Task> {
        let offset = self.offset(index)?;
        self.tasks[offset].unmark_done();
        self.persist()?;
        Ok(&self.tasks[offset])
    }

    /// Case-insensitive substring search against each task's rendered
    /// display line. Returns `(original 1-based index, task)` pairs in
    /// list order. Never mutates, never persists; no match is an empty
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::EmptyKeyword`] if the keyword is blank.
    pub fn find(&self, keyword: &str) -> Result<Vec<(usize, &Task)>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(TallyError::EmptyKeyword);
        }
        let needle = keyword.to_lowercase();
        Ok(self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.to_string().to_lowercase().contains(&needle))
            .map(|(offset, task)| (offset + 1, task))
            .collect())
    }

    /// Resolves a user-facing 1-based index to a vector offset.
    fn offset(&self, index: i64) -> Result<usize> {
        let size = self.tasks.len();
        if index < 1 || index as u64 > size as u64 {
            return Err(TallyError::IndexOutOfRange { index, size });
        }
        Ok((index - 1) as usize)
    }

    fn persist(&self) -> Result<()> {
        if let Some(storage) = &self.storage {
            storage.save(&self.tasks)?;
            debug!("persisted {} tasks", self.tasks.len());
        }
        Ok(())
    }
}
