//! Display wrapper types for list-shaped responses.
//!
//! The domain model renders a single task via its own `Display` impl;
//! these wrappers format collections for the two list-shaped responses
//! (`list` and `find`) so the session layer composes messages instead of
//! hand-rolling numbering in multiple places.

use std::fmt;

use crate::models::Task;

/// Formats a full task list, numbered from 1 in insertion order.
///
/// ```rust
/// use tally_core::{NumberedTasks, Task};
///
/// let tasks = vec![Task::todo("read book"), Task::todo("buy milk")];
/// let listing = NumberedTasks::new(&tasks).to_string();
/// assert_eq!(listing, "1. [T][ ] read book\n2. [T][ ] buy milk");
/// ```
pub struct NumberedTasks<'a> {
    tasks: &'a [Task],
}

impl<'a> NumberedTasks<'a> {
    /// Wraps a borrowed task slice for numbered display.
    pub fn new(tasks: &'a [Task]) -> Self {
        Self { tasks }
    }
}

impl fmt::Display for NumberedTasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, task) in self.tasks.iter().enumerate() {
            if offset > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {task}", offset + 1)?;
        }
        Ok(())
    }
}

/// Formats find results, keeping each task's original list number so the
/// user can feed it straight back into `mark`/`delete`.
pub struct Matches<'a> {
    matches: &'a [(usize, &'a Task)],
}

impl<'a> Matches<'a> {
    /// Wraps `(original 1-based index, task)` pairs for display.
    pub fn new(matches: &'a [(usize, &'a Task)]) -> Self {
        Self { matches }
    }
}

impl fmt::Display for Matches<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (index, task)) in self.matches.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{index}. {task}")?;
        }
        Ok(())
    }
}
