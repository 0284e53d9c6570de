//! Session facade: the single line-in, response-out command boundary.
//!
//! A [`Session`] wires the parser, the task list, and the storage codec
//! together behind one method: [`Session::handle`] takes a raw input line
//! and returns a [`Response`] carrying the message text plus two status
//! flags (error, exit). Front ends — the console loop, a GUI — consume
//! responses without ever seeing the error taxonomy or the live task
//! list.
//!
//! Sessions are explicit objects with a `create → handle* → drop`
//! lifecycle; there is no process-wide state. Construction goes through
//! [`SessionBuilder`], which resolves the save-file path (XDG data
//! directory by default) and loads any existing tasks.

use std::path::{Path, PathBuf};

use log::info;

use crate::display::{Matches, NumberedTasks};
use crate::error::{Result, TallyError};
use crate::models::Task;
use crate::parser::{self, Command};
use crate::storage::Storage;
use crate::tasks::TaskList;

/// Tri-state outcome of one handled command: a user-facing message plus
/// error and exit flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    message: String,
    is_error: bool,
    is_exit: bool,
}

impl Response {
    /// Creates a normal (non-error, non-exit) response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            is_exit: false,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
            is_exit: false,
        }
    }

    /// Creates an exit response carrying the farewell text.
    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            is_exit: true,
        }
    }

    /// Returns the user-facing message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this response reports a failed command.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Returns true if the caller should terminate its read loop.
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }
}

/// Builder for creating and configuring [`Session`] instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    data_file: Option<PathBuf>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom save-file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tally/tasks.txt` or `~/.local/share/tally/tasks.txt`
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds a session, loading any existing tasks from the save file.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::XdgDirectory` if the default path cannot be
    /// resolved, or any load error for an existing but corrupt save file.
    /// Callers that prefer to keep running may fall back to
    /// [`SessionBuilder::build_empty`].
    pub fn build(self) -> Result<Session> {
        let storage = Storage::new(self.resolve_path()?);
        let tasks = storage.load()?;
        info!(
            "session opened with {} tasks from {}",
            tasks.len(),
            storage.path().display()
        );
        Ok(Session {
            tasks: TaskList::with_storage(tasks, storage),
        })
    }

    /// Builds a session with an empty collection at the same save path,
    /// ignoring whatever the file currently holds.
    ///
    /// This is the documented fallback for a corrupt save file: the
    /// session stays usable, and the next successful mutation rewrites
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::XdgDirectory` if the default path cannot be
    /// resolved.
    pub fn build_empty(self) -> Result<Session> {
        let storage = Storage::new(self.resolve_path()?);
        Ok(Session {
            tasks: TaskList::with_storage(Vec::new(), storage),
        })
    }

    /// Returns the save-file path, following the XDG Base Directory
    /// specification when no explicit path was given.
    fn resolve_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => xdg::BaseDirectories::with_prefix("tally")
                .place_data_file("tasks.txt")
                .map_err(|e| TallyError::XdgDirectory(e.to_string())),
        }
    }
}

/// One tracker session: an owned task list plus its save file.
pub struct Session {
    tasks: TaskList,
}

impl Session {
    /// Creates a builder for configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session with no save file at all; mutations stay in
    /// memory. Useful for tests and embedding.
    pub fn in_memory() -> Self {
        Self {
            tasks: TaskList::new(Vec::new()),
        }
    }

    /// Read-only view of the task collection.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Returns the greeting text a front end shows before the first
    /// command.
    pub fn greeting(&self) -> String {
        "Hello! I'm Tally!\nWhat can I do for you?".to_string()
    }

    /// Handles one line of user input.
    ///
    /// Every user-recoverable failure — grammar, temporal, collection,
    /// and save-file write errors — comes back as an error [`Response`];
    /// this method never panics on bad input and never terminates the
    /// process. The exit response is produced only by the literal `bye`
    /// command and mutates nothing.
    pub fn handle(&mut self, line: &str) -> Response {
        match self.dispatch(line) {
            Ok(response) => response,
            Err(err) => Response::error(err.to_string()),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Response> {
        match parser::parse(line)? {
            Command::Exit => Ok(Response::exit("Bye. Hope to see you again soon!")),
            Command::List => Ok(self.list()),
            Command::Find { keyword } => self.find(&keyword),
            Command::Mark { index } => self.mark(index),
            Command::Unmark { index } => self.unmark(index),
            Command::Delete { index } => self.delete(index),
            Command::Add(task) => self.add(task),
        }
    }

    fn add(&mut self, task: Task) -> Result<Response> {
        let rendered = self.tasks.add(task)?.to_string();
        Ok(Response::ok(format!(
            "Got it! Added:\n  {rendered}\nNow you have {} tasks in this list.",
            self.tasks.len()
        )))
    }

    fn list(&self) -> Response {
        // An empty list is a friendly empty state, not a failure.
        if self.tasks.is_empty() {
            Response::ok("You haven't added any tasks yet!")
        } else {
            Response::ok(NumberedTasks::new(self.tasks.tasks()).to_string())
        }
    }

    fn find(&self, keyword: &str) -> Result<Response> {
        let matches = self.tasks.find(keyword)?;
        if matches.is_empty() {
            return Ok(Response::ok("No matching tasks found."));
        }
        Ok(Response::ok(format!(
            "Here are the matching tasks in your list:\n{}",
            Matches::new(&matches)
        )))
    }

    fn mark(&mut self, index: i64) -> Result<Response> {
        let rendered = self.tasks.mark_done(index)?.to_string();
        Ok(Response::ok(format!(
            "Nice! I've marked this task as done:\n  {rendered}"
        )))
    }

    fn unmark(&mut self, index: i64) -> Result<Response> {
        let rendered = self.tasks.unmark_done(index)?.to_string();
        Ok(Response::ok(format!(
            "OK! I've marked this task as not done yet:\n  {rendered}"
        )))
    }

    fn delete(&mut self, index: i64) -> Result<Response> {
        let removed = self.tasks.remove(index)?;
        Ok(Response::ok(format!(
            "Noted! I've removed this task:\n  {removed}\nNow you have {} tasks in this list.",
            self.tasks.len()
        )))
    }
}
