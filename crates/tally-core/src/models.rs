//! Task variants and their temporal payloads.
//!
//! A [`Task`] pairs a description and a completion flag with a
//! [`TaskKind`]: a plain to-do, a deadline with a single due point, or an
//! event spanning a start and an end. The kind is a closed sum type so that
//! both rendering and the persistence codec can match exhaustively — adding
//! a variant is a compile error everywhere it matters, not a runtime
//! surprise.
//!
//! Temporal text is parsed eagerly at construction time with
//! [`jiff::civil`] types and re-rendered in the canonical
//! `YYYY-MM-DD HH:MM` form everywhere, regardless of how the user typed it.
//!
//! # Examples
//!
//! ```rust
//! use tally_core::Task;
//!
//! let task = Task::deadline("return book", "2019-12-02", Some("18:00")).unwrap();
//! assert_eq!(task.to_string(), "[D][ ] return book (by: 2019-12-02 18:00)");
//! assert_eq!(task.to_data_line(), "D | 0 | return book | 2019-12-02 18:00");
//! ```

use std::fmt;

use jiff::civil::{Date, DateTime, Time};

use crate::error::{Result, TallyError};

/// Accepted pattern for a full date/time, e.g. `2019-12-02 18:00`.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Accepted pattern for a bare date, e.g. `2019-12-02`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted pattern for a bare time of day, e.g. `18:00`.
const TIME_FORMAT: &str = "%H:%M";

/// Kind-specific payload of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain to-do item with no date/time attached.
    Todo,

    /// An item due at a single point in time.
    Deadline {
        /// When the item is due.
        due: DateTime,
    },

    /// An item spanning two points in time. No ordering between `start`
    /// and `end` is enforced.
    Event {
        /// When the event begins.
        start: DateTime,
        /// When the event ends.
        end: DateTime,
    },
}

impl TaskKind {
    /// One-letter tag used in both the display line and the save file.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// One tracked item: a description, a completion flag, and the
/// kind-specific temporal payload.
///
/// Tasks are owned exclusively by the [`TaskList`](crate::TaskList) that
/// holds them; accessors hand out shared references and removal hands back
/// the owned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a task from already-validated parts, initially not done.
    pub(crate) fn new(description: String, kind: TaskKind) -> Self {
        Self {
            description,
            done: false,
            kind,
        }
    }

    /// Creates a plain to-do task.
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description.into(), TaskKind::Todo)
    }

    /// Creates a deadline task from a date token and an optional time
    /// token. A missing time defaults to 00:00.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::MalformedTemporal`] if either token does not
    /// match the accepted grammar.
    pub fn deadline(description: impl Into<String>, date: &str, time: Option<&str>) -> Result<Self> {
        let due = datetime_from_tokens(date, time)?;
        Ok(Self::new(description.into(), TaskKind::Deadline { due }))
    }

    /// Creates an event task from a start and an end temporal text, each
    /// accepting `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::MalformedTemporal`] if either text does not
    /// match the accepted grammar.
    pub fn event(description: impl Into<String>, start: &str, end: &str) -> Result<Self> {
        let start = parse_when(start)?;
        let end = parse_when(end)?;
        Ok(Self::new(description.into(), TaskKind::Event { start, end }))
    }

    /// Returns the task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the task has been marked done.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the kind-specific payload.
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Sets the done flag. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Clears the done flag. Idempotent.
    pub fn unmark_done(&mut self) {
        self.done = false;
    }

    /// Single-character status marker used in list displays: `X` when
    /// done, a space otherwise.
    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Serializes this task to its one-line save-file encoding.
    ///
    /// The layout per kind (the separator is `|` with one space each side):
    ///
    /// ```text
    /// T | <0|1> | <description>
    /// D | <0|1> | <description> | <YYYY-MM-DD HH:MM>
    /// E | <0|1> | <description> | <YYYY-MM-DD HH:MM> - <YYYY-MM-DD HH:MM>
    /// ```
    pub fn to_data_line(&self) -> String {
        let done = i32::from(self.done);
        match &self.kind {
            TaskKind::Todo => format!("T | {done} | {}", self.description),
            TaskKind::Deadline { due } => {
                format!("D | {done} | {} | {}", self.description, format_when(*due))
            }
            TaskKind::Event { start, end } => format!(
                "E | {done} | {} | {} - {}",
                self.description,
                format_when(*start),
                format_when(*end)
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", format_when(*due)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_when(*start),
                format_when(*end)
            ),
        }
    }
}

/// Parses a temporal text accepting `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`,
/// defaulting a missing time to 00:00.
pub(crate) fn parse_when(text: &str) -> Result<DateTime> {
    if let Ok(datetime) = DateTime::strptime(DATETIME_FORMAT, text) {
        return Ok(datetime);
    }
    Date::strptime(DATE_FORMAT, text)
        .map(|date| date.to_datetime(Time::midnight()))
        .map_err(|_| TallyError::MalformedTemporal {
            text: text.to_string(),
        })
}

/// Combines a date token with an optional time token.
fn datetime_from_tokens(date: &str, time: Option<&str>) -> Result<DateTime> {
    let malformed = || TallyError::MalformedTemporal {
        text: match time {
            Some(time) => format!("{date} {time}"),
            None => date.to_string(),
        },
    };
    let parsed_date = Date::strptime(DATE_FORMAT, date).map_err(|_| malformed())?;
    let parsed_time = match time {
        Some(time) => Time::strptime(TIME_FORMAT, time).map_err(|_| malformed())?,
        None => Time::midnight(),
    };
    Ok(parsed_date.to_datetime(parsed_time))
}

/// Renders a date/time in the canonical `YYYY-MM-DD HH:MM` form.
fn format_when(when: DateTime) -> String {
    when.strftime(DATETIME_FORMAT).to_string()
}
