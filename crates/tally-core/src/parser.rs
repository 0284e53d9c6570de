//! Command grammar: one raw input line to a typed instruction.
//!
//! Parsing is a pure function from text to a [`Command`] or a
//! [`TallyError`]: no state is read or mutated here. The first
//! whitespace-delimited token selects the command (case-insensitive); the
//! remainder is validated per command. Index arguments are checked for
//! numeric shape only — range checking belongs to the
//! [`TaskList`](crate::TaskList), which knows the current bounds.
//!
//! Recognized commands:
//!
//! ```text
//! bye
//! list
//! find <keyword>
//! mark <n>
//! unmark <n>
//! delete <n>
//! todo <description>
//! deadline <description> /by <YYYY-MM-DD [HH:MM]>
//! event <description> /from <datetime> /to <datetime>
//! ```
//!
//! Clause separators (`" /by "`, `" /from "`, `" /to "`) are matched
//! literally, splitting at the first occurrence, so descriptions must not
//! themselves contain these sequences.

use crate::error::{Result, TallyError};
use crate::models::Task;

/// A parsed user instruction, ready to apply to a task list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Terminate the session (`bye`).
    Exit,
    /// Show every task in insertion order (`list`).
    List,
    /// Case-insensitive substring search over rendered tasks (`find`).
    Find {
        /// Text to look for in each task's display line.
        keyword: String,
    },
    /// Set the done flag of the task at a 1-based index (`mark`).
    Mark {
        /// 1-based position, unchecked against the list bounds.
        index: i64,
    },
    /// Clear the done flag of the task at a 1-based index (`unmark`).
    Unmark {
        /// 1-based position, unchecked against the list bounds.
        index: i64,
    },
    /// Remove the task at a 1-based index (`delete`).
    Delete {
        /// 1-based position, unchecked against the list bounds.
        index: i64,
    },
    /// Append a newly constructed task (`todo`/`deadline`/`event`).
    Add(Task),
}

/// Parses one line of user input into a [`Command`].
///
/// The line is trimmed defensively even though callers are expected to
/// trim already.
///
/// # Errors
///
/// Returns the grammar or temporal error describing exactly what is wrong
/// with the line; see [`TallyError`] for the taxonomy.
///
/// # Examples
///
/// ```rust
/// use tally_core::{parse, Command};
///
/// assert_eq!(parse("bye").unwrap(), Command::Exit);
/// assert_eq!(parse("DELETE 2").unwrap(), Command::Delete { index: 2 });
/// assert!(parse("remind me later").is_err());
/// ```
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let lowered = keyword.to_lowercase();

    // `bye` and `list` are literal whole-line commands: trailing text makes
    // the token an unknown command rather than silently ignored input.
    match lowered.as_str() {
        "bye" if rest.is_empty() => Ok(Command::Exit),
        "list" if rest.is_empty() => Ok(Command::List),
        "find" => parse_find(rest),
        "mark" => Ok(Command::Mark {
            index: parse_index("mark", rest)?,
        }),
        "unmark" => Ok(Command::Unmark {
            index: parse_index("unmark", rest)?,
        }),
        "delete" => Ok(Command::Delete {
            index: parse_index("delete", rest)?,
        }),
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        _ => Err(TallyError::UnknownCommand {
            token: keyword.to_string(),
        }),
    }
}

/// Parses the 1-based index argument of `mark`, `unmark`, and `delete`.
fn parse_index(command: &'static str, rest: &str) -> Result<i64> {
    if rest.is_empty() {
        return Err(TallyError::MissingArgument {
            command,
            usage: "<number>",
        });
    }
    rest.parse::<i64>()
        .map_err(|_| TallyError::InvalidNumber { command })
}

fn parse_find(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(TallyError::MissingArgument {
            command: "find",
            usage: "<keyword>",
        });
    }
    Ok(Command::Find {
        keyword: rest.to_string(),
    })
}

fn parse_todo(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(TallyError::EmptyDescription { kind: "todo" });
    }
    Ok(Command::Add(Task::todo(rest)))
}

fn parse_deadline(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(TallyError::EmptyDescription { kind: "deadline" });
    }
    let missing_by = TallyError::MissingClause {
        command: "deadline",
        clause: "by",
    };
    let Some((description, by)) = rest.split_once(" /by ") else {
        return Err(missing_by);
    };
    let (description, by) = (description.trim(), by.trim());
    if description.is_empty() || by.is_empty() {
        return Err(missing_by);
    }
    let (date, time) = split_date_time(by);
    Ok(Command::Add(Task::deadline(description, date, time)?))
}

fn parse_event(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(TallyError::EmptyDescription { kind: "event" });
    }
    let missing = |clause| TallyError::MissingClause {
        command: "event",
        clause,
    };
    let Some((description, span)) = rest.split_once(" /from ") else {
        return Err(missing("from"));
    };
    let Some((start, end)) = span.split_once(" /to ") else {
        return Err(missing("to"));
    };
    let (description, start, end) = (description.trim(), start.trim(), end.trim());
    if description.is_empty() || start.is_empty() {
        return Err(missing("from"));
    }
    if end.is_empty() {
        return Err(missing("to"));
    }
    Ok(Command::Add(Task::event(description, start, end)?))
}

/// Splits a temporal text at the first run of whitespace into a date token
/// and an optional time token.
fn split_date_time(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim_start())),
        None => (text, None),
    }
}
