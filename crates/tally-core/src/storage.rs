//! Line-oriented save-file codec.
//!
//! One task per line, fields joined by `|` with optional surrounding
//! whitespace on load and exactly one space each side on save:
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2025-09-01 18:00
//! E | 0 | project meeting | 2025-08-06 14:00 - 2025-08-06 16:00
//! ```
//!
//! A missing file loads as an empty collection. Once a file exists the
//! codec is strict: blank lines are skipped, but any malformed line fails
//! the whole load loudly so the caller can decide to back up or reset
//! rather than silently dropping data. Saving always rewrites the whole
//! file, never appends.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, TallyError};
use crate::models::{parse_when, Task, TaskKind};

/// Loads and saves a task collection at a fixed path.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle for the given save-file path. The file is
    /// not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the save-file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads tasks from the save file.
    ///
    /// A path that does not exist yields an empty collection, not an
    /// error. Blank lines are skipped; every other line must decode.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::FileSystem`] if the file cannot be read, or
    /// the per-line error (`MalformedLine`, `UnknownType`,
    /// `InvalidDoneFlag`, `MissingTemporalField`, `MalformedTemporal`) for
    /// the first line that fails to decode.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!("no save file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| TallyError::FileSystem {
            path: self.path.clone(),
            source,
        })?;
        let mut tasks = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            tasks.push(decode_line(line)?);
        }
        debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrites the save file with one line per task, in collection
    /// order, creating the parent directory first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::WriteFailure`] if the directory or file
    /// cannot be written. The failure is reported, never swallowed;
    /// callers decide whether it is fatal.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| TallyError::WriteFailure {
                path: self.path.clone(),
                source,
            })?;
        }
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_data_line());
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| TallyError::WriteFailure {
            path: self.path.clone(),
            source,
        })?;
        debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Decodes one non-blank save line, exhaustively over the type tags.
///
/// Fields beyond the grammar are ignored, mirroring the whitespace-tolerant
/// split on load.
fn decode_line(line: &str) -> Result<Task> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(TallyError::MalformedLine {
            line: line.to_string(),
        });
    }

    let tag = fields[0];
    if !matches!(tag, "T" | "D" | "E") {
        return Err(TallyError::UnknownType {
            tag: tag.to_string(),
            line: line.to_string(),
        });
    }
    let done = match fields[1] {
        "0" => false,
        "1" => true,
        flag => {
            return Err(TallyError::InvalidDoneFlag {
                flag: flag.to_string(),
            })
        }
    };
    let description = fields[2].to_string();

    let kind = match tag {
        "T" => TaskKind::Todo,
        "D" => TaskKind::Deadline {
            due: parse_when(temporal_field(&fields, line)?)?,
        },
        "E" => {
            let span = temporal_field(&fields, line)?;
            // The span joins both endpoints with a literal " - ".
            let Some((start, end)) = span.split_once(" - ") else {
                return Err(TallyError::MissingTemporalField {
                    line: line.to_string(),
                });
            };
            TaskKind::Event {
                start: parse_when(start.trim())?,
                end: parse_when(end.trim())?,
            }
        }
        _ => unreachable!("tag validated above"),
    };

    let mut task = Task::new(description, kind);
    if done {
        task.mark_done();
    }
    Ok(task)
}

/// Returns the mandatory 4th field of a `D`/`E` line.
fn temporal_field<'a>(fields: &[&'a str], line: &str) -> Result<&'a str> {
    match fields.get(3) {
        Some(field) if !field.is_empty() => Ok(field),
        _ => Err(TallyError::MissingTemporalField {
            line: line.to_string(),
        }),
    }
}
