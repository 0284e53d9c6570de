//! Core library for the Tally task tracker.
//!
//! This crate implements the command-to-task-model pipeline: one raw input
//! line is parsed into a typed instruction, applied to an in-memory
//! ordered task collection, and the collection is written through to a
//! line-oriented save file after every mutation.
//!
//! ```text
//! raw line → parser → (instruction | new Task) → TaskList → Storage → disk
//!                                                    │
//!                                                    └→ Response → front end
//! ```
//!
//! Front ends (the bundled console loop, or a GUI) talk to exactly one
//! type: [`Session`]. Each handled line yields a tri-state [`Response`]
//! (informational, error, or terminate) so callers never deal with the
//! error taxonomy directly.
//!
//! # Quick Start
//!
//! ```rust
//! use tally_core::Session;
//!
//! // In-memory session; `Session::builder()` adds a save file.
//! let mut session = Session::in_memory();
//!
//! let added = session.handle("todo read book");
//! assert!(!added.is_error());
//! assert!(added.message().contains("read book"));
//!
//! let listed = session.handle("list");
//! assert_eq!(listed.message(), "1. [T][ ] read book");
//!
//! let farewell = session.handle("bye");
//! assert!(farewell.is_exit());
//! ```
//!
//! Everything is single-threaded and synchronous: a command runs to
//! completion — including the save — before the next line is read.

pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod session;
pub mod storage;
pub mod tasks;

// Re-export commonly used types
pub use display::{Matches, NumberedTasks};
pub use error::{Result, TallyError};
pub use models::{Task, TaskKind};
pub use parser::{parse, Command};
pub use session::{Response, Session, SessionBuilder};
pub use storage::Storage;
pub use tasks::TaskList;
