use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the Tally task tracker
///
/// Tally is a personal task tracker driven by short text commands. It
/// reads one command per line from standard input (`todo`, `deadline`,
/// `event`, `list`, `find`, `mark`, `unmark`, `delete`, `bye`), keeps the
/// task list in a plain-text save file, and echoes a framed response for
/// every command until `bye` or end of input.
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Path to the save file. Defaults to
    /// $XDG_DATA_HOME/tally/tasks.txt
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Skip the greeting banner (useful for scripted input)
    #[arg(long)]
    pub no_greeting: bool,
}
