//! Tally CLI application
//!
//! Interactive console front end for the tally task tracker: builds a
//! session, greets, then feeds stdin to the session line by line and
//! prints each framed response until the exit response or end of input.

mod args;
mod ui;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::{info, warn};
use tally_core::Session;
use ui::Ui;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_greeting,
    } = Args::parse();

    let builder = Session::builder().with_data_file(data_file);
    let mut session = match builder.clone().build() {
        Ok(session) => session,
        Err(err) => {
            // Documented fallback: a corrupt save file must not keep the
            // tracker from starting. The file is left untouched until the
            // next successful mutation rewrites it.
            warn!("could not load saved tasks: {err}; starting with an empty list");
            builder
                .build_empty()
                .context("Failed to initialize session")?
        }
    };

    info!("Tally started");

    let ui = Ui::new();
    if !no_greeting {
        ui.framed(&session.greeting());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = session.handle(&line);
        ui.respond(&response);
        if response.is_exit() {
            break;
        }
    }

    Ok(())
}
