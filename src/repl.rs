//! The interactive read-eval-print loop.
//!
//! Thin I/O shell around the command handlers: reads a line, tokenizes it
//! on whitespace, dispatches on the case-insensitive leading token, and
//! prints whatever text comes back. All domain errors have already been
//! converted to display strings by the time anything reaches stdout.

use crate::commands::handlers;
use crate::config::Config;
use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the assistant bot!";
const FAREWELL: &str = "Good bye!";

/// What the loop should do after one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and keep going; empty means just re-prompt.
    Reply(String),
    /// Print the farewell and stop.
    Exit,
}

/// Dispatch one input line against the book, using the wall clock as
/// "today" for the birthday window.
pub fn dispatch(book: &mut AddressBook, config: &Config, line: &str) -> Outcome {
    dispatch_at(book, config, line, Local::now().date_naive())
}

/// Dispatch with an explicit "today", so the full command surface is
/// testable without touching the clock.
pub fn dispatch_at(
    book: &mut AddressBook,
    config: &Config,
    line: &str,
    today: NaiveDate,
) -> Outcome {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Outcome::Reply(String::new());
    };
    let args: Vec<&str> = tokens.collect();

    debug!(command, argc = args.len(), "dispatching");

    match command.to_lowercase().as_str() {
        "close" | "exit" => Outcome::Exit,
        "hello" => Outcome::Reply("How can I help you?".to_string()),
        "add" => reply(handlers::add_contact(book, &args)),
        "change" => reply(handlers::change_phone(book, &args)),
        "phone" => reply(handlers::show_phone(book, &args)),
        "all" => Outcome::Reply(handlers::show_all(book)),
        "birthdays" => Outcome::Reply(handlers::birthdays(
            book,
            today,
            config.birthday_horizon_days,
        )),
        _ => Outcome::Reply("Unknown command.".to_string()),
    }
}

// The error boundary: every handler error becomes a displayed line here
fn reply(result: CommandResult<String>) -> Outcome {
    match result {
        Ok(message) => Outcome::Reply(message),
        Err(err) => Outcome::Reply(err.to_string()),
    }
}

/// Run the interactive loop until `close`/`exit` or end of input.
pub fn run(
    book: &mut AddressBook,
    config: &Config,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    writeln!(output, "{}", GREETING)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            // End of input counts as a goodbye
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        };

        match dispatch(book, config, &line) {
            Outcome::Reply(message) if message.is_empty() => {}
            Outcome::Reply(message) => writeln!(output, "{}", message)?,
            Outcome::Exit => {
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
        }
    }
}
