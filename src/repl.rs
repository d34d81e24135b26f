//! Read-eval-print loop for the assistant.
//!
//! The loop reads one line at a time, splits it into a command and its
//! arguments, hands them to the matching handler and prints the reply. It is
//! generic over its input and output so sessions can be scripted in tests.

use crate::handlers;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

pub const PROMPT: &str = "Enter a command: ";
pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// A recognized command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    Exit,
}

impl Command {
    /// Primary name followed by aliases.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Self::Hello => &["hello"],
            Self::Add => &["add"],
            Self::Change => &["change"],
            Self::Phone => &["phone"],
            Self::All => &["all"],
            Self::Delete => &["delete"],
            Self::Exit => &["exit", "close"],
        }
    }

    pub const ALL: [Command; 7] = [
        Self::Hello,
        Self::Add,
        Self::Change,
        Self::Phone,
        Self::All,
        Self::Delete,
        Self::Exit,
    ];
}

impl FromStr for Command {
    type Err = String;

    /// Match a lowercase command word, as produced by [`parse_input`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.names().contains(&s))
            .ok_or_else(|| s.to_string())
    }
}

/// Split a line into its lowercased command word and the remaining tokens.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep reading.
    Reply(String),
    /// Print the farewell and stop.
    Exit,
    /// Nothing to print.
    Skip,
}

/// One interactive session owning its address book.
#[derive(Debug, Default)]
pub struct Session {
    book: AddressBook,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let Some((word, args)) = parse_input(line) else {
            return Outcome::Skip;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!(command = %unknown, "Unknown command");
                return Outcome::Reply(INVALID_COMMAND.to_string());
            }
        };
        debug!(?command, args = args.len(), "Dispatching command");

        let reply = match command {
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::Delete => handlers::delete_contact(&args, &mut self.book),
            Command::Exit => return Outcome::Exit,
        };

        Outcome::Reply(reply)
    }
}

/// Run a session until `close`/`exit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
pub fn run<R, W>(input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    info!("Session started");
    writeln!(output, "{}", WELCOME)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // End of input ends the session like `exit`.
            writeln!(output)?;
            writeln!(output, "{}", GOODBYE)?;
            break;
        };

        match session.dispatch(&line?) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Skip => {}
            Outcome::Exit => {
                writeln!(output, "{}", GOODBYE)?;
                break;
            }
        }
    }

    info!(contacts = session.book().len(), "Session finished");
    Ok(())
}
