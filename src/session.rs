//! Interactive prompt session.
//!
//! The session is a small state loop driven by blocking line reads:
//! ask for a year, report it, ask whether to go again. Any `BufRead`/`Write`
//! pair can drive it, which keeps it testable without a terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use crate::{MAX_YEAR, MIN_YEAR, Year, canada_day, report, validate_year};

/// Error type for the prompt session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Standard input is not attached to a terminal.
    #[error("this CLI requires an interactive terminal")]
    NotInteractive,

    /// Input reached end-of-file before the user chose to stop.
    #[error("input closed before the session finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AskYear,
    Report(Year),
    AskContinue,
    Finished,
}

/// A prompt session over an input and output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    reported: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reported: 0,
        }
    }

    /// Runs the session until the user declines to continue.
    /// Returns the number of results shown.
    ///
    /// # Errors
    /// Returns `SessionError::InputClosed` if input ends mid-session, or
    /// `SessionError::Io` if reading or writing fails.
    pub fn run(mut self) -> Result<usize, SessionError> {
        self.output.write_all(report::welcome().as_bytes())?;

        let mut state = State::AskYear;
        while state != State::Finished {
            debug!(?state, "session step");
            state = match state {
                State::AskYear => self.ask_year()?,
                State::Report(year) => self.report(year)?,
                State::AskContinue => self.ask_continue()?,
                State::Finished => State::Finished,
            };
        }

        self.output.write_all(report::farewell().as_bytes())?;
        self.output.flush()?;
        Ok(self.reported)
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    fn ask_year(&mut self) -> Result<State, SessionError> {
        write!(self.output, "? Enter a year ({MIN_YEAR}-{MAX_YEAR}): ")?;
        let line = self.read_line()?;
        match validate_year(line.as_str()) {
            Ok(year) => Ok(State::Report(year)),
            Err(err) => {
                writeln!(self.output, ">> {err}")?;
                Ok(State::AskYear)
            }
        }
    }

    fn report(&mut self, year: Year) -> Result<State, SessionError> {
        let result = canada_day(year);
        self.output.write_all(report::full(&result).as_bytes())?;
        self.reported += 1;
        Ok(State::AskContinue)
    }

    fn ask_continue(&mut self) -> Result<State, SessionError> {
        write!(
            self.output,
            "? Would you like to calculate for another year? (Y/n) "
        )?;
        let line = self.read_line()?;
        match parse_confirm(&line) {
            Some(true) => {
                writeln!(self.output)?;
                Ok(State::AskYear)
            }
            Some(false) => Ok(State::Finished),
            None => {
                writeln!(self.output, ">> Please answer yes or no.")?;
                Ok(State::AskContinue)
            }
        }
    }
}

/// Reads a yes/no answer. Empty input takes the default, yes.
fn parse_confirm(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Runs a session on the process's stdin and stdout.
///
/// # Errors
/// Returns `SessionError::NotInteractive` if stdin is not a terminal, or any
/// error from [`Session::run`].
pub fn run_on_terminal() -> Result<usize, SessionError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(SessionError::NotInteractive);
    }
    Session::new(stdin.lock(), io::stdout().lock()).run()
}
