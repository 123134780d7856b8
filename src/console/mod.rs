//! console/mod.rs
//!
//! Everything that talks to the human operator.
//!
//! # Mental model
//! The batch is a plain loop: for each file, print what's there, ask for
//! four fields, apply them. The only "UI" is line-based text, so all of it
//! goes through the [`Operator`] trait:
//! - `say(line)` prints one line
//! - `ask(prompt)` prints a prompt and blocks for one line of input
//!
//! `main` wires this to stdin/stdout; tests wire it to in-memory buffers.

pub mod display;
pub mod editor;
pub mod session;

use std::io::{self, BufRead, Write};

/// Line-based conversation with whoever is retagging the files.
pub trait Operator {
    /// Print one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print `prompt` (no newline) and read one line of input.
    ///
    /// Returns the raw line without its trailing newline. Closed input is an
    /// `UnexpectedEof` error: there's no sensible default for a tag value.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// [`Operator`] over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer (tests read what was printed).
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Operator for Console<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all fields were entered",
            ));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{printed, scripted};
    use super::*;

    #[test]
    fn ask_prints_prompt_and_strips_newline() {
        let mut console = scripted(&["  Jane  "]);
        let answer = console.ask("Name? ").unwrap();

        assert_eq!(answer, "  Jane  ");
        assert_eq!(printed(console), "Name? ");
    }

    #[test]
    fn ask_on_closed_input_is_eof() {
        let mut console = Console::new(io::empty(), Vec::new());
        let err = console.ask("Name? ").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
