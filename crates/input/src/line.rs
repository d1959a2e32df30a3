//! Line-buffered command source.

use std::io::{self, BufRead, Write};

use crate::core::InputSource;
use crate::map::parse_command;
use crate::types::{Command, PROMPT};

/// Prompts on `out`, then reads one line from `input` per command.
///
/// End of input yields [`Command::Quit`].
pub struct LineInput<R, W> {
    input: R,
    out: W,
    line: String,
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            line: String::with_capacity(16),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn next_command(&mut self) -> io::Result<Command> {
        self.out.write_all(PROMPT.as_bytes())?;
        self.out.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(Command::Quit);
        }
        Ok(parse_command(&self.line))
    }
}
