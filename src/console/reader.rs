use std::collections::VecDeque;
use std::io::BufRead;

use crate::{
    Error,
    error::Result,
};

use super::State;

/// Source of console input lines. `Ok(None)` means input is exhausted.
pub trait LineReader {
    fn read_line(&mut self, state: State) -> Result<Option<String>>;
}

/// Line-by-line reader over any buffered input, used when stdin is a pipe.
pub struct StdinReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> StdinReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for StdinReader<R> {
    fn read_line(&mut self, _: State) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(|e| {
            Error::Io(format!("Reading console input error: {e}"))
        })?;

        if n == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines.
pub struct ScriptReader {
    lines: VecDeque<String>,
}

impl ScriptReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptReader {
    fn read_line(&mut self, _: State) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
