use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl, RunOutcome};
use std::io::{BufRead, Write};

/// Drives a [`Flow`]: render, read one line, hand it over, repeat.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    pub fn run_with_io<F: Flow, R: BufRead, W: Write>(
        &self,
        flow: &mut F,
        mut reader: R,
        out: &mut W,
    ) -> Result<RunOutcome> {
        loop {
            flow.render(out)?;
            out.flush()?;

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(RunOutcome::InputClosed);
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match flow.handle_input(line, out)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(RunOutcome::Finished),
            }
        }
    }
}
