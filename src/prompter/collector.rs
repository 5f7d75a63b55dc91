use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::flows::value_prompt::ValuePrompt;
use crate::prompter::models::RunOutcome;
use crate::prompter::prompter::Prompter;
use std::io::{BufRead, Write};

/// Collects the year and month, re-prompting until each is valid.
#[derive(Debug, Clone)]
pub struct InputCollector {
    prompter: Prompter,
    logger: Logger,
}

impl InputCollector {
    pub fn new(logger: Logger) -> Self {
        Self {
            prompter: Prompter::new(),
            logger,
        }
    }

    pub fn fetch_year_from<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<i64> {
        self.collect(ValuePrompt::year(self.logger.clone()), reader, out)
    }

    pub fn fetch_month_from<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<u32> {
        self.collect(ValuePrompt::month(self.logger.clone()), reader, out)
    }

    fn collect<T: std::fmt::Display, R: BufRead, W: Write>(
        &self,
        mut flow: ValuePrompt<T>,
        reader: &mut R,
        out: &mut W,
    ) -> Result<T> {
        let field = flow.field();
        let outcome = self.prompter.run_with_io(&mut flow, reader, out)?;
        match (outcome, flow.take_value()) {
            (RunOutcome::Finished, Some(value)) => {
                self.logger.info(
                    format!(
                        "Accepted {field} {value} after {} rejected attempt(s)",
                        flow.rejections()
                    ),
                    LogTarget::FileOnly,
                );
                Ok(value)
            }
            _ => Err(Error::InputClosed { field }),
        }
    }
}
