use crate::core::types::{MonthNumber, Year};
use crate::errors::{InputField, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use std::io::Write;

/// Asks for one value until `parse` accepts a line.
///
/// Rejections are written to the prompt output and the loop continues; any
/// other error ends the flow.
pub struct ValuePrompt<T> {
    field: InputField,
    prompt: &'static str,
    parse: fn(&str) -> Result<T>,
    logger: Logger,
    value: Option<T>,
    rejections: usize,
}

impl ValuePrompt<i64> {
    pub fn year(logger: Logger) -> Self {
        Self::new(
            InputField::Year,
            "Enter year: ",
            |s| Ok(Year::try_from_str(s)?.value()),
            logger,
        )
    }
}

impl ValuePrompt<u32> {
    pub fn month(logger: Logger) -> Self {
        Self::new(
            InputField::Month,
            "Enter month (1-12): ",
            |s| Ok(MonthNumber::try_from_str(s)?.value()),
            logger,
        )
    }
}

impl<T> ValuePrompt<T> {
    pub fn new(
        field: InputField,
        prompt: &'static str,
        parse: fn(&str) -> Result<T>,
        logger: Logger,
    ) -> Self {
        Self {
            field,
            prompt,
            parse,
            logger,
            value: None,
            rejections: 0,
        }
    }

    pub fn field(&self) -> InputField {
        self.field
    }

    /// Number of lines turned down so far.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T> Flow for ValuePrompt<T> {
    fn render(&mut self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", self.prompt)?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str, out: &mut dyn Write) -> Result<FlowCtrl> {
        match (self.parse)(input) {
            Ok(value) => {
                self.value = Some(value);
                Ok(FlowCtrl::Finish)
            }
            Err(err) if err.is_input_rejection() => {
                self.rejections += 1;
                writeln!(out, "{err}")?;
                self.logger.warn(
                    format!("Rejected {} input '{}': {err}", self.field, input.trim()),
                    LogTarget::FileOnly,
                );
                Ok(FlowCtrl::Continue)
            }
            Err(err) => Err(err),
        }
    }
}
