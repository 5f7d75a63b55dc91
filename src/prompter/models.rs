use crate::errors::Result;
use std::io::Write;

pub enum FlowCtrl {
    Continue,
    Finish,
}

/// How a prompt loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    InputClosed,
}

pub trait Flow {
    fn render(&mut self, out: &mut dyn Write) -> Result<()>;
    fn handle_input(&mut self, input: &str, out: &mut dyn Write) -> Result<FlowCtrl>;
}
