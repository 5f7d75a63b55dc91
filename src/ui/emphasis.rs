use crate::core::types::EmphasisStyle;
use crate::ui::ansi::{STYLE_RESET, TODAY_STYLE};
use std::io;
use terminal_size::terminal_size_of;

/// Sets a rendered cell apart from its neighbours.
pub trait Emphasis {
    fn emphasize(&self, cell: &str) -> String;
}

/// Bold bright-blue ANSI styling.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiEmphasis;

impl Emphasis for AnsiEmphasis {
    fn emphasize(&self, cell: &str) -> String {
        format!("{TODAY_STYLE}{cell}{STYLE_RESET}")
    }
}

/// Surrounds the cell with asterisks, for terminals without ANSI support.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainEmphasis;

impl Emphasis for PlainEmphasis {
    fn emphasize(&self, cell: &str) -> String {
        format!("*{cell}*")
    }
}

/// True when stdout itself is attached to a terminal. Redirecting stdout to
/// a file counts as not a terminal even if stderr or stdin still are.
pub fn stdout_is_terminal() -> bool {
    terminal_size_of(io::stdout()).is_some()
}

/// Pick the renderer for `style`; `Auto` asks `is_terminal` once.
pub fn emphasis_for(
    style: EmphasisStyle,
    is_terminal: impl FnOnce() -> bool,
) -> Box<dyn Emphasis> {
    match style {
        EmphasisStyle::Ansi => Box::new(AnsiEmphasis),
        EmphasisStyle::Plain => Box::new(PlainEmphasis),
        EmphasisStyle::Auto if is_terminal() => Box::new(AnsiEmphasis),
        EmphasisStyle::Auto => Box::new(PlainEmphasis),
    }
}
