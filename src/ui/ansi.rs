// ANSI/VT100 styling sequences.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Bold text.
pub const STYLE_BOLD: &str = crate::csi!("1m");
/// Bright blue foreground.
pub const FG_BRIGHT_BLUE: &str = crate::csi!("94m");
/// Bold bright blue, used for today's date.
pub const TODAY_STYLE: &str = crate::csi2!("1m", "94m");
