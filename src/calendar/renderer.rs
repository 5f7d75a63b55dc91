use crate::calendar::grid::{WeekGrid, WeekRow};
use crate::core::clock::DateProvider;
use crate::core::types::YearMonth;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::ui::emphasis::Emphasis;
use chrono::Datelike;
use std::io::Write;

pub const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Blank cell for slots outside the month; same width as a day cell.
const EMPTY_CELL: &str = "   ";

/// Renders one month as text, marking today's date.
pub struct CalendarRenderer {
    emphasis: Box<dyn Emphasis>,
    clock: Box<dyn DateProvider>,
    logger: Option<Logger>,
}

impl CalendarRenderer {
    pub fn new(emphasis: Box<dyn Emphasis>, clock: Box<dyn DateProvider>) -> Self {
        Self {
            emphasis,
            clock,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Print the calendar for `year`/`month` to `out`.
    ///
    /// Values are expected to come from the input collector; anything it
    /// would have rejected is returned as the same rejection error.
    pub fn display_cal<W: Write>(&self, year: i64, month: i64, out: &mut W) -> Result<()> {
        let ym = YearMonth::new(year, month)?;
        for line in self.render(ym)? {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        if let Some(logger) = &self.logger {
            logger.info(format!("Rendered calendar for {ym}"), LogTarget::FileOnly);
        }
        Ok(())
    }

    /// Output lines without terminators: a leading blank line, the title, the
    /// weekday header, one line per week, a trailing blank line.
    pub fn render(&self, ym: YearMonth) -> Result<Vec<String>> {
        let grid = WeekGrid::for_month(ym)?;
        let highlight = self.today_in(ym);

        let mut lines = Vec::with_capacity(grid.weeks().len() + 4);
        lines.push(String::new());
        lines.push(format!("      {} {}", ym.month.name(), ym.year));
        lines.push(WEEKDAY_HEADER.to_string());
        lines.extend(
            grid.weeks()
                .iter()
                .map(|week| self.format_week(week, highlight)),
        );
        lines.push(String::new());
        Ok(lines)
    }

    /// Today's day number, if today falls inside `ym`.
    fn today_in(&self, ym: YearMonth) -> Option<u32> {
        let today = self.clock.today();
        let same_month = i64::from(today.year()) == ym.year.value()
            && today.month() == ym.month.value();
        same_month.then(|| today.day())
    }

    fn format_week(&self, week: &WeekRow, highlight: Option<u32>) -> String {
        let mut line = String::with_capacity(7 * EMPTY_CELL.len());
        for slot in week {
            match slot {
                None => line.push_str(EMPTY_CELL),
                Some(day) => {
                    let cell = format!("{day:>2}");
                    if highlight == Some(*day) {
                        line.push_str(&self.emphasis.emphasize(&cell));
                    } else {
                        line.push_str(&cell);
                    }
                    line.push(' ');
                }
            }
        }
        line.truncate(line.trim_end().len());
        line
    }
}
