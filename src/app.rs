use crate::calendar::CalendarRenderer;
use crate::errors::Result;
use crate::prompter::collector::InputCollector;
use std::io::{BufRead, Write};

/// One session: ask for the year, then the month, then print that month once.
pub fn run<R: BufRead, W: Write>(
    collector: &InputCollector,
    renderer: &CalendarRenderer,
    reader: &mut R,
    out: &mut W,
) -> Result<()> {
    let year = collector.fetch_year_from(reader, out)?;
    let month = collector.fetch_month_from(reader, out)?;
    renderer.display_cal(year, i64::from(month), out)
}
