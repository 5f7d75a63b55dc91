
use crate::calendar::CalendarRenderer;
use crate::core::clock::FixedDate;
use crate::core::types::YearMonth;
use crate::ui::emphasis::{AnsiEmphasis, PlainEmphasis};
use chrono::NaiveDate;

pub(super) fn ym(year: i64, month: i64) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

pub(super) fn fixed(year: i32, month: u32, day: u32) -> FixedDate {
    FixedDate(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

pub(super) fn plain_renderer(today: FixedDate) -> CalendarRenderer {
    CalendarRenderer::new(Box::new(PlainEmphasis), Box::new(today))
}

pub(super) fn ansi_renderer(today: FixedDate) -> CalendarRenderer {
    CalendarRenderer::new(Box::new(AnsiEmphasis), Box::new(today))
}
