pub mod grid;
pub mod renderer;
#[cfg(test)]
mod tests;

pub use grid::{WeekGrid, WeekRow, days_in_month, is_leap_year};
pub use renderer::{CalendarRenderer, WEEKDAY_HEADER};
