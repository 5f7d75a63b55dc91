use chrono::{Local, NaiveDate};

/// Source of "today" for the renderer.
pub trait DateProvider {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl DateProvider for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used to pin "today" in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateProvider for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
