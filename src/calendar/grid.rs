use crate::core::types::YearMonth;
use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Datelike, NaiveDate};

/// One week, Monday first. `None` marks a slot outside the month.
pub type WeekRow = [Option<u32>; 7];

/// Years above this are mapped into the 400-year Gregorian cycle before
/// asking chrono, which stops a little past 262,000.
const MAX_DIRECT_YEAR: i64 = 200_000;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(ym: YearMonth) -> Result<u32> {
    Ok(first_of_month(ym)?.days_in_month())
}

/// The Gregorian calendar repeats every 400 years (146,097 days, a whole
/// number of weeks), so weekdays and month lengths of `year` match those of
/// its proxy.
fn proxy_year(year: i64) -> i32 {
    if year <= MAX_DIRECT_YEAR {
        year as i32
    } else {
        2000 + year.rem_euclid(400) as i32
    }
}

fn first_of_month(ym: YearMonth) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(proxy_year(ym.year.value()), ym.month.value(), 1)
        .ok_or_else(|| Error::Domain(format!("Cannot build a calendar for {ym}.")))
}

/// Weeks of a month laid out Monday to Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    weeks: Vec<WeekRow>,
}

impl WeekGrid {
    pub fn for_month(ym: YearMonth) -> Result<Self> {
        let first = first_of_month(ym)?;
        let lead = first.weekday().num_days_from_monday() as usize;
        let days = first.days_in_month();

        let mut slots: Vec<Option<u32>> = Vec::with_capacity(42);
        slots.extend(std::iter::repeat_n(None, lead));
        slots.extend((1..=days).map(Some));
        let trail = (7 - slots.len() % 7) % 7;
        slots.extend(std::iter::repeat_n(None, trail));

        let weeks = slots
            .chunks_exact(7)
            .map(|chunk| {
                let mut row: WeekRow = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect();
        Ok(Self { weeks })
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Real day numbers in row-major order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flat_map(|week| week.iter().flatten().copied())
    }
}
