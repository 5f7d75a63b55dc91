use chrono::{Datelike, NaiveDate};

pub trait NaiveDateExt {
    /// Number of days in this date's month (28..=31).
    fn days_in_month(&self) -> u32;
    /// First day of this date's month.
    fn first_of_month(&self) -> NaiveDate;
}

impl NaiveDateExt for NaiveDate {
    fn days_in_month(&self) -> u32 {
        let first = self.first_of_month();
        let next = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        match next {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            // Only reachable for December of chrono's last representable year.
            None => 31,
        }
    }

    fn first_of_month(&self) -> NaiveDate {
        *self - chrono::Duration::days(i64::from(self.day0()))
    }
}
