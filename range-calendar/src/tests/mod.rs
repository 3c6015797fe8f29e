mod config;
mod grid;

use crate::CalendarOptions;

/// Options anchored on a fixed month so tests never depend on today.
pub(crate) fn anchored() -> CalendarOptions {
    CalendarOptions::default().with_starting_month("2024-01-01")
}

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}
