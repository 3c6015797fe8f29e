#![doc = include_str!("../../README.md")]

pub mod calendar;
pub mod config;
pub mod error;
pub mod selection;
pub mod surface;
pub mod viewport;

#[cfg(test)]
mod tests;

// Public re-exports
pub use month_grid::{
    build_months, days_in_month, leap_year, month_days, weekday_labels, Day, Month, MonthNames,
    WeekStart,
};

pub use crate::calendar::{CalendarState, Event, Signal, Transition};
pub use crate::config::{parse_date, CalendarOptions};
pub use crate::error::InvalidMonthNames;
pub use crate::selection::SelectedRange;
pub use crate::surface::{
    DayContent, ItemLayout, MonthListModel, NoContent, ViewToken, ViewableItems,
};
pub use crate::viewport::Viewport;
