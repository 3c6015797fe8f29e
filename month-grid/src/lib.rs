#![doc = include_str!("../README.md")]

use std::sync::Arc;
use std::{error, fmt};

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const DEFAULT_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The weekday a grid row starts on, consumed by both grid construction and
/// header-label ordering.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Column of `weekday` in a row starting on `self`, in the range `0..7`.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use month_grid::WeekStart;
    ///
    /// assert_eq!(WeekStart::Monday.offset(Weekday::Mon), 0);
    /// assert_eq!(WeekStart::Monday.offset(Weekday::Sun), 6);
    /// assert_eq!(WeekStart::Sunday.offset(Weekday::Sun), 0);
    /// assert_eq!(WeekStart::Sunday.offset(Weekday::Wed), 3);
    /// ```
    pub fn offset(self, weekday: Weekday) -> u32 {
        match self {
            Self::Monday => weekday.num_days_from_monday(),
            Self::Sunday => weekday.num_days_from_sunday(),
        }
    }
}

/// Weekday header labels ordered to match grids built with `week_start`.
///
/// ```
/// use chrono::Weekday;
/// use month_grid::{weekday_labels, WeekStart};
///
/// assert_eq!(weekday_labels(WeekStart::Monday)[0], Weekday::Mon);
/// assert_eq!(weekday_labels(WeekStart::Sunday)[0], Weekday::Sun);
/// assert_eq!(weekday_labels(WeekStart::Sunday)[6], Weekday::Sat);
/// ```
pub fn weekday_labels(week_start: WeekStart) -> [Weekday; 7] {
    use chrono::Weekday::*;

    match week_start {
        WeekStart::Monday => [Mon, Tue, Wed, Thu, Fri, Sat, Sun],
        WeekStart::Sunday => [Sun, Mon, Tue, Wed, Thu, Fri, Sat],
    }
}

/// Error raised when a month name override does not hold exactly 12 entries.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidMonthNames(pub usize);

impl fmt::Display for InvalidMonthNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected 12 month names, got {}", self.0)
    }
}

impl error::Error for InvalidMonthNames {}

/// A lookup table of 12 localized month names.
///
/// Defaults to English names and is cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthNames(Arc<[String; 12]>);

impl Default for MonthNames {
    fn default() -> Self {
        Self(Arc::new(DEFAULT_MONTH_NAMES.map(String::from)))
    }
}

impl MonthNames {
    /// Build a lookup from a custom name list, which must hold exactly 12
    /// entries.
    ///
    /// ```
    /// use month_grid::{InvalidMonthNames, MonthNames};
    ///
    /// let names = MonthNames::from_slice(&[
    ///     "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio",
    ///     "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(names.get(1), "Enero");
    /// assert_eq!(MonthNames::from_slice(&["Enero"]), Err(InvalidMonthNames(1)));
    /// ```
    pub fn from_slice<S: AsRef<str>>(names: &[S]) -> Result<Self, InvalidMonthNames> {
        let names: [String; 12] = names
            .iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|names: Vec<String>| InvalidMonthNames(names.len()))?;

        Ok(Self(Arc::new(names)))
    }

    /// Get the name of a month from its number in `1..=12`.
    ///
    /// ```
    /// use month_grid::MonthNames;
    ///
    /// let names = MonthNames::default();
    /// assert_eq!(names.get(1), "January");
    /// assert_eq!(names.get(12), "December");
    /// ```
    pub fn get(&self, month: u32) -> &str {
        assert!((1..=12).contains(&month));
        &self.0[(month - 1) as usize]
    }
}

/// Check if a year is a leap year.
///
/// ```
/// use month_grid::leap_year;
///
/// assert!(leap_year(2000));
/// assert!(!leap_year(1900));
/// assert!(leap_year(2024));
/// assert!(!leap_year(2023));
/// ```
pub fn leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of calendar days in a month, accounting for leap years.
///
/// ```
/// use month_grid::days_in_month;
///
/// assert_eq!(days_in_month(1, 2024), 31);
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 2023), 28);
/// assert_eq!(days_in_month(4, 2023), 30);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    assert!((1..=12).contains(&month));

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap_year(year) => 29,
        _ => 28,
    }
}

/// A single cell of a month grid.
///
/// Days are immutable values; state layers replace them wholesale instead of
/// mutating flags in place.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Day {
    /// Unique id of the shape `<monthNumber>-<YYYY-MM-DD>`, where the month
    /// number is the owning month's even for padding cells.
    pub id: String,
    pub date: NaiveDate,
    /// Whether the day falls inside the currently selected range.
    pub is_active: bool,
    pub is_start_date: bool,
    pub is_end_date: bool,
    /// False for padding cells that belong to an adjacent month.
    pub is_visible: bool,
}

/// A month view-model: a 7-aligned day grid plus the flags a rendering
/// surface consumes.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Month {
    /// Sequential position in the generated list.
    pub id: usize,
    /// Month number in `1..=12`.
    pub month_number: u32,
    pub year: i32,
    /// Display title, `<month name> <year>`.
    pub name: String,
    /// Day grid, always a multiple of 7 cells.
    pub days: Vec<Day>,
    /// Whether the month is inside the surface's rendering window.
    pub is_visible: bool,
    /// Selection range echo, kept for memoized-render comparisons.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Month {
    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_number, 1)
            .expect("month grid holds a valid year and month")
    }

    /// Check if a date falls inside this month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use month_grid::{build_months, MonthNames, WeekStart};
    ///
    /// let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let months = build_months(first, 2, &MonthNames::default(), WeekStart::Monday);
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    /// assert!(!months[0].contains(date));
    /// assert!(months[1].contains(date));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month_number
    }
}

/// Build the day grid of a month.
///
/// The grid starts with the padding cells needed to align the 1st of the
/// month to its column, then one visible cell per calendar day, then the
/// padding cells completing the last week row. The total is always a
/// multiple of 7.
///
/// ```
/// use month_grid::{month_days, WeekStart};
///
/// // September 2024 starts on a Sunday: 6 leading cells under a
/// // Monday-aligned header, 30 visible days, 6 trailing cells.
/// let days = month_days(2024, 9, WeekStart::Monday);
/// assert_eq!(days.len(), 42);
/// assert_eq!(days.iter().filter(|day| day.is_visible).count(), 30);
/// assert_eq!(days[0].id, "9-2024-08-26");
/// assert!(!days[0].is_visible);
/// assert_eq!(days[6].id, "9-2024-09-01");
/// assert!(days[6].is_visible);
/// ```
pub fn month_days(year: i32, month: u32, week_start: WeekStart) -> Vec<Day> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of the month should always exist");

    let offset = i64::from(week_start.offset(first.weekday()));
    let in_month = i64::from(days_in_month(month, year));
    let to_complete = (offset + in_month) % 7;
    let trailing = if to_complete == 0 { 0 } else { 7 - to_complete };

    (-offset..in_month + trailing)
        .map(|i| {
            let date = first + Duration::days(i);

            Day {
                id: format!("{month}-{date}"),
                date,
                is_active: false,
                is_start_date: false,
                is_end_date: false,
                is_visible: (0..in_month).contains(&i),
            }
        })
        .collect()
}

/// Build `count + 1` consecutive months starting at `first_month`'s year and
/// month, with sequential ids from 0.
///
/// Selection and visibility flags default to unset; a December to January
/// rollover increments the year.
///
/// ```
/// use chrono::NaiveDate;
/// use month_grid::{build_months, MonthNames, WeekStart};
///
/// let first = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
/// let months = build_months(first, 3, &MonthNames::default(), WeekStart::Monday);
///
/// let titles: Vec<_> = months.iter().map(|month| month.name.as_str()).collect();
/// assert_eq!(
///     titles,
///     ["November 2024", "December 2024", "January 2025", "February 2025"],
/// );
/// assert_eq!(months[3].id, 3);
/// assert_eq!(months[3].year, 2025);
/// ```
pub fn build_months(
    first_month: NaiveDate,
    count: usize,
    names: &MonthNames,
    week_start: WeekStart,
) -> Vec<Month> {
    let mut year = first_month.year();
    let mut month_number = first_month.month();
    let mut months = Vec::with_capacity(count + 1);

    for id in 0..=count {
        if id > 0 {
            if month_number < 12 {
                month_number += 1;
            } else {
                month_number = 1;
                year += 1;
            }
        }

        months.push(Month {
            id,
            month_number,
            year,
            name: format!("{} {}", names.get(month_number), year),
            days: month_days(year, month_number, week_start),
            is_visible: false,
            start_date: None,
            end_date: None,
        });
    }

    months
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grids_are_week_aligned() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                for week_start in [WeekStart::Monday, WeekStart::Sunday] {
                    let days = month_days(year, month, week_start);
                    assert_eq!(days.len() % 7, 0, "{year}-{month} with {week_start:?}");

                    let visible = days.iter().filter(|day| day.is_visible).count();
                    assert_eq!(visible as u32, days_in_month(month, year));
                }
            }
        }
    }

    #[test]
    fn no_padding_when_rows_are_exact() {
        // February 2021 starts on a Monday and spans exactly 4 weeks.
        let days = month_days(2021, 2, WeekStart::Monday);
        assert_eq!(days.len(), 28);
        assert!(days.iter().all(|day| day.is_visible));
    }

    #[test]
    fn padding_days_carry_adjacent_dates() {
        let days = month_days(2024, 9, WeekStart::Monday);

        let leading: Vec<_> = days
            .iter()
            .take_while(|day| !day.is_visible)
            .map(|day| day.date.day())
            .collect();
        assert_eq!(leading, [26, 27, 28, 29, 30, 31]);

        let trailing: Vec<_> = days
            .iter()
            .skip_while(|day| !day.is_visible)
            .skip_while(|day| day.is_visible)
            .map(|day| day.date.day())
            .collect();
        assert_eq!(trailing, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sunday_alignment_shifts_the_offset() {
        // September 2024 starts on a Sunday, so a Sunday-aligned grid has no
        // leading padding at all.
        let days = month_days(2024, 9, WeekStart::Sunday);
        assert_eq!(days.len(), 35);
        assert!(days[0].is_visible);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
    }

    #[test]
    fn day_ids_are_unique_across_a_list() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let months = build_months(first, 12, &MonthNames::default(), WeekStart::Monday);

        let mut seen = std::collections::HashSet::new();

        for month in &months {
            for day in &month.days {
                assert!(seen.insert(day.id.clone()), "duplicate id {}", day.id);
            }
        }
    }
}
