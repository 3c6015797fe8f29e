use chrono::{Local, NaiveDate};

use month_grid::{MonthNames, WeekStart};

const NUMBER_OF_MONTHS: usize = 12;
const INITIAL_LIST_SIZE: usize = 2;
const MONTH_HEIGHT: u32 = 370;

/// Parse a `YYYY-MM-DD` date string, returning `None` on malformed input.
///
/// This is the leniency applied to every date carried by
/// [`CalendarOptions`]: a malformed value degrades to its default instead of
/// failing. Hosts feeding dates into
/// [`Event::SetRange`](crate::Event::SetRange) should go through this helper
/// to keep the same policy.
///
/// ```
/// use chrono::NaiveDate;
/// use range_calendar::parse_date;
///
/// assert_eq!(parse_date("2024-03-10"), NaiveDate::from_ymd_opt(2024, 3, 10));
/// assert_eq!(parse_date("03/10/2024"), None);
/// assert_eq!(parse_date("2024-02-30"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("Ignoring malformed date `{raw}`: {_err}");
            None
        }
    }
}

/// Host-supplied configuration for a calendar.
///
/// All date fields are `YYYY-MM-DD` strings resolved with [`parse_date`]'s
/// leniency: a malformed `starting_month` degrades to today, malformed
/// bounds or selection dates degrade to no constraint and no selection.
///
/// ```
/// use month_grid::WeekStart;
/// use range_calendar::CalendarOptions;
///
/// let options = CalendarOptions::default()
///     .with_starting_month("2024-01-01")
///     .with_number_of_months(24)
///     .with_selection(Some("2024-03-05"), Some("2024-03-20"))
///     .with_week_start(WeekStart::Sunday);
///
/// assert_eq!(options.number_of_months, 24);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Month the generated list starts at; today when unset or malformed.
    pub starting_month: Option<String>,
    /// How many consecutive months to generate past the first one.
    pub number_of_months: usize,
    /// How many months the surface renders before the first viewport event.
    pub initial_list_size: usize,
    /// Lower selectable bound.
    pub min_date: Option<String>,
    /// Upper selectable bound.
    pub max_date: Option<String>,
    /// Initially selected range start.
    pub start_date: Option<String>,
    /// Initially selected range end.
    pub end_date: Option<String>,
    /// Collapse every press to a single-day selection.
    pub disable_range: bool,
    /// Week alignment shared by the day grids and the header labels.
    pub week_start: WeekStart,
    /// Month name lookup used to build month titles.
    pub month_names: MonthNames,
    /// Fixed per-month height reported through item layouts.
    pub month_height: u32,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            starting_month: None,
            number_of_months: NUMBER_OF_MONTHS,
            initial_list_size: INITIAL_LIST_SIZE,
            min_date: None,
            max_date: None,
            start_date: None,
            end_date: None,
            disable_range: false,
            week_start: WeekStart::default(),
            month_names: MonthNames::default(),
            month_height: MONTH_HEIGHT,
        }
    }
}

impl CalendarOptions {
    /// Anchor the month list at a given `YYYY-MM-DD` date.
    pub fn with_starting_month(self, starting_month: impl Into<String>) -> Self {
        Self { starting_month: Some(starting_month.into()), ..self }
    }

    /// Set how many months to generate past the first one.
    pub fn with_number_of_months(self, number_of_months: usize) -> Self {
        Self { number_of_months, ..self }
    }

    /// Set how many months are rendered before the first viewport event.
    pub fn with_initial_list_size(self, initial_list_size: usize) -> Self {
        Self { initial_list_size, ..self }
    }

    /// Restrict day presses to the inclusive `[min, max]` interval.
    pub fn with_bounds(self, min_date: Option<&str>, max_date: Option<&str>) -> Self {
        Self {
            min_date: min_date.map(String::from),
            max_date: max_date.map(String::from),
            ..self
        }
    }

    /// Set the initially selected range.
    pub fn with_selection(self, start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start_date: start_date.map(String::from),
            end_date: end_date.map(String::from),
            ..self
        }
    }

    /// Collapse every press to a single-day selection.
    pub fn with_disable_range(self, disable_range: bool) -> Self {
        Self { disable_range, ..self }
    }

    /// Align week rows and header labels on a given weekday.
    pub fn with_week_start(self, week_start: WeekStart) -> Self {
        Self { week_start, ..self }
    }

    /// Attach a custom month name lookup.
    pub fn with_month_names(self, month_names: MonthNames) -> Self {
        Self { month_names, ..self }
    }

    /// Set the fixed per-month height reported through item layouts.
    pub fn with_month_height(self, month_height: u32) -> Self {
        Self { month_height, ..self }
    }
}

/// Options after lenient date resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) first_month: NaiveDate,
    pub(crate) number_of_months: usize,
    pub(crate) initial_list_size: usize,
    pub(crate) min_date: Option<NaiveDate>,
    pub(crate) max_date: Option<NaiveDate>,
    pub(crate) start_date: Option<NaiveDate>,
    pub(crate) end_date: Option<NaiveDate>,
    pub(crate) disable_range: bool,
    pub(crate) week_start: WeekStart,
    pub(crate) month_names: MonthNames,
    pub(crate) month_height: u32,
}

impl Config {
    pub(crate) fn resolve(options: &CalendarOptions) -> Self {
        let parse_opt = |raw: &Option<String>| raw.as_deref().and_then(parse_date);

        Self {
            first_month: parse_opt(&options.starting_month)
                .unwrap_or_else(|| Local::now().date_naive()),
            number_of_months: options.number_of_months,
            initial_list_size: options.initial_list_size,
            min_date: parse_opt(&options.min_date),
            max_date: parse_opt(&options.max_date),
            start_date: parse_opt(&options.start_date),
            end_date: parse_opt(&options.end_date),
            disable_range: options.disable_range,
            week_start: options.week_start,
            month_names: options.month_names.clone(),
            month_height: options.month_height,
        }
    }
}
