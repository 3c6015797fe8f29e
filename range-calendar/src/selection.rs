use chrono::NaiveDate;

use month_grid::Day;

/// The currently applied selection.
///
/// An absent `end` means a single anchor date is selected and no range
/// exists yet. When both dates are present, `start <= end` holds by
/// construction of [`press`](Self::press); the order of presses decides
/// which date becomes which, no sorting happens after the fact.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SelectedRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SelectedRange {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no date is selected yet.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Whether both ends of the range are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Apply a day press to the selection.
    ///
    /// With `disable_range` every press collapses to a single-day range.
    /// Otherwise the first press sets the anchor, a press before the anchor
    /// moves it, a press at or after the anchor completes the range, and a
    /// press on a completed range starts over with a new anchor.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use range_calendar::SelectedRange;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d);
    ///
    /// let range = SelectedRange::new().press(day(10).unwrap(), false);
    /// assert_eq!((range.start, range.end), (day(10), None));
    ///
    /// let range = range.press(day(5).unwrap(), false);
    /// assert_eq!((range.start, range.end), (day(5), None));
    ///
    /// let range = range.press(day(20).unwrap(), false);
    /// assert_eq!((range.start, range.end), (day(5), day(20)));
    ///
    /// let range = range.press(day(1).unwrap(), false);
    /// assert_eq!((range.start, range.end), (day(1), None));
    /// ```
    #[must_use]
    pub fn press(self, date: NaiveDate, disable_range: bool) -> Self {
        if disable_range {
            return Self { start: Some(date), end: Some(date) };
        }

        match (self.start, self.end) {
            (None, _) => Self { start: Some(date), end: None },
            (Some(_), Some(_)) => Self { start: Some(date), end: None },
            (Some(start), None) if date < start => Self { start: Some(date), end: None },
            (Some(start), None) => Self { start: Some(start), end: Some(date) },
        }
    }

    /// Whether `date` is highlighted by this selection: inside the inclusive
    /// range, or equal to a lone anchor.
    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => date == start,
            (None, _) => false,
        }
    }
}

/// Rebuild a month's day list with selection flags recomputed against
/// `range`. Padding cells always stay unselected.
pub(crate) fn mark_days(days: &[Day], range: SelectedRange) -> Vec<Day> {
    days.iter()
        .map(|day| Day {
            id: day.id.clone(),
            date: day.date,
            is_active: day.is_visible && range.contains(day.date),
            is_start_date: day.is_visible && range.start == Some(day.date),
            is_end_date: day.is_visible && range.end == Some(day.date),
            is_visible: day.is_visible,
        })
        .collect()
}
