use std::mem::take;

use chrono::NaiveDate;

use month_grid::{build_months, Month};

use crate::config::{CalendarOptions, Config};
use crate::selection::{mark_days, SelectedRange};
use crate::surface::{ItemLayout, MonthListModel, ViewableItems};
use crate::viewport::Viewport;

/// Months exposed through [`CalendarState::visible_months`] before the
/// first viewport event, when no initial selection forces a scroll target.
const LAST_RENDERED: usize = 6;

/// An event fed into the state machine by the host.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Event {
    /// The host replaced the externally-controlled selection, as opposed to
    /// the user tapping days.
    SetRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    /// The user pressed a day cell.
    DayPressed(NaiveDate),
    /// The surface reported a viewability change.
    ViewportChanged(ViewableItems),
}

/// A notification emitted towards the host by a transition.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Signal {
    /// The selection changed following a day press.
    RangeChanged(SelectedRange),
    /// The viewport genuinely moved; forwards the raw surface event.
    ViewportChanged(ViewableItems),
}

/// Result of applying one event: the next state plus an optional signal.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: CalendarState,
    pub signal: Option<Signal>,
}

impl Transition {
    fn quiet(state: CalendarState) -> Self {
        Self { state, signal: None }
    }
}

/// State of a scrollable multi-month calendar with range selection.
///
/// The whole machine is reactive and synchronous: every [`Event`] maps to a
/// total replacement of the affected state through [`apply`](Self::apply),
/// so consumers can treat each transition's month list as a fresh snapshot.
///
/// ```
/// use chrono::NaiveDate;
/// use range_calendar::{CalendarOptions, CalendarState, Event, SelectedRange, Signal};
///
/// let options = CalendarOptions::default().with_starting_month("2024-01-01");
/// let state = CalendarState::new(&options);
///
/// let pressed = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let transition = state.apply(Event::DayPressed(pressed));
///
/// assert_eq!(
///     transition.signal,
///     Some(Signal::RangeChanged(SelectedRange {
///         start: Some(pressed),
///         end: None,
///     })),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    config: Config,
    months: Vec<Month>,
    range: SelectedRange,
    viewport: Viewport,
    initial_scroll_index: usize,
    /// Upper bound of the pre-render window; `None` once a genuine event
    /// handed control of visibility over to the surface.
    prerender: Option<usize>,
}

impl CalendarState {
    /// Initialize the calendar from host configuration.
    ///
    /// Builds `number_of_months + 1` months anchored at the resolved
    /// starting month, flags the first `initial_list_size + 1` of them as
    /// visible, and applies the initial selection when one resolves.
    pub fn new(options: &CalendarOptions) -> Self {
        let config = Config::resolve(options);
        let range = SelectedRange { start: config.start_date, end: config.end_date };

        let mut months = build_months(
            config.first_month,
            config.number_of_months,
            &config.month_names,
            config.week_start,
        );

        for month in months.iter_mut().take(config.initial_list_size + 1) {
            month.is_visible = true;
        }

        let (initial_scroll_index, prerender) = match range.start {
            Some(start) => {
                let index = months.iter().position(|month| month.contains(start));
                (index.unwrap_or(0), None)
            }
            None => (0, Some(LAST_RENDERED)),
        };

        let months = if range.is_empty() {
            months
        } else {
            days_changed(months, range)
        };

        Self {
            config,
            months,
            range,
            viewport: Viewport::default(),
            initial_scroll_index,
            prerender,
        }
    }

    /// Advance the state machine by one event.
    pub fn apply(self, event: Event) -> Transition {
        match event {
            Event::SetRange { start, end } => self.set_range(start, end),
            Event::DayPressed(date) => self.press_day(date),
            Event::ViewportChanged(info) => self.viewport_changed(info),
        }
    }

    fn set_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Transition {
        let next = SelectedRange { start, end };

        if next == self.range {
            return Transition::quiet(self);
        }

        self.months = days_changed(take(&mut self.months), next);
        self.range = next;
        self.prerender = None;
        Transition::quiet(self)
    }

    fn press_day(mut self, date: NaiveDate) -> Transition {
        if !self.in_bounds(date) {
            return Transition::quiet(self);
        }

        let next = self.range.press(date, self.config.disable_range);
        self.months = days_changed(take(&mut self.months), next);
        self.range = next;
        self.prerender = None;

        Transition {
            state: self,
            signal: Some(Signal::RangeChanged(next)),
        }
    }

    fn viewport_changed(mut self, info: ViewableItems) -> Transition {
        let Some(viewport) = Viewport::from_viewable_items(&info, self.viewport.last) else {
            return Transition::quiet(self);
        };

        if viewport == self.viewport {
            return Transition::quiet(self);
        }

        for (index, month) in self.months.iter_mut().enumerate() {
            month.is_visible = viewport.renders(index);
        }

        self.viewport = viewport;
        self.prerender = None;

        Transition {
            state: self,
            signal: Some(Signal::ViewportChanged(info)),
        }
    }

    /// All generated months, selection and visibility flags applied.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// The list the rendering surface consumes: the first 6 months until a
    /// viewport or selection event arrives, the full list afterwards.
    ///
    /// The initial window avoids blank frames before the surface reports
    /// its first viewability change; past that point visibility is a
    /// per-month flag, not a filtered list.
    pub fn visible_months(&self) -> &[Month] {
        match self.prerender {
            Some(upto) => &self.months[..upto.min(self.months.len())],
            None => &self.months,
        }
    }

    /// The currently selected range.
    pub fn range(&self) -> SelectedRange {
        self.range
    }

    /// Viewport bounds last reported by the surface.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Index of the month the surface should scroll to on first mount: the
    /// month containing the initial start date, falling back to the head of
    /// the list.
    pub fn initial_scroll_index(&self) -> usize {
        self.initial_scroll_index
    }

    /// Fixed layout of the month at `index`, derived from the configured
    /// month height.
    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            length: self.config.month_height,
            offset: self.config.month_height * index as u32,
            index,
        }
    }

    /// Whether `date` can be selected under the configured min/max bounds.
    pub fn in_bounds(&self, date: NaiveDate) -> bool {
        self.config.min_date.map(|min| date >= min).unwrap_or(true)
            && self.config.max_date.map(|max| date <= max).unwrap_or(true)
    }

    /// Whether the host needs to re-render when moving from `prev` to this
    /// state: a structural check over the visible-month count, per-month
    /// visibility flags and the selection dates.
    ///
    /// ```
    /// use range_calendar::{CalendarOptions, CalendarState, Event, ViewableItems};
    ///
    /// let state = CalendarState::new(&CalendarOptions::default());
    /// let moved = state.clone().apply(Event::ViewportChanged(ViewableItems::window(4, 6)));
    ///
    /// assert!(moved.state.needs_render(&state));
    /// assert!(!state.needs_render(&state));
    /// ```
    pub fn needs_render(&self, prev: &CalendarState) -> bool {
        self.visible_months().len() != prev.visible_months().len()
            || self.range != prev.range
            || self
                .months
                .iter()
                .zip(&prev.months)
                .any(|(month, prev_month)| month.is_visible != prev_month.is_visible)
    }
}

impl MonthListModel for CalendarState {
    fn data(&self) -> &[Month] {
        self.visible_months()
    }

    fn item_layout(&self, index: usize) -> ItemLayout {
        self.item_layout(index)
    }

    fn initial_scroll_index(&self) -> usize {
        self.initial_scroll_index()
    }
}

/// Recompute selection flags and the range echo across every month.
///
/// Always rebuilding every month keeps the flags a pure function of the new
/// range; months whose flags did not change compare structurally equal to
/// their previous generation.
fn days_changed(months: Vec<Month>, range: SelectedRange) -> Vec<Month> {
    months
        .into_iter()
        .map(|month| Month {
            days: mark_days(&month.days, range),
            start_date: range.start,
            end_date: range.end,
            ..month
        })
        .collect()
}
