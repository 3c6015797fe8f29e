//! Data interfaces between the calendar core and the host's virtualized
//! list surface.
//!
//! The concrete virtualization widget is an injected capability: renderers
//! depend on [`MonthListModel`] and deliver scroll feedback as
//! [`ViewableItems`] events, never on a specific list implementation.

use month_grid::{Day, Month};

/// Fixed layout of one month row inside the virtualized list.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ItemLayout {
    /// Main-axis size of the item.
    pub length: u32,
    /// Main-axis offset of the item from the start of the list.
    pub offset: u32,
    pub index: usize,
}

/// One list entry as seen by the surface's viewability tracker.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct ViewToken {
    /// List index of the entry, when the surface knows it.
    pub index: Option<usize>,
    pub is_viewable: bool,
}

/// A raw viewability event: which entries changed and which are on screen.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct ViewableItems {
    pub changed: Vec<ViewToken>,
    pub viewable: Vec<ViewToken>,
}

impl ViewableItems {
    /// Event describing a fully known contiguous window `first..=last`.
    ///
    /// ```
    /// use range_calendar::ViewableItems;
    ///
    /// let info = ViewableItems::window(3, 5);
    /// assert_eq!(info.viewable.len(), 3);
    /// assert_eq!(info.viewable[0].index, Some(3));
    /// ```
    pub fn window(first: usize, last: usize) -> Self {
        Self {
            changed: Vec::new(),
            viewable: (first..=last)
                .map(|index| ViewToken { index: Some(index), is_viewable: true })
                .collect(),
        }
    }
}

/// What a virtualized month-list surface consumes from the calendar core.
///
/// Implemented by [`CalendarState`](crate::CalendarState); renderers should
/// depend on this trait so the core stays decoupled from any concrete list
/// widget.
pub trait MonthListModel {
    /// Month view-models in list order, ready to render.
    fn data(&self) -> &[Month];

    /// Fixed layout of the item at `index`.
    fn item_layout(&self, index: usize) -> ItemLayout;

    /// Index the surface should scroll to when first mounted.
    fn initial_scroll_index(&self) -> usize;
}

/// Pure per-day decoration hook: extra renderable content for a day cell,
/// or nothing.
pub trait DayContent {
    type Output;

    /// Content to attach to `day`, if any.
    fn day_content(&self, day: &Day) -> Option<Self::Output>;
}

/// Decoration that never produces content.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoContent;

impl DayContent for NoContent {
    type Output = std::convert::Infallible;

    fn day_content(&self, _day: &Day) -> Option<Self::Output> {
        None
    }
}
