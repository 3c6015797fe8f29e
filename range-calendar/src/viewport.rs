use crate::surface::ViewableItems;

/// Number of extra months kept renderable before the viewport window.
const VISIBLE_BUFFER: usize = 1;

/// The contiguous range of month-list indices currently reported visible by
/// the rendering surface. Reset wholesale on every viewport event.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Viewport {
    pub first: usize,
    pub last: usize,
}

impl Viewport {
    /// Whether the month at `index` should be materialized by the surface:
    /// the viewport window plus one month before it and two past its end.
    ///
    /// ```
    /// use range_calendar::Viewport;
    ///
    /// let viewport = Viewport { first: 10, last: 12 };
    ///
    /// assert!(!viewport.renders(8));
    /// assert!(viewport.renders(9));
    /// assert!(viewport.renders(14));
    /// assert!(!viewport.renders(15));
    /// ```
    pub fn renders(&self, index: usize) -> bool {
        index + VISIBLE_BUFFER >= self.first && index <= self.last + VISIBLE_BUFFER + 1
    }

    /// Extract viewport bounds from a raw viewability event.
    ///
    /// A first token with no index falls back to the start of the list, a
    /// last token with no index falls back to `fallback_last`. An event with
    /// no viewable items yields `None`.
    pub(crate) fn from_viewable_items(info: &ViewableItems, fallback_last: usize) -> Option<Self> {
        let first = info.viewable.first()?;
        let last = info.viewable.last()?;

        Some(Self {
            first: first.index.unwrap_or(0),
            last: last.index.unwrap_or(fallback_last),
        })
    }
}
