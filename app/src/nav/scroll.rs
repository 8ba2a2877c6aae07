//! Header visibility as a function of the vertical scroll offset.

/// Below this offset the header is always shown.
pub const TOP_ZONE: f64 = 50.0;
/// Past this offset the header switches to its compact, opaque style.
pub const SCROLLED_THRESHOLD: f64 = 80.0;
/// Scrolling down only hides the header once past this offset.
pub const HIDE_THRESHOLD: f64 = 100.0;

/// Scroll-derived header flags, recomputed on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub last_scroll_y: f64,
    pub is_visible: bool,
    pub is_scrolled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            is_visible: true,
            is_scrolled: false,
        }
    }
}

impl ScrollState {
    /// Computes the state after the viewport moved to `current_offset`.
    ///
    /// The previous offset is `self.last_scroll_y`. The header hides only while
    /// moving down past [`HIDE_THRESHOLD`] and is forced visible inside
    /// [`TOP_ZONE`].
    #[must_use]
    pub fn on_scroll(&self, current_offset: f64) -> Self {
        let is_visible = if current_offset < TOP_ZONE {
            true
        } else {
            !(current_offset > self.last_scroll_y && current_offset > HIDE_THRESHOLD)
        };

        Self {
            last_scroll_y: current_offset,
            is_visible,
            is_scrolled: current_offset > SCROLLED_THRESHOLD,
        }
    }
}
