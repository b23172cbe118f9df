//! Internal view state for the autocomplete popup.

use std::ops::Range;

use crate::geometry::Rect;

/// Transient popup state, reset whenever the popup closes.
#[derive(Debug, Clone, Default)]
pub(crate) struct PopupState {
    /// Whether the popup is currently open.
    pub open: bool,
    /// Whether the candidate list must be rebuilt on the next render pass.
    pub reload_pending: bool,
    /// Index of the selected row in the filtered list.
    ///
    /// Invariant: `selection < filtered.len()` whenever the popup is open
    /// and the filtered list is non-empty. With an empty list the selection
    /// stays 0 and is unused.
    pub selection: usize,
    /// The base word the current filtered list was computed for.
    pub last_search_key: String,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// The popup rectangle laid out by the last render pass, in screen
    /// coordinates. Used for mouse hit testing.
    pub rect: Rect,
    /// Row index currently under the mouse, if any.
    pub hovered: Option<usize>,
}

impl PopupState {
    /// The window of rows currently shown.
    pub fn visible_range(&self, len: usize, max_rows: usize) -> Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (start + max_rows).min(len);
        start..end
    }

    /// Scroll so the selected row stays inside the visible window.
    ///
    /// Scrolls up when the selection is above the viewport top, down when it
    /// is at or past the last visible row.
    pub fn ensure_selection_visible(&mut self, len: usize, max_rows: usize) {
        if len == 0 {
            self.scroll_offset = 0;
            return;
        }
        if self.selection < self.scroll_offset {
            self.scroll_offset = self.selection;
        } else if self.selection >= self.scroll_offset + max_rows {
            self.scroll_offset = self.selection + 1 - max_rows;
        }
    }

    /// Reset selection, scroll, hover and search key to closed defaults.
    pub fn reset(&mut self) {
        self.selection = 0;
        self.scroll_offset = 0;
        self.hovered = None;
        self.last_search_key.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_window() {
        let mut state = PopupState::default();
        assert_eq!(state.visible_range(5, 3), 0..3);

        state.scroll_offset = 2;
        assert_eq!(state.visible_range(5, 3), 2..5);
    }

    #[test]
    fn test_visible_range_short_list() {
        let state = PopupState::default();
        assert_eq!(state.visible_range(2, 10), 0..2);
        assert_eq!(state.visible_range(0, 10), 0..0);
    }

    #[test]
    fn test_visible_range_offset_beyond_len() {
        let mut state = PopupState::default();
        state.scroll_offset = 9;
        assert_eq!(state.visible_range(4, 3), 4..4);
    }

    #[test]
    fn test_ensure_selection_visible_scrolls_down() {
        let mut state = PopupState::default();
        state.selection = 5;
        state.ensure_selection_visible(10, 3);
        assert_eq!(state.scroll_offset, 3); // 5 - 3 + 1 = 3
    }

    #[test]
    fn test_ensure_selection_visible_scrolls_up() {
        let mut state = PopupState::default();
        state.scroll_offset = 4;
        state.selection = 1;
        state.ensure_selection_visible(10, 3);
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_ensure_selection_visible_empty_list() {
        let mut state = PopupState::default();
        state.scroll_offset = 7;
        state.ensure_selection_visible(0, 3);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_reset_clears_transient_fields() {
        let mut state = PopupState {
            open: true,
            reload_pending: true,
            selection: 4,
            last_search_key: "wor".to_string(),
            scroll_offset: 2,
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            hovered: Some(1),
        };
        state.reset();
        assert_eq!(state.selection, 0);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.hovered, None);
        assert!(state.last_search_key.is_empty());
        // open/reload are owned by the controller's state machine
        assert!(state.open);
        assert!(state.reload_pending);
    }
}
