//! Selection state for list-based Views
//!
//! Tracks the selected row and the first visible row of a scrolling list.
//! All moves clamp to the list length; the scroll offset always keeps the
//! selected row inside the viewport.

/// Cursor and scroll offset of a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: usize,
    offset: usize,
}

impl Selection {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.scroll_into_view(visible);
    }

    pub fn prev(&mut self, visible: usize) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_into_view(visible);
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self, len: usize, visible: usize) {
        self.selected = len.saturating_sub(1);
        self.scroll_into_view(visible);
    }

    /// Pull the cursor back inside a list that shrank
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.offset > self.selected {
            self.offset = self.selected;
        }
    }

    /// Adjust the offset so the selected row is one of `visible` rows.
    ///
    /// `visible == 0` leaves the offset alone (layout not known yet).
    pub fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_to_last_row() {
        let mut s = Selection::default();
        s.next(2, 10);
        s.next(2, 10);
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn test_next_on_empty_list_is_noop() {
        let mut s = Selection::default();
        s.next(0, 10);
        assert_eq!(s, Selection::default());
    }

    #[test]
    fn test_prev_at_top() {
        let mut s = Selection::default();
        s.prev(10);
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn test_scrolls_down_past_viewport() {
        let mut s = Selection::default();
        for _ in 0..5 {
            s.next(20, 3);
        }
        assert_eq!(s.selected(), 5);
        assert_eq!(s.offset(), 3);
    }

    #[test]
    fn test_scrolls_up_into_view() {
        let mut s = Selection::default();
        s.last(20, 5);
        assert_eq!(s.offset(), 15);
        for _ in 0..6 {
            s.prev(5);
        }
        assert_eq!(s.selected(), 13);
        assert_eq!(s.offset(), 13);
    }

    #[test]
    fn test_zero_visible_keeps_offset() {
        let mut s = Selection::default();
        s.last(20, 0);
        assert_eq!(s.selected(), 19);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut s = Selection::default();
        s.last(20, 5);
        s.clamp(3);
        assert_eq!(s.selected(), 2);
        assert_eq!(s.offset(), 2);
    }
}
