//! Per-screen interaction state. These structs hold only cursor and scroll
//! positions; the songs themselves always live in the catalog so there is no
//! second copy of the data to keep in sync.

/// Cursor state for the main library list.
#[derive(Debug, Default, Clone)]
pub(crate) struct LibraryScreen {
    pub(crate) selected: usize,
}

impl LibraryScreen {
    /// Move the selection by `delta`, clamped to the list bounds.
    pub(crate) fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Re-validate the cursor after the list shrank underneath it.
    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Scroll state for the full-library print view.
#[derive(Debug, Default, Clone)]
pub(crate) struct PrintScreen {
    pub(crate) scroll: u16,
}

impl PrintScreen {
    pub(crate) fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32);
        self.scroll = next as u16;
    }

    pub(crate) fn reset(&mut self) {
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_to_bounds() {
        let mut screen = LibraryScreen::default();
        screen.move_selection(-3, 5);
        assert_eq!(screen.selected, 0);
        screen.move_selection(10, 5);
        assert_eq!(screen.selected, 4);
        screen.move_selection(1, 0);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut screen = LibraryScreen { selected: 4 };
        screen.clamp(3);
        assert_eq!(screen.selected, 2);
        screen.clamp(0);
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn test_scroll_never_goes_negative() {
        let mut screen = PrintScreen::default();
        screen.scroll_by(-5);
        assert_eq!(screen.scroll, 0);
        screen.scroll_by(7);
        assert_eq!(screen.scroll, 7);
        screen.reset();
        assert_eq!(screen.scroll, 0);
    }
}
