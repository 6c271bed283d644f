/// Selection/scroll state for a navigable item collection.
///
/// Encapsulates the common behavior of a selectable list or grid:
/// - Optional selection (`None` when the collection is empty)
/// - Wrap-around navigation in all four directions, parameterized by
///   `items_per_row` (1 for a vertical list, 2 for a two-column grid)
/// - Maintaining a scroll window (`scroll_top`) so the selected row stays
///   visible
///
/// All navigation is total: with at least one item the selected index stays
/// in `[0, len)`; with zero items every operation is a silent no-op.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SelectionState {
    pub selected_idx: Option<usize>,
    pub scroll_top: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_idx: None,
            scroll_top: 0,
        }
    }

    /// Reset for a freshly loaded collection of `len` items. Fully replaces
    /// any prior state: the first item is selected when one exists.
    pub fn load(&mut self, len: usize) {
        self.selected_idx = if len == 0 { None } else { Some(0) };
        self.scroll_top = 0;
    }

    /// Move selection one row up, wrapping to the last item when the step
    /// would go past the top.
    pub fn move_up_wrap(&mut self, len: usize, items_per_row: usize) {
        if len == 0 {
            self.selected_idx = None;
            self.scroll_top = 0;
            return;
        }
        let step = items_per_row.max(1);
        self.selected_idx = Some(match self.selected_idx {
            Some(idx) if idx >= step => idx - step,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Move selection one row down, wrapping to the first item when the step
    /// would go past the end.
    pub fn move_down_wrap(&mut self, len: usize, items_per_row: usize) {
        if len == 0 {
            self.selected_idx = None;
            self.scroll_top = 0;
            return;
        }
        let step = items_per_row.max(1);
        self.selected_idx = Some(match self.selected_idx {
            Some(idx) if idx + step < len => idx + step,
            _ => 0,
        });
    }

    /// Move selection one item back. In a single-column list this is the
    /// same gesture as [`Self::move_up_wrap`], so the two are equivalent
    /// there by definition.
    pub fn move_left_wrap(&mut self, len: usize, items_per_row: usize) {
        if items_per_row <= 1 {
            self.move_up_wrap(len, 1);
            return;
        }
        if len == 0 {
            self.selected_idx = None;
            self.scroll_top = 0;
            return;
        }
        self.selected_idx = Some(match self.selected_idx {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Move selection one item forward. Alias for [`Self::move_down_wrap`]
    /// in a single-column list.
    pub fn move_right_wrap(&mut self, len: usize, items_per_row: usize) {
        if items_per_row <= 1 {
            self.move_down_wrap(len, 1);
            return;
        }
        if len == 0 {
            self.selected_idx = None;
            self.scroll_top = 0;
            return;
        }
        self.selected_idx = Some(match self.selected_idx {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        });
    }

    /// Select `idx` directly (pointer activation). Returns `true` when the
    /// index refers to an item.
    pub fn select(&mut self, idx: usize, len: usize) -> bool {
        if idx >= len {
            return false;
        }
        self.selected_idx = Some(idx);
        true
    }

    /// Adjust `scroll_top` so that the current `selected_idx` is visible
    /// within the window of `visible_rows`.
    pub fn ensure_visible(&mut self, len: usize, visible_rows: usize) {
        if len == 0 || visible_rows == 0 {
            self.scroll_top = 0;
            return;
        }
        if let Some(sel) = self.selected_idx {
            if sel < self.scroll_top {
                self.scroll_top = sel;
            } else {
                let bottom = self.scroll_top + visible_rows - 1;
                if sel > bottom {
                    self.scroll_top = sel + 1 - visible_rows;
                }
            }
        } else {
            self.scroll_top = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    fn active(idx: usize) -> SelectionState {
        SelectionState {
            selected_idx: Some(idx),
            scroll_top: 0,
        }
    }

    #[test]
    fn load_selects_first_item_or_none() {
        let mut state = active(3);
        state.load(5);
        assert_eq!(state.selected_idx, Some(0));

        state.load(0);
        assert_eq!(state.selected_idx, None);

        // Re-entrant: a later load fully replaces prior state.
        state.load(2);
        assert_eq!(state.selected_idx, Some(0));
    }

    #[test]
    fn navigation_is_total_for_all_directions() {
        for len in 1..=6 {
            for start in 0..len {
                for items_per_row in [1usize, 2] {
                    let mut state = active(start);
                    state.move_up_wrap(len, items_per_row);
                    assert!(state.selected_idx.is_some_and(|idx| idx < len));

                    let mut state = active(start);
                    state.move_down_wrap(len, items_per_row);
                    assert!(state.selected_idx.is_some_and(|idx| idx < len));

                    let mut state = active(start);
                    state.move_left_wrap(len, items_per_row);
                    assert!(state.selected_idx.is_some_and(|idx| idx < len));

                    let mut state = active(start);
                    state.move_right_wrap(len, items_per_row);
                    assert!(state.selected_idx.is_some_and(|idx| idx < len));
                }
            }
        }
    }

    #[test]
    fn down_from_last_wraps_below_row_width() {
        for (len, items_per_row) in [(4usize, 2usize), (5, 2), (7, 1)] {
            let mut state = active(len - 1);
            state.move_down_wrap(len, items_per_row);
            assert!(state.selected_idx.is_some_and(|idx| idx < items_per_row));
        }
    }

    #[test]
    fn up_from_first_row_wraps_to_last() {
        for (len, items_per_row, start) in [(4usize, 2usize, 0usize), (4, 2, 1), (7, 1, 0)] {
            let mut state = active(start);
            state.move_up_wrap(len, items_per_row);
            assert_eq!(state.selected_idx, Some(len - 1));
        }
    }

    #[test]
    fn grid_walk_matches_expected_sequence() {
        // Four items in a two-column grid, starting at the top-left corner.
        let mut state = SelectionState::new();
        state.load(4);

        state.move_down_wrap(4, 2);
        assert_eq!(state.selected_idx, Some(2));
        state.move_right_wrap(4, 2);
        assert_eq!(state.selected_idx, Some(3));
        state.move_left_wrap(4, 2);
        assert_eq!(state.selected_idx, Some(2));
        state.move_up_wrap(4, 2);
        assert_eq!(state.selected_idx, Some(0));
    }

    #[test]
    fn list_left_right_alias_up_down() {
        let mut left = active(0);
        let mut up = active(0);
        left.move_left_wrap(5, 1);
        up.move_up_wrap(5, 1);
        assert_eq!(left.selected_idx, up.selected_idx);

        let mut right = active(4);
        let mut down = active(4);
        right.move_right_wrap(5, 1);
        down.move_down_wrap(5, 1);
        assert_eq!(right.selected_idx, down.selected_idx);
    }

    #[test]
    fn empty_collection_stays_inert() {
        let mut state = SelectionState::new();
        state.load(0);
        state.move_up_wrap(0, 1);
        state.move_down_wrap(0, 2);
        state.move_left_wrap(0, 2);
        state.move_right_wrap(0, 1);
        assert_eq!(state.selected_idx, None);
        assert_eq!(state.scroll_top, 0);
        assert!(!state.select(0, 0));
    }

    #[test]
    fn select_clamps_to_item_count() {
        let mut state = SelectionState::new();
        state.load(3);
        assert!(state.select(2, 3));
        assert_eq!(state.selected_idx, Some(2));
        assert!(!state.select(3, 3));
        assert_eq!(state.selected_idx, Some(2));
    }

    #[test]
    fn ensure_visible_tracks_selection_window() {
        let mut state = SelectionState::new();
        state.load(10);
        state.select(7, 10);
        state.ensure_visible(10, 3);
        assert_eq!(state.scroll_top, 5);

        state.select(1, 10);
        state.ensure_visible(10, 3);
        assert_eq!(state.scroll_top, 1);
    }
}
