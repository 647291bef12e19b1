// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Result grid component.
//!
//! Displays the current result sequence one movie per row and tracks the
//! highlighted row. The grid holds no movie data of its own; the result
//! sequence is passed in from the search state on every interaction, and the
//! row count is the only thing navigation needs.
//!
//! The most recently rendered row region is remembered so that mouse clicks
//! can be mapped back to the movie they landed on.

mod event;
mod render;

pub(crate) use event::MovieGridAction;

use ratatui::layout::{Position, Rect};
use ratatui::widgets::TableState;

pub(crate) struct MovieGrid {
    pub(crate) table_state: TableState,
    rows_area: Option<Rect>,
}

impl MovieGrid {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            rows_area: None,
        }
    }

    /// Clears the highlight and scroll position, used when a new search
    /// replaces the result sequence.
    pub(crate) fn reset(&mut self) {
        self.table_state = TableState::new();
        self.rows_area = None;
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    pub(crate) fn goto_last(&mut self) {
        self.table_state.select_last();
    }

    /// Maps a terminal position to a result row index.
    ///
    /// Accounts for the current scroll offset; returns `None` when the click
    /// falls outside the rendered rows or past the end of the results.
    pub(crate) fn row_at(&self, position: Position, len: usize) -> Option<usize> {
        let area = self.rows_area?;
        if !area.contains(position) {
            return None;
        }
        let index = self.table_state.offset() + (position.y - area.y) as usize;
        (index < len).then_some(index)
    }

    fn set_rows_area(&mut self, area: Rect) {
        self.rows_area = Some(area);
    }

    #[cfg(test)]
    pub(crate) fn set_rows_area_for_test(&mut self, area: Rect) {
        self.set_rows_area(area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::{Position, Rect};

    use super::MovieGrid;

    #[test]
    fn navigation_wraps_around() {
        let mut grid = MovieGrid::new();
        grid.goto_next(3);
        assert_eq!(grid.selected_index(), Some(0));
        grid.goto_next(3);
        grid.goto_next(3);
        assert_eq!(grid.selected_index(), Some(2));
        grid.goto_next(3);
        assert_eq!(grid.selected_index(), Some(0));
        grid.goto_previous(3);
        assert_eq!(grid.selected_index(), Some(2));
    }

    #[test]
    fn navigation_on_empty_grid_is_a_no_op() {
        let mut grid = MovieGrid::new();
        grid.goto_next(0);
        grid.goto_previous(0);
        assert_eq!(grid.selected_index(), None);
    }

    #[test]
    fn row_at_maps_clicks_through_the_scroll_offset() {
        let mut grid = MovieGrid::new();
        grid.set_rows_area_for_test(Rect::new(2, 5, 40, 10));

        assert_eq!(grid.row_at(Position::new(10, 5), 20), Some(0));
        assert_eq!(grid.row_at(Position::new(10, 9), 20), Some(4));

        // Outside the row region entirely.
        assert_eq!(grid.row_at(Position::new(10, 4), 20), None);
        assert_eq!(grid.row_at(Position::new(1, 6), 20), None);

        // Within the region but past the last result.
        assert_eq!(grid.row_at(Position::new(10, 9), 3), None);
    }

    #[test]
    fn row_at_without_a_rendered_area_is_none() {
        let grid = MovieGrid::new();
        assert_eq!(grid.row_at(Position::new(0, 0), 5), None);
    }
}
