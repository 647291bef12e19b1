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

//! Detail overlay component.
//!
//! A modal surface drawn on top of the normal layout for the currently
//! selected movie. The overlay window's chrome (border and close control)
//! dismisses on click, as does any click on the dimmed area outside the
//! window; a click inside the content box does not. While the overlay is
//! open the grid underneath receives no scroll input.

mod render;

use ratatui::layout::{Position, Rect};

pub(crate) struct DetailView {
    content_area: Option<Rect>,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self { content_area: None }
    }

    /// True when the position falls inside the content box rendered by the
    /// last draw.
    pub(crate) fn hit_content(&self, position: Position) -> bool {
        self.content_area
            .is_some_and(|area| area.contains(position))
    }

    pub(crate) fn reset(&mut self) {
        self.content_area = None;
    }

    fn set_content_area(&mut self, area: Rect) {
        self.content_area = Some(area);
    }

    #[cfg(test)]
    pub(crate) fn set_content_area_for_test(&mut self, area: Rect) {
        self.set_content_area(area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::{Position, Rect};

    use super::DetailView;

    #[test]
    fn clicks_inside_the_content_box_hit() {
        let mut view = DetailView::new();
        view.set_content_area_for_test(Rect::new(10, 5, 40, 20));

        assert!(view.hit_content(Position::new(10, 5)));
        assert!(view.hit_content(Position::new(30, 15)));
    }

    #[test]
    fn clicks_outside_the_content_box_miss() {
        let mut view = DetailView::new();
        view.set_content_area_for_test(Rect::new(10, 5, 40, 20));

        // On the window chrome, one cell left of the content.
        assert!(!view.hit_content(Position::new(9, 5)));
        // Out on the backdrop.
        assert!(!view.hit_content(Position::new(0, 0)));
        assert!(!view.hit_content(Position::new(60, 30)));
    }

    #[test]
    fn nothing_hits_before_the_first_draw() {
        let view = DetailView::new();
        assert!(!view.hit_content(Position::new(0, 0)));
    }
}
