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

//! Input handling for the result grid.
//!
//! Maps keyboard events to row navigation and activation. The grid does not
//! know about movies; it reports the activated row index and the caller
//! resolves it against the result sequence.

use crossterm::event::{Event, KeyCode};

use crate::components::MovieGrid;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MovieGridAction {
    ActivateRow(usize),
}

impl MovieGrid {
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<MovieGridAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(),

                KeyCode::Enter => {
                    return self.selected_index().map(MovieGridAction::ActivateRow);
                }

                _ => {}
            },

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent};

    use super::MovieGridAction;
    use crate::components::MovieGrid;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn enter_without_a_highlighted_row_does_nothing() {
        let mut grid = MovieGrid::new();
        assert_eq!(grid.process_event(&key(KeyCode::Enter), 5), None);
    }

    #[test]
    fn enter_activates_the_highlighted_row() {
        let mut grid = MovieGrid::new();
        grid.process_event(&key(KeyCode::Down), 5);
        grid.process_event(&key(KeyCode::Down), 5);

        let action = grid.process_event(&key(KeyCode::Enter), 5);
        assert_eq!(action, Some(MovieGridAction::ActivateRow(1)));
    }
}
