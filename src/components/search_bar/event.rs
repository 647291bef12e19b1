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

//! Input handling for the search bar.
//!
//! Enter submits the current buffer; every other key event is delegated to
//! the managed input component for editing.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::SearchBar;

impl SearchBar {
    /// Processes a terminal event while the bar is focused.
    ///
    /// Returns the raw, untrimmed buffer on submission; the buffer is cleared
    /// afterwards regardless of whether the controller accepts the query.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<String> {
        match event {
            Event::Key(key_event) if key_event.code == KeyCode::Enter => {
                let query = self.input.value().to_string();
                self.input.reset();
                Some(query)
            }

            Event::Key(_) => {
                self.input.handle_event(event);
                None
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent};

    use crate::components::SearchBar;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn typing_builds_the_buffer() {
        let mut bar = SearchBar::new();
        for c in "dune ".chars() {
            assert!(bar.process_event(&key(KeyCode::Char(c))).is_none());
        }
        assert_eq!(bar.input.value(), "dune ");
    }

    #[test]
    fn enter_submits_the_raw_buffer_and_clears_it() {
        let mut bar = SearchBar::new();
        for c in "  dune  ".chars() {
            bar.process_event(&key(KeyCode::Char(c)));
        }

        let submitted = bar.process_event(&key(KeyCode::Enter));
        assert_eq!(submitted.as_deref(), Some("  dune  "));
        assert_eq!(bar.input.value(), "");
    }

    #[test]
    fn enter_on_empty_buffer_still_submits() {
        let mut bar = SearchBar::new();
        let submitted = bar.process_event(&key(KeyCode::Enter));
        assert_eq!(submitted.as_deref(), Some(""));
    }
}
