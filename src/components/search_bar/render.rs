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

//! Render the search bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

const PLACEHOLDER: &str = "Search movies...";

impl SearchBar {
    /// Renders the query input, placing the terminal cursor at the edit
    /// position while the bar has focus.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1))
            .title(" Search ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.input.value().is_empty() {
            f.render_widget(
                Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.border_colour)),
                inner,
            );
        } else {
            f.render_widget(Paragraph::new(self.input.value()), inner);
        }

        if focused {
            let cursor_x = inner.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}
