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

//! UI rendering logic for the result grid.
//!
//! One movie per row: title, release date, and rating. The row region inside
//! the surrounding block (below the column header) is recorded after every
//! draw so mouse clicks can be resolved to rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{components::MovieGrid, model::Movie, theme::Theme, util};

// Column header plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

impl MovieGrid {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, movies: &[Movie], theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(format!(" Results ({}) ", movies.len()));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = movies.iter().map(|movie| {
            let rating = util::format::format_rating(movie.vote_average);
            let date = util::format::format_release_date(&movie.release_date);

            Row::new(vec![
                Cell::from(
                    Line::from(movie.title.as_str())
                        .style(Style::default().fg(theme.grid_title_fg)),
                ),
                Cell::from(Line::from(date).style(Style::default().fg(theme.grid_date_fg))),
                Cell::from(
                    Line::from(rating)
                        .style(Style::default().fg(theme.grid_rating_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Released"),
                Cell::from(Line::from("Rating").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        f.render_stateful_widget(table, inner, &mut self.table_state);

        // Remember where the data rows landed for mouse hit testing.
        let rows_area = Rect::new(
            inner.x,
            inner.y.saturating_add(HEADER_HEIGHT),
            inner.width,
            inner.height.saturating_sub(HEADER_HEIGHT),
        );
        self.set_rows_area(rows_area);
    }
}
