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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The body shows exactly one of: the loading
//! indicator, the error indicator, the result grid, or the idle hint. The
//! detail overlay and the notices are drawn last so they sit above
//! everything else.

mod notices;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, events::Focus, theme::Theme};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: search bar, body, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let overlay_open = app.search.selected().is_some();
    let input_focused = matches!(app.focus, Focus::SearchInput) && !overlay_open;

    app.search_bar.draw(f, outer[0], input_focused, &app.theme);

    if app.search.is_loading() {
        draw_loading(f, outer[1], &app.theme);
    } else if let Some(message) = app.search.error() {
        draw_error(f, outer[1], message, &app.theme);
    } else if !app.search.movies().is_empty() {
        app.grid_view
            .draw(f, outer[1], app.search.movies(), &app.theme);
    } else {
        draw_idle(f, outer[1], &app.theme);
    }

    draw_footer(f, outer[2], app);

    // The overlay and the notices are rendered outside the normal layout,
    // on top of whatever the body shows.
    if let Some(movie) = app.search.selected().cloned() {
        app.detail_view.draw(f, area, &movie, &app.theme);
    }

    notices::draw_notices(f, area, &app.notices, &app.theme);
}

fn draw_loading(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from("Loading movies...").style(Style::default().fg(theme.accent_colour).bold()),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_error(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(message.to_string()).style(Style::default().fg(theme.notice_error_fg).bold()),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_idle(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from("Type a movie title and press Enter.")
            .style(Style::default().fg(theme.border_colour)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.search.selected().is_some() {
        " Esc/q close · click outside to dismiss"
    } else if matches!(app.focus, Focus::SearchInput) {
        " Enter search · Tab results · Ctrl+C quit"
    } else {
        " j/k move · Enter details · / search · q quit"
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(app.theme.border_colour),
        ))),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Powered by TMDB ",
            Style::default().fg(app.theme.accent_colour),
        )))
        .alignment(Alignment::Right),
        chunks[1],
    );
}
