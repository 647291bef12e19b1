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

//! Render the detail overlay.
//!
//! The overlay is drawn last, over a cleared region, so it sits above every
//! other widget. The wide backdrop image is preferred over the poster when
//! both paths resolve to a URL; terminals render no bitmaps, so the chosen
//! URL is displayed as text.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    catalog::{self, BACKDROP_SIZE, POSTER_SIZE},
    components::DetailView,
    model::Movie,
    theme::Theme,
    util,
};

impl DetailView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, movie: &Movie, theme: &Theme) {
        let window = centered_rect(area, 70, 70);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1))
            .title(Line::from(format!(" {} ", movie.title)).style(Style::default().bold()))
            .title_top(Line::from(" ✕ close ").right_aligned())
            .title_bottom(Line::from(" Esc to close ").right_aligned());

        let content = block.inner(window);

        f.render_widget(Clear, window);
        f.render_widget(block, window);
        self.set_content_area(content);

        let image = image_line(movie);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content);

        let release = Line::from(vec![
            Span::styled("Release date: ", Style::default().fg(theme.overlay_dim_fg)),
            Span::styled(
                util::format::format_release_date(&movie.release_date),
                Style::default().fg(theme.overlay_text_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(release), chunks[0]);

        let rating = Line::from(vec![
            Span::styled("Rating: ", Style::default().fg(theme.overlay_dim_fg)),
            Span::styled(
                util::format::format_rating(movie.vote_average),
                Style::default().fg(theme.grid_rating_fg),
            ),
        ]);
        f.render_widget(Paragraph::new(rating), chunks[1]);

        if let Some(image) = image {
            let line = Line::from(vec![
                Span::styled("Image: ", Style::default().fg(theme.overlay_dim_fg)),
                Span::styled(image, Style::default().fg(theme.overlay_dim_fg).underlined()),
            ]);
            f.render_widget(Paragraph::new(line), chunks[2]);
        }

        let overview = if movie.overview.is_empty() {
            "No overview available."
        } else {
            movie.overview.as_str()
        };
        f.render_widget(
            Paragraph::new(overview)
                .style(Style::default().fg(theme.overlay_text_fg))
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }
}

/// Picks the display image URL: wide backdrop first, poster as fallback.
fn image_line(movie: &Movie) -> Option<String> {
    let backdrop = catalog::image_url(movie.backdrop_path.as_deref(), BACKDROP_SIZE);
    if !backdrop.is_empty() {
        return Some(backdrop);
    }
    let poster = catalog::image_url(movie.poster_path.as_deref(), POSTER_SIZE);
    if !poster.is_empty() {
        return Some(poster);
    }
    None
}

/// Centers a rectangle of the given percentage size within `area`.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::image_line;
    use crate::model::Movie;

    fn movie(poster: Option<&str>, backdrop: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Dune".to_string(),
            overview: String::new(),
            release_date: String::new(),
            poster_path: poster.map(str::to_string),
            backdrop_path: backdrop.map(str::to_string),
            vote_average: None,
        }
    }

    #[test]
    fn backdrop_is_preferred_over_poster() {
        let url = image_line(&movie(Some("/p.jpg"), Some("/b.jpg"))).unwrap();
        assert!(url.ends_with("/original/b.jpg"));
    }

    #[test]
    fn poster_is_the_fallback() {
        let url = image_line(&movie(Some("/p.jpg"), None)).unwrap();
        assert!(url.ends_with("/w500/p.jpg"));
    }

    #[test]
    fn no_image_when_both_paths_are_absent() {
        assert!(image_line(&movie(None, None)).is_none());
    }
}
