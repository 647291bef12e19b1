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

//! Mouse routing.
//!
//! A click on a grid row selects that movie. While the detail overlay is
//! open, a click anywhere outside its content box (the dimmed backdrop or the
//! window chrome with the close control) dismisses it, a click inside does
//! nothing, and scroll wheel input is suppressed.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    App,
    events::{AppEvent, Focus},
};

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let position = Position::new(mouse.column, mouse.row);

    if app.search.selected().is_some() {
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && !app.detail_view.hit_content(position)
        {
            app.event_tx.send(AppEvent::CloseDetail)?;
        }
        return Ok(());
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let len = app.search.movies().len();
            if let Some(index) = app.grid_view.row_at(position, len) {
                app.focus = Focus::Grid;
                app.grid_view.table_state.select(Some(index));
                if let Some(movie) = app.search.movies().get(index) {
                    app.event_tx.send(AppEvent::SelectMovie(movie.clone()))?;
                }
            }
        }

        MouseEventKind::ScrollDown => app.grid_view.goto_next(app.search.movies().len()),
        MouseEventKind::ScrollUp => app.grid_view.goto_previous(app.search.movies().len()),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use super::process_mouse_event;
    use crate::{App, config::AppConfig, events::AppEvent, model::Movie};

    fn test_app() -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        App::new(AppConfig::default(), task_tx)
    }

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            release_date: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn overlay_app() -> App {
        let mut app = test_app();
        let seq = app.search.begin_search();
        app.search.complete_success(seq, vec![movie(1, "Dune")]);
        app.search.select(movie(1, "Dune"));
        app.detail_view
            .set_content_area_for_test(Rect::new(10, 5, 40, 20));
        app
    }

    #[test]
    fn click_outside_the_content_box_closes_the_overlay() {
        let mut app = overlay_app();

        process_mouse_event(&mut app, click(0, 0)).unwrap();

        assert!(matches!(
            app.event_rx.try_recv().unwrap(),
            AppEvent::CloseDetail
        ));
    }

    #[test]
    fn click_inside_the_content_box_keeps_the_overlay_open() {
        let mut app = overlay_app();

        process_mouse_event(&mut app, click(20, 10)).unwrap();

        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn scrolling_is_suppressed_while_the_overlay_is_open() {
        let mut app = overlay_app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        process_mouse_event(&mut app, scroll).unwrap();

        assert_eq!(app.grid_view.selected_index(), None);
    }

    #[test]
    fn click_on_a_grid_row_selects_the_movie() {
        let mut app = test_app();
        let seq = app.search.begin_search();
        app.search
            .complete_success(seq, vec![movie(1, "Dune"), movie(2, "Alien")]);
        app.grid_view
            .set_rows_area_for_test(Rect::new(1, 4, 60, 10));

        process_mouse_event(&mut app, click(10, 5)).unwrap();

        match app.event_rx.try_recv().unwrap() {
            AppEvent::SelectMovie(m) => assert_eq!(m.title, "Alien"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(app.grid_view.selected_index(), Some(1));
    }
}
