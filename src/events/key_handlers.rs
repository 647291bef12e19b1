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

//! Keyboard routing.
//!
//! Input goes to exactly one surface: the open detail overlay, the search
//! bar, or the result grid. While the overlay is open every key except its
//! dismissal bindings is swallowed, which is what suppresses grid scrolling
//! underneath it.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    components::MovieGridAction,
    events::{AppEvent, Focus},
};

/// Maps keyboard input to application events.
///
/// # Errors
///
/// Returns an error if an event fails to send on the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always exits, regardless of focus.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.search.selected().is_some() {
        return process_overlay_key_event(app, key);
    }

    match app.focus {
        Focus::SearchInput => process_search_bar_key_event(app, key),
        Focus::Grid => process_grid_key_event(app, key),
    }
}

fn process_overlay_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.event_tx.send(AppEvent::CloseDetail)?,
        _ => {}
    }

    Ok(())
}

fn process_search_bar_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Grid,

        _ => {
            let event = Event::Key(key);
            if let Some(query) = app.search_bar.process_event(&event) {
                app.event_tx.send(AppEvent::SubmitQuery(query))?;
            }
        }
    }

    Ok(())
}

fn process_grid_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => {
            app.focus = Focus::SearchInput;
        }

        _ => {
            let len = app.search.movies().len();
            let event = Event::Key(key);
            if let Some(MovieGridAction::ActivateRow(index)) =
                app.grid_view.process_event(&event, len)
            {
                if let Some(movie) = app.search.movies().get(index) {
                    app.event_tx.send(AppEvent::SelectMovie(movie.clone()))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent};

    use super::process_key_event;
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

    #[test]
    fn escape_closes_the_open_overlay() {
        let mut app = test_app();
        let seq = app.search.begin_search();
        app.search.complete_success(seq, vec![movie(1, "Dune")]);
        app.search.select(movie(1, "Dune"));

        process_key_event(&mut app, KeyEvent::from(KeyCode::Esc)).unwrap();

        assert!(matches!(
            app.event_rx.try_recv().unwrap(),
            AppEvent::CloseDetail
        ));
    }

    #[test]
    fn navigation_keys_are_swallowed_while_the_overlay_is_open() {
        let mut app = test_app();
        let seq = app.search.begin_search();
        app.search
            .complete_success(seq, vec![movie(1, "Dune"), movie(2, "Alien")]);
        app.search.select(movie(1, "Dune"));

        process_key_event(&mut app, KeyEvent::from(KeyCode::Down)).unwrap();

        assert_eq!(app.grid_view.selected_index(), None);
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn enter_in_the_search_bar_submits_the_query() {
        let mut app = test_app();
        for c in "dune".chars() {
            process_key_event(&mut app, KeyEvent::from(KeyCode::Char(c))).unwrap();
        }
        process_key_event(&mut app, KeyEvent::from(KeyCode::Enter)).unwrap();

        match app.event_rx.try_recv().unwrap() {
            AppEvent::SubmitQuery(text) => assert_eq!(text, "dune"),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(app.search_bar.input.value(), "");
    }

    #[test]
    fn enter_on_a_grid_row_selects_that_movie() {
        let mut app = test_app();
        app.focus = crate::events::Focus::Grid;
        let seq = app.search.begin_search();
        app.search
            .complete_success(seq, vec![movie(1, "Dune"), movie(2, "Alien")]);

        process_key_event(&mut app, KeyEvent::from(KeyCode::Down)).unwrap();
        process_key_event(&mut app, KeyEvent::from(KeyCode::Down)).unwrap();
        process_key_event(&mut app, KeyEvent::from(KeyCode::Enter)).unwrap();

        match app.event_rx.try_recv().unwrap() {
            AppEvent::SelectMovie(m) => assert_eq!(m.title, "Alien"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
