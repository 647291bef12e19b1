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

//! Application logic, event handling, and task dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`handlers`]: State transitions for each application event.
//! * [`key_handlers`]: Keyboard routing between the search bar, the result
//!   grid, and the detail overlay.
//! * [`mouse_handlers`]: Mouse routing for grid clicks and overlay dismissal.
//!
//! The system follows a reactive event-loop pattern: events are received via
//! a channel, [`process_events`] updates the [`App`] state and issues tasks
//! to the background worker, and the UI is re-drawn after every processed
//! event.

mod handlers;
mod key_handlers;
mod mouse_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Movie, render::draw};
use handlers::*;
use key_handlers::process_key_event;
use mouse_handlers::process_mouse_event;

/// Which surface currently receives keyboard input.
#[derive(Debug, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    Grid,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    SubmitQuery(String),
    SearchResultsReady { seq: u64, movies: Vec<Movie> },
    SearchFailed { seq: u64 },

    SelectMovie(Movie),
    CloseDetail,

    Tick,

    Error(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
            AppEvent::SubmitQuery(text) => handle_submit_query(app, text)?,
            AppEvent::SearchResultsReady { seq, movies } => {
                handle_search_results_ready(app, seq, movies);
            }
            AppEvent::SearchFailed { seq } => handle_search_failed(app, seq),
            AppEvent::SelectMovie(movie) => handle_select_movie(app, movie),
            AppEvent::CloseDetail => handle_close_detail(app),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
