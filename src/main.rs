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

//! # Movie Search TUI.
//!
//! A terminal front end for the TMDB movie catalog: type a query, browse the
//! matching titles in a result grid, and open a detail overlay for a single
//! movie.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, and
//!   all state mutation.
//! * A **Background Worker** executes catalog searches over HTTP via
//!   asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels. Every search is tagged with a sequence number so that a slow
//! response from a superseded search can never overwrite newer results.

mod catalog;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod notices;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{DetailView, MovieGrid, SearchBar},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::SearchState,
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) focus: Focus,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) search: SearchState,
    pub(crate) notices: notices::NoticeBoard,

    pub(crate) search_bar: SearchBar,
    pub(crate) grid_view: MovieGrid,
    pub(crate) detail_view: DetailView,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            task_tx,
            search: SearchState::new(),
            notices: notices::NoticeBoard::new(),
            search_bar: SearchBar::new(),
            grid_view: MovieGrid::new(),
            detail_view: DetailView::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = logging::init_logging();

    let config = config::load_config();

    let token = config::load_api_token();
    if token.is_none() {
        tracing::error!(
            "{} is not set; searches will fail until a TMDB API token is exported",
            config::TOKEN_ENV_VAR
        );
    }

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx, token);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so grid clicks and overlay dismissal work.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker that owns the catalog client and executes searches.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes and notice expiry.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
    token: Option<String>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    tasks::spawn_task_worker(&app.config, token, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Mouse(mouse)) => {
                    tx_input.send(AppEvent::Mouse(mouse)).ok();
                }
                _ => {}
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application
    // and the clock that expires notices.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
