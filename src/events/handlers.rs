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

//! State transitions for application events.
//!
//! Each handler mutates the [`App`] state for exactly one event. Search
//! completions are gated by their sequence number: a completion for a
//! superseded request is logged and dropped, never applied.

use std::time::Instant;

use anyhow::Result;

use crate::{App, model::Movie, notices::NoticeLevel, tasks::AppTask};

pub(crate) const EMPTY_QUERY_NOTICE: &str = "Please enter your search query.";

pub(crate) const NO_RESULTS_NOTICE: &str = "No movies found for your request.";

pub(crate) const SEARCH_FAILED_NOTICE: &str = "There was an error, please try again...";

/// Static text for the error indicator; the underlying error detail is only
/// logged.
pub(crate) const SEARCH_FAILED_ERROR: &str = "There was an error fetching movies.";

/// Validates and dispatches a submitted query.
///
/// An all-whitespace query produces a validation notice and no state change;
/// anything else starts a new search cycle and hands the raw text to the
/// task worker.
pub(super) fn handle_submit_query(app: &mut App, text: String) -> Result<()> {
    if text.trim().is_empty() {
        app.notices.push(NoticeLevel::Warning, EMPTY_QUERY_NOTICE);
        return Ok(());
    }

    let seq = app.search.begin_search();
    app.grid_view.reset();

    tracing::info!(seq, query = %text, "search submitted");
    app.task_tx.send(AppTask::Search { seq, query: text })?;

    Ok(())
}

pub(super) fn handle_search_results_ready(app: &mut App, seq: u64, movies: Vec<Movie>) {
    let count = movies.len();

    if !app.search.complete_success(seq, movies) {
        tracing::debug!(seq, "discarding results of a superseded search");
        return;
    }

    tracing::info!(seq, count, "search completed");

    if count == 0 {
        app.notices.push(NoticeLevel::Info, NO_RESULTS_NOTICE);
    } else {
        app.grid_view.goto_first();
    }
}

pub(super) fn handle_search_failed(app: &mut App, seq: u64) {
    if !app.search.complete_failure(seq, SEARCH_FAILED_ERROR) {
        tracing::debug!(seq, "discarding failure of a superseded search");
        return;
    }

    app.notices.push(NoticeLevel::Error, SEARCH_FAILED_NOTICE);
}

pub(super) fn handle_select_movie(app: &mut App, movie: Movie) {
    app.search.select(movie);
}

pub(super) fn handle_close_detail(app: &mut App) {
    app.search.clear_selection();
    app.detail_view.reset();
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::error!(error = %message, "background task failed");
    app.notices.push(NoticeLevel::Error, SEARCH_FAILED_NOTICE);
}

pub(super) fn handle_tick(app: &mut App) {
    app.notices.prune(Instant::now());
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::config::AppConfig;

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
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

    fn notice_messages(app: &App) -> Vec<&str> {
        app.notices.iter().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn whitespace_query_changes_nothing_and_issues_no_task() {
        let (mut app, task_rx) = test_app();

        handle_submit_query(&mut app, "   ".to_string()).unwrap();

        assert!(!app.search.is_loading());
        assert!(task_rx.try_recv().is_err());
        assert_eq!(notice_messages(&app), [EMPTY_QUERY_NOTICE]);
    }

    #[test]
    fn query_is_forwarded_raw_with_a_sequence_number() {
        let (mut app, task_rx) = test_app();

        handle_submit_query(&mut app, "  dune  ".to_string()).unwrap();

        assert!(app.search.is_loading());
        let AppTask::Search { seq, query } = task_rx.try_recv().unwrap();
        assert_eq!(seq, 1);
        assert_eq!(query, "  dune  ");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn results_replace_the_sequence_without_a_notice() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "dune".to_string()).unwrap();

        let m1 = movie(1, "Dune");
        let m2 = movie(2, "Dune: Part Two");
        handle_search_results_ready(&mut app, 1, vec![m1.clone(), m2.clone()]);

        assert!(!app.search.is_loading());
        assert_eq!(app.search.movies(), &[m1, m2]);
        assert!(app.search.error().is_none());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn empty_results_emit_the_no_results_notice() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "zzzz".to_string()).unwrap();

        handle_search_results_ready(&mut app, 1, vec![]);

        assert!(!app.search.is_loading());
        assert!(app.search.movies().is_empty());
        assert!(app.search.error().is_none());
        assert_eq!(notice_messages(&app), [NO_RESULTS_NOTICE]);
    }

    #[test]
    fn failure_sets_the_generic_error_and_emits_a_notice() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "dune".to_string()).unwrap();

        handle_search_failed(&mut app, 1);

        assert!(!app.search.is_loading());
        assert_eq!(app.search.error(), Some(SEARCH_FAILED_ERROR));
        assert_eq!(notice_messages(&app), [SEARCH_FAILED_NOTICE]);
    }

    #[test]
    fn completions_of_superseded_searches_are_dropped() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "first".to_string()).unwrap();
        handle_submit_query(&mut app, "second".to_string()).unwrap();

        handle_search_results_ready(&mut app, 1, vec![movie(1, "Old")]);
        assert!(app.search.is_loading());
        assert!(app.search.movies().is_empty());

        handle_search_failed(&mut app, 1);
        assert!(app.search.is_loading());
        assert!(app.search.error().is_none());
        assert!(app.notices.is_empty());

        handle_search_results_ready(&mut app, 2, vec![movie(2, "New")]);
        assert!(!app.search.is_loading());
        assert_eq!(app.search.movies()[0].title, "New");
    }

    #[test]
    fn select_then_close_clears_the_selection() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "dune".to_string()).unwrap();
        let m = movie(1, "Dune");
        handle_search_results_ready(&mut app, 1, vec![m.clone()]);

        handle_select_movie(&mut app, m.clone());
        assert_eq!(app.search.selected(), Some(&m));

        handle_close_detail(&mut app);
        assert!(app.search.selected().is_none());
    }

    #[test]
    fn a_new_search_clears_the_selection() {
        let (mut app, _task_rx) = test_app();
        handle_submit_query(&mut app, "dune".to_string()).unwrap();
        let m = movie(1, "Dune");
        handle_search_results_ready(&mut app, 1, vec![m.clone()]);
        handle_select_movie(&mut app, m);

        handle_submit_query(&mut app, "alien".to_string()).unwrap();

        assert!(app.search.selected().is_none());
    }
}
