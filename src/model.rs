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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the [`Movie`]
//! records deserialized from the catalog API and the [`SearchState`] that
//! drives the entire UI.
//!
//! # Search lifecycle
//!
//! Every submitted search is assigned a monotonically increasing sequence
//! number by [`SearchState::begin_search`]. Completion events carry that
//! number back, and only a completion matching the latest issued sequence may
//! update state. A response from a superseded request is discarded on
//! arrival, so a slow earlier search can never overwrite the results of a
//! newer one.

use serde::Deserialize;

/// A single catalog entry as returned by the movie search endpoint.
///
/// Movies are immutable once deserialized; a new search replaces the whole
/// result sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Movie {
    pub(crate) id: i64,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) overview: String,
    #[serde(default)]
    pub(crate) release_date: String,
    #[serde(default)]
    pub(crate) poster_path: Option<String>,
    #[serde(default)]
    pub(crate) backdrop_path: Option<String>,
    #[serde(default)]
    pub(crate) vote_average: Option<f64>,
}

/// One page of search results from the catalog API.
///
/// Only `results` is consumed; the paging fields are carried along because
/// the endpoint always supplies them.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    #[serde(default)]
    pub(crate) page: u32,
    pub(crate) results: Vec<Movie>,
    #[serde(default)]
    pub(crate) total_pages: u32,
    #[serde(default)]
    pub(crate) total_results: u32,
}

/// Mutable state for the search view.
///
/// This is the single owner of the result sequence, the loading and error
/// flags, and the currently selected movie. It is only ever mutated from the
/// main thread's event handlers.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    movies: Vec<Movie>,
    loading: bool,
    error: Option<String>,
    selected: Option<Movie>,
    issued: u64,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    /// Starts a new search cycle and returns its sequence number.
    ///
    /// Prior results, the error flag, and the selection are cleared before
    /// the loading flag is raised, so the UI never shows stale results or a
    /// dangling selection alongside the loading indicator.
    pub(crate) fn begin_search(&mut self) -> u64 {
        self.movies.clear();
        self.error = None;
        self.selected = None;
        self.loading = true;
        self.issued += 1;
        self.issued
    }

    /// Applies a successful completion for the search tagged `seq`.
    ///
    /// Returns `false` without touching any state when `seq` is not the
    /// latest issued sequence number.
    pub(crate) fn complete_success(&mut self, seq: u64, movies: Vec<Movie>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.movies = movies;
        self.loading = false;
        true
    }

    /// Applies a failed completion for the search tagged `seq`.
    ///
    /// Returns `false` without touching any state when `seq` is stale.
    pub(crate) fn complete_failure(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    pub(crate) fn select(&mut self, movie: Movie) {
        self.selected = Some(movie);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }
}
