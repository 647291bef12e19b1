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

//! Remote movie catalog access.
//!
//! This module provides the client for the TMDB search endpoint and the URL
//! derivation for the image host. The client is owned by the background task
//! worker; nothing here touches application state.
//!
//! # Failure modes
//!
//! A search fails eagerly with [`CatalogError::MissingToken`] when no API
//! token was configured, before any network I/O is attempted. Transport
//! failures and non-success HTTP statuses propagate as
//! [`CatalogError::Transport`] and [`CatalogError::Status`]. Nothing is
//! retried and no timeout is applied beyond the transport defaults.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::model::{Movie, SearchPage};

const API_BASE_URL: &str = "https://api.themoviedb.org/3";

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Image size token for grid poster URLs.
pub(crate) const POSTER_SIZE: &str = "w500";

/// Image size token for the wide backdrop shown in the detail overlay.
pub(crate) const BACKDROP_SIZE: &str = "original";

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog API token is not configured")]
    MissingToken,

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog responded with status {0}")]
    Status(StatusCode),
}

/// Builds a fully-qualified image URL for a catalog image path.
///
/// Returns the empty string when `path` is absent. Pure string construction;
/// no request is made.
pub(crate) fn image_url(path: Option<&str>, size: &str) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{IMAGE_BASE_URL}/{size}{path}"),
        _ => String::new(),
    }
}

/// Client for the remote movie catalog.
pub(crate) struct CatalogClient {
    http: Client,
    api_base: String,
    language: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Creates a catalog client with the given bearer token and result
    /// locale.
    ///
    /// A missing token does not fail construction; every search through such
    /// a client fails fast instead, keeping the application interactive.
    pub(crate) fn new(token: Option<String>, language: String) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .user_agent(concat!("kinotui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: API_BASE_URL.to_string(),
            language,
            token,
        })
    }

    /// Searches the catalog and returns the matching movies in response
    /// order.
    ///
    /// The query text is sent verbatim; validation and trimming are the
    /// caller's concern. The `results` field of the response payload is
    /// returned unchanged, possibly empty.
    pub(crate) fn search_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let token = self.token.as_deref().ok_or(CatalogError::MissingToken)?;

        let response = self
            .http
            .get(format!("{}/search/movie", self.api_base))
            .query(&[("query", query), ("language", self.language.as_str())])
            .bearer_auth(token)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let page: SearchPage = response.json()?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::{BACKDROP_SIZE, CatalogClient, CatalogError, POSTER_SIZE, image_url};

    #[test]
    fn image_url_is_empty_for_missing_path() {
        assert_eq!(image_url(None, POSTER_SIZE), "");
        assert_eq!(image_url(Some(""), POSTER_SIZE), "");
    }

    #[test]
    fn image_url_joins_base_size_and_path() {
        let url = image_url(Some("/abc.jpg"), BACKDROP_SIZE);
        assert_eq!(url, "https://image.tmdb.org/t/p/original/abc.jpg");

        let url = image_url(Some("/poster.png"), POSTER_SIZE);
        assert!(url.ends_with("/w500/poster.png"));
    }

    #[test]
    fn search_without_token_fails_before_any_io() {
        let client = CatalogClient::new(None, "uk-UA".to_string()).unwrap();
        let err = client.search_movies("dune").unwrap_err();
        assert!(matches!(err, CatalogError::MissingToken));
    }
}
