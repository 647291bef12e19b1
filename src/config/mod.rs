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

//! Application configuration.
//!
//! This module manages the application configuration file and the API
//! credential. The configuration file holds non-secret settings; the bearer
//! token is read once at startup from the environment and never persisted.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "kinotui";

/// Environment variable holding the TMDB API bearer token.
pub(crate) const TOKEN_ENV_VAR: &str = "TMDB_API_TOKEN";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: "uk-UA".to_string(),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Reads the API bearer token from the environment.
///
/// Returns `None` when the variable is unset or blank; the caller decides
/// how loudly to complain.
pub(crate) fn load_api_token() -> Option<String> {
    normalize_token(std::env::var(TOKEN_ENV_VAR).ok())
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, normalize_token};

    #[test]
    fn default_config_uses_ukrainian_locale() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.language, "uk-UA");
    }

    #[test]
    fn blank_tokens_are_treated_as_missing() {
        assert_eq!(normalize_token(None), None);
        assert_eq!(normalize_token(Some(String::new())), None);
        assert_eq!(normalize_token(Some("   ".to_string())), None);
        assert_eq!(
            normalize_token(Some(" abc123 ".to_string())),
            Some("abc123".to_string())
        );
    }
}
