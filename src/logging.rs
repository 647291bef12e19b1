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

//! Tracing initialization.
//!
//! The terminal is owned by the TUI, so log output goes to a file in the
//! user's data directory via a non-blocking appender. The filter is
//! controlled by the `KINOTUI_LOG` environment variable and defaults to
//! `info`.

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "kinotui.log";

const LOG_ENV_VAR: &str = "KINOTUI_LOG";

/// Initializes the tracing subscriber with a file appender.
///
/// Returns the appender guard, which must be kept alive for the duration of
/// the process so buffered log lines are flushed on exit. Returns `None` when
/// the data directory cannot be created; logging is optional and its absence
/// never prevents the application from running.
pub(crate) fn init_logging() -> Option<WorkerGuard> {
    let dirs = ProjectDirs::from("", "", "kinotui")?;
    let log_dir = dirs.data_dir();
    std::fs::create_dir_all(log_dir).ok()?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
