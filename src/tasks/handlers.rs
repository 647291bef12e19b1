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

//! Task execution.
//!
//! Every outcome is reported as an event tagged with the task's sequence
//! number; whether it still applies is decided on the main thread. Failures
//! are logged here with their full detail and collapsed to a generic failure
//! event, so the user never sees transport internals.

use anyhow::Result;

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn search(ctx: &mut TaskContext, seq: u64, query: &str) -> Result<()> {
    match ctx.client.search_movies(query) {
        Ok(movies) => {
            tracing::info!(seq, count = movies.len(), "catalog search succeeded");
            ctx.event_tx
                .send(AppEvent::SearchResultsReady { seq, movies })?;
        }

        Err(e) => {
            tracing::error!(seq, error = %e, "catalog search failed");
            ctx.event_tx.send(AppEvent::SearchFailed { seq })?;
        }
    }

    Ok(())
}
