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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work
//! from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into catalog API calls and broadcasts the
//! results back to the application via events.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks. Other actions are likely
//! more suited to events.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{catalog::CatalogClient, config::AppConfig, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search { seq: u64, query: String },
}

/// Shared context for task handlers.
pub(crate) struct TaskContext<'a> {
    pub(crate) client: &'a CatalogClient,
    pub(crate) event_tx: &'a Sender<AppEvent>,
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own catalog client and enters a
/// blocking loop, listening for incoming [`AppTask`]s. All network I/O
/// happens here; the main thread never blocks on the catalog.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `token` - The API bearer token, if one was configured.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    token: Option<String>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let language = config.language.clone();

    thread::spawn(move || {
        let client = match CatalogClient::new(token, language) {
            Ok(client) => client,
            Err(e) => {
                let _ = event_tx.send(AppEvent::Error(format!(
                    "Failed to initialise the catalog client: {e}"
                )));
                return;
            }
        };

        let mut ctx = TaskContext {
            client: &client,
            event_tx: &event_tx,
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(&mut ctx, task) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

fn handle_task(ctx: &mut TaskContext, task: AppTask) -> Result<()> {
    match task {
        AppTask::Search { seq, query } => handlers::search(ctx, seq, &query),
    }
}
