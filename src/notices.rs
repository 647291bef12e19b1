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

//! Transient user-facing notices.
//!
//! Notices are fire-and-forget toasts: they are not part of durable state,
//! carry no interaction, and dismiss themselves after a fixed time-to-live.
//! The periodic tick event drives expiry.

use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug)]
pub(crate) struct Notice {
    pub(crate) message: String,
    pub(crate) level: NoticeLevel,
    created: Instant,
}

/// Holds the currently visible notices, newest last.
#[derive(Debug)]
pub(crate) struct NoticeBoard {
    notices: Vec<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    pub(crate) fn new() -> Self {
        Self {
            notices: vec![],
            ttl: NOTICE_TTL,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: vec![],
            ttl,
        }
    }

    pub(crate) fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            message: message.into(),
            level,
            created: Instant::now(),
        });
    }

    /// Drops every notice older than the time-to-live.
    pub(crate) fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.notices
            .retain(|n| now.duration_since(n.created) < ttl);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{NoticeBoard, NoticeLevel};

    #[test]
    fn notices_expire_after_ttl() {
        let mut board = NoticeBoard::with_ttl(Duration::from_millis(10));
        board.push(NoticeLevel::Info, "No movies found for your request.");
        assert!(!board.is_empty());

        board.prune(Instant::now());
        assert!(!board.is_empty());

        board.prune(Instant::now() + Duration::from_millis(20));
        assert!(board.is_empty());
    }

    #[test]
    fn notices_stack_in_emission_order() {
        let mut board = NoticeBoard::new();
        board.push(NoticeLevel::Warning, "first");
        board.push(NoticeLevel::Error, "second");

        let messages: Vec<&str> = board.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
