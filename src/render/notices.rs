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

//! Render transient notices.
//!
//! Notices stack in the top-right corner, above every other widget, and
//! disappear on their own; they receive no input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Clear, Paragraph},
};

use crate::{
    notices::{NoticeBoard, NoticeLevel},
    theme::Theme,
};

const MAX_WIDTH: u16 = 44;

pub(super) fn draw_notices(f: &mut Frame, area: Rect, board: &NoticeBoard, theme: &Theme) {
    if board.is_empty() {
        return;
    }

    for (i, notice) in board.iter().enumerate() {
        let width = (notice.message.chars().count() as u16 + 2)
            .min(MAX_WIDTH)
            .min(area.width.saturating_sub(2));
        let y = area.y + 1 + (i as u16) * 2;
        if y + 1 > area.bottom() || width == 0 {
            break;
        }

        let toast = Rect::new(area.right().saturating_sub(width + 1), y, width, 1);

        let colour = match notice.level {
            NoticeLevel::Info => theme.notice_info_fg,
            NoticeLevel::Warning => theme.notice_warning_fg,
            NoticeLevel::Error => theme.notice_error_fg,
        };

        f.render_widget(Clear, toast);
        f.render_widget(
            Paragraph::new(format!(" {}", notice.message))
                .style(Style::default().fg(colour).bold().bg(theme.background_colour)),
            toast,
        );
    }
}
