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

//! Query input component.
//!
//! A thin wrapper around a managed text input. The bar performs no trimming
//! or validation of its own; on submission it hands the raw buffer to the
//! caller and clears itself. Whether the query is acceptable is the
//! controller's decision.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }
}
