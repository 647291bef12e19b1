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

//! Reusable UI components.
//!
//! Each component keeps its state type in its module root, with input
//! handling and drawing split into `event` and `render` sub-modules where the
//! component has them.

mod detail;
mod movie_grid;
mod search_bar;

pub(crate) use detail::DetailView;
pub(crate) use movie_grid::{MovieGrid, MovieGridAction};
pub(crate) use search_bar::SearchBar;
