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

//! Display formatting helpers.

/// Formats a catalog rating for display.
///
/// A rating of exactly zero means the title has not been rated yet, so it is
/// treated the same as an absent rating.
///
/// # Examples
///
/// ```
/// assert_eq!(format_rating(Some(7.2)), "7.2/10");
/// assert_eq!(format_rating(None), "N/A");
/// ```
pub(crate) fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(rating) if rating > 0.0 => format!("{rating}/10"),
        _ => "N/A".to_string(),
    }
}

/// Formats a release date for display, substituting a placeholder when the
/// catalog supplied none.
pub(crate) fn format_release_date(release_date: &str) -> &str {
    if release_date.is_empty() {
        "Unknown"
    } else {
        release_date
    }
}

#[cfg(test)]
mod tests {
    use super::{format_rating, format_release_date};

    #[test]
    fn present_rating_is_formatted_out_of_ten() {
        assert_eq!(format_rating(Some(7.2)), "7.2/10");
        assert_eq!(format_rating(Some(10.0)), "10/10");
    }

    #[test]
    fn absent_or_zero_rating_is_not_available() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(0.0)), "N/A");
    }

    #[test]
    fn empty_release_date_gets_placeholder() {
        assert_eq!(format_release_date(""), "Unknown");
        assert_eq!(format_release_date("1999-10-15"), "1999-10-15");
    }
}
