//! Centralized display formatting utilities.
//!
//! Roller lists and winner text go through this module so the roll window
//! and any other consumer render player names the same way.

use crate::NameFormat;

/// Split a raw name into forename and surname at the first space.
///
/// Returns `None` for single-word names, which no style abbreviates.
fn split_name(raw: &str) -> Option<(&str, &str)> {
    let (forename, surname) = raw.trim().split_once(' ')?;
    let surname = surname.trim_start();
    if forename.is_empty() || surname.is_empty() {
        return None;
    }
    Some((forename, surname))
}

/// First character of `part` followed by a period.
#[inline]
fn initial(part: &str) -> String {
    match part.chars().next() {
        Some(c) => format!("{c}."),
        None => String::new(),
    }
}

/// Format a raw player name according to the configured style.
///
/// # Examples
/// ```
/// use lootwatch_types::NameFormat;
/// use lootwatch_types::formatting::format_player_name;
/// assert_eq!(format_player_name(NameFormat::FullName, "Jane Doe"), "Jane Doe");
/// assert_eq!(format_player_name(NameFormat::SurnameAbbreviated, "Jane Doe"), "Jane D.");
/// assert_eq!(format_player_name(NameFormat::ForenameAbbreviated, "Jane Doe"), "J. Doe");
/// assert_eq!(format_player_name(NameFormat::Initials, "Jane Doe"), "J. D.");
/// assert_eq!(format_player_name(NameFormat::Initials, "Jane"), "Jane");
/// ```
pub fn format_player_name(format: NameFormat, raw: &str) -> String {
    let Some((forename, surname)) = split_name(raw) else {
        return raw.trim().to_string();
    };

    match format {
        NameFormat::FullName => format!("{forename} {surname}"),
        NameFormat::SurnameAbbreviated => format!("{forename} {}", initial(surname)),
        NameFormat::ForenameAbbreviated => format!("{} {surname}", initial(forename)),
        NameFormat::Initials => format!("{} {}", initial(forename), initial(surname)),
    }
}

/// Join display entries with `", "`, optionally prefixed by `"[count] "`.
///
/// # Examples
/// ```
/// use lootwatch_types::formatting::join_display;
/// let entries = vec!["A".to_string(), "B[12]".to_string()];
/// assert_eq!(join_display(&entries, false), "A, B[12]");
/// assert_eq!(join_display(&entries, true), "[2] A, B[12]");
/// ```
pub fn join_display(entries: &[String], show_count: bool) -> String {
    let joined = entries.join(", ");
    if show_count {
        format!("[{}] {}", entries.len(), joined)
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(format_player_name(NameFormat::FullName, "  Jane   Doe "), "Jane Doe");
        assert_eq!(format_player_name(NameFormat::Initials, " Jane "), "Jane");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(format_player_name(NameFormat::Initials, ""), "");
    }

    #[test]
    fn test_non_ascii_initials() {
        assert_eq!(format_player_name(NameFormat::Initials, "Émile Ödegaard"), "É. Ö.");
    }

    #[test]
    fn test_join_empty_with_count() {
        assert_eq!(join_display(&[], true), "[0] ");
        assert_eq!(join_display(&[], false), "");
    }
}
