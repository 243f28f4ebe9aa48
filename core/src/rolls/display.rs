//! Roller list rendering.

use lootwatch_types::formatting::join_display;
use lootwatch_types::{NameFormat, RollMonitorConfig};

use super::LootRoller;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub name_format: NameFormat,
    pub show_roller_count: bool,
    pub show_roll_numbers: bool,
}

impl From<&RollMonitorConfig> for DisplayOptions {
    fn from(config: &RollMonitorConfig) -> Self {
        Self {
            name_format: config.roll_name_format,
            show_roller_count: config.show_roller_count,
            show_roll_numbers: config.show_roll_numbers,
        }
    }
}

/// Render rollers as "A, B[42]" (or "[2] A, B[42]" with the count prefix).
///
/// Roll numbers are only appended for rollers that have rolled, and only
/// when `show_roll_numbers` is on.
pub fn render_rollers<F>(rollers: &[LootRoller], options: DisplayOptions, format_name: F) -> String
where
    F: Fn(NameFormat, &str) -> String,
{
    let entries: Vec<String> = rollers
        .iter()
        .map(|roller| {
            let name = format_name(options.name_format, &roller.player_name);
            if options.show_roll_numbers && roller.has_rolled() {
                format!("{name}[{}]", roller.roll)
            } else {
                name
            }
        })
        .collect();

    join_display(&entries, options.show_roller_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootwatch_types::formatting::format_player_name;

    fn rollers() -> Vec<LootRoller> {
        vec![
            LootRoller {
                player_name: "Jane Doe".to_string(),
                roll: 80,
                is_winner: false,
            },
            LootRoller::new("John Roe"),
        ]
    }

    fn options(show_roller_count: bool, show_roll_numbers: bool) -> DisplayOptions {
        DisplayOptions {
            name_format: NameFormat::FullName,
            show_roller_count,
            show_roll_numbers,
        }
    }

    #[test]
    fn test_names_only() {
        let text = render_rollers(&rollers(), options(false, false), format_player_name);
        assert_eq!(text, "Jane Doe, John Roe");
    }

    #[test]
    fn test_roll_numbers_skip_unrolled() {
        let text = render_rollers(&rollers(), options(false, true), format_player_name);
        assert_eq!(text, "Jane Doe[80], John Roe");
    }

    #[test]
    fn test_count_prefix_with_roll_numbers() {
        let text = render_rollers(&rollers(), options(true, true), format_player_name);
        assert_eq!(text, "[2] Jane Doe[80], John Roe");
    }

    #[test]
    fn test_name_format_applies() {
        let opts = DisplayOptions {
            name_format: NameFormat::Initials,
            ..options(false, true)
        };
        let text = render_rollers(&rollers(), opts, format_player_name);
        assert_eq!(text, "J. D.[80], J. R.");
    }

    #[test]
    fn test_render_is_deterministic() {
        let rollers = rollers();
        let first = render_rollers(&rollers, options(true, true), format_player_name);
        let second = render_rollers(&rollers, options(true, true), format_player_name);
        assert_eq!(first, second);
    }
}
