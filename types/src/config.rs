//! Roll monitor configuration.
//!
//! Every field has a default so a config file only needs to mention the
//! settings it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How player names are rendered in roller lists and winner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameFormat {
    /// "Jane Doe"
    #[default]
    FullName,
    /// "Jane D."
    SurnameAbbreviated,
    /// "J. Doe"
    ForenameAbbreviated,
    /// "J. D."
    Initials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollMonitorConfig {
    /// Master switch. While false, ticks leave the queue and rolls untouched.
    pub enabled: bool,
    /// Pause processing while the host reports the player is in combat.
    pub restrict_in_combat: bool,
    /// Period of the processing tick in milliseconds.
    pub process_frequency_ms: u64,
    /// Lifetime of a roll nobody has won yet, measured from its Add event.
    pub pending_timeout_ms: u64,
    /// Lifetime of a resolved roll, measured from its Obtain/Lost event.
    pub won_timeout_ms: u64,
    pub roll_name_format: NameFormat,
    /// Prefix roller lists with "[count] ".
    pub show_roller_count: bool,
    /// Suffix rolled players with "[roll]".
    pub show_roll_numbers: bool,
}

impl Default for RollMonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            restrict_in_combat: false,
            process_frequency_ms: 3_000,
            pending_timeout_ms: 300_000,
            won_timeout_ms: 30_000,
            roll_name_format: NameFormat::FullName,
            show_roller_count: false,
            show_roll_numbers: false,
        }
    }
}

impl RollMonitorConfig {
    pub fn process_frequency(&self) -> Duration {
        // A zero period would spin the ticker
        Duration::from_millis(self.process_frequency_ms.max(1))
    }

    pub fn pending_timeout(&self) -> Duration {
        Duration::from_millis(self.pending_timeout_ms)
    }

    pub fn won_timeout(&self) -> Duration {
        Duration::from_millis(self.won_timeout_ms)
    }
}
