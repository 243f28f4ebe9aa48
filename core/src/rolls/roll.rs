use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A player taking part in one roll episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRoller {
    pub player_name: String,
    /// Zero until the player's Need/Greed arrives.
    pub roll: u32,
    pub is_winner: bool,
}

impl LootRoller {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Default::default()
        }
    }

    pub fn has_rolled(&self) -> bool {
        self.roll != 0
    }
}

/// One item's roll episode, from its Add event until it is swept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRoll {
    /// Creation time while pending, resolution time once won.
    pub timestamp: NaiveDateTime,
    pub item_id: u32,
    pub item_name: String,
    /// In cast order.
    pub rollers: Vec<LootRoller>,
    pub is_won: bool,
    /// Winner text, empty until resolved.
    pub winner: String,
    /// Rendered roller list, recomputed whenever `rollers` changes.
    pub rollers_display: String,
}

impl LootRoll {
    pub fn new(
        item_id: u32,
        item_name: impl Into<String>,
        timestamp: NaiveDateTime,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            item_id,
            item_name: item_name.into(),
            rollers: Vec::new(),
            is_won: false,
            winner: String::new(),
            rollers_display: placeholder.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.is_won
    }

    pub fn roller(&self, player_name: &str) -> Option<&LootRoller> {
        self.rollers.iter().find(|r| r.player_name == player_name)
    }

    pub fn roller_mut(&mut self, player_name: &str) -> Option<&mut LootRoller> {
        self.rollers.iter_mut().find(|r| r.player_name == player_name)
    }

    pub fn has_roller(&self, player_name: &str) -> bool {
        self.roller(player_name).is_some()
    }

    /// Resolve the episode. Any winner flag is the caller's to set.
    pub fn resolve(&mut self, winner: String, timestamp: NaiveDateTime) {
        self.is_won = true;
        self.winner = winner;
        self.timestamp = timestamp;
    }
}
