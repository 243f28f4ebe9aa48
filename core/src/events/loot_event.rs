use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Plain tag of a [`LootEventKind`], for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootEventType {
    Add,
    Cast,
    Need,
    Greed,
    Obtain,
    Lost,
}

impl LootEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Cast => "cast",
            Self::Need => "need",
            Self::Greed => "greed",
            Self::Obtain => "obtain",
            Self::Lost => "lost",
        }
    }
}

/// What happened to an item. Each variant carries only the fields it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LootEventKind {
    /// An item was added to the loot list.
    Add { item_name: String },
    /// A player opened the roll window for the item.
    Cast { player_name: String },
    Need { player_name: String, roll: u32 },
    Greed { player_name: String, roll: u32 },
    /// A player received the item.
    Obtain { player_name: String },
    /// Nobody took the item.
    Lost,
}

impl LootEventKind {
    pub fn event_type(&self) -> LootEventType {
        match self {
            Self::Add { .. } => LootEventType::Add,
            Self::Cast { .. } => LootEventType::Cast,
            Self::Need { .. } => LootEventType::Need,
            Self::Greed { .. } => LootEventType::Greed,
            Self::Obtain { .. } => LootEventType::Obtain,
            Self::Lost => LootEventType::Lost,
        }
    }
}

/// A loot notification as produced by the log/network parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEvent {
    /// Encounter/actor context of the event. Zero marks an unusable event.
    pub content_id: u64,
    pub item_id: u32,
    pub timestamp: NaiveDateTime,
    pub kind: LootEventKind,
}

impl LootEvent {
    pub fn new(content_id: u64, item_id: u32, timestamp: NaiveDateTime, kind: LootEventKind) -> Self {
        Self {
            content_id,
            item_id,
            timestamp,
            kind,
        }
    }

    pub fn add(content_id: u64, item_id: u32, item_name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self::new(
            content_id,
            item_id,
            timestamp,
            LootEventKind::Add {
                item_name: item_name.into(),
            },
        )
    }

    pub fn cast(content_id: u64, item_id: u32, player_name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self::new(
            content_id,
            item_id,
            timestamp,
            LootEventKind::Cast {
                player_name: player_name.into(),
            },
        )
    }

    pub fn need(
        content_id: u64,
        item_id: u32,
        player_name: impl Into<String>,
        roll: u32,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(
            content_id,
            item_id,
            timestamp,
            LootEventKind::Need {
                player_name: player_name.into(),
                roll,
            },
        )
    }

    pub fn greed(
        content_id: u64,
        item_id: u32,
        player_name: impl Into<String>,
        roll: u32,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(
            content_id,
            item_id,
            timestamp,
            LootEventKind::Greed {
                player_name: player_name.into(),
                roll,
            },
        )
    }

    pub fn obtain(content_id: u64, item_id: u32, player_name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self::new(
            content_id,
            item_id,
            timestamp,
            LootEventKind::Obtain {
                player_name: player_name.into(),
            },
        )
    }

    pub fn lost(content_id: u64, item_id: u32, timestamp: NaiveDateTime) -> Self {
        Self::new(content_id, item_id, timestamp, LootEventKind::Lost)
    }

    pub fn event_type(&self) -> LootEventType {
        self.kind.event_type()
    }
}
