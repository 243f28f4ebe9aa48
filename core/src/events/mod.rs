pub mod loot_event;
pub mod queue;

pub use loot_event::{LootEvent, LootEventKind, LootEventType};
pub use queue::{EventQueue, LootEventSender};
