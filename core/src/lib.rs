pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod monitor;
pub mod rolls;

// Re-exports for convenience
pub use error::{ConfigError, RollError};
pub use events::{EventQueue, LootEvent, LootEventKind, LootEventSender, LootEventType};
pub use host::{RollHost, StaticHost};
pub use lootwatch_types::{NameFormat, RollMonitorConfig};
pub use monitor::{RollMonitor, TickOutcome, TickReport, TickerHandle};
pub use rolls::{LootRoll, LootRoller, RollBook};
