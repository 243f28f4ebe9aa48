//! Shared configuration and display types for lootwatch.
//!
//! Kept free of runtime dependencies so a UI process can deserialize the
//! same config the roll monitor reads.

pub mod config;
pub mod formatting;

pub use config::{NameFormat, RollMonitorConfig};
