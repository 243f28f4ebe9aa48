//! Collaborators the roll monitor calls back into.
//!
//! Everything except `config` has a default so tests and simple hosts only
//! implement what they care about.

use std::sync::RwLock;

use chrono::{Local, NaiveDateTime};
use lootwatch_types::formatting::format_player_name;
use lootwatch_types::{NameFormat, RollMonitorConfig};

use crate::error::RollError;

/// Localization key for the placeholder shown before anyone casts.
pub const NO_ROLLERS_KEY: &str = "RollMonitorNone";
pub const NO_ROLLERS_FALLBACK: &str = "No one has rolled";

/// Localization key for the winner text of an item nobody took.
pub const LOST_KEY: &str = "RollMonitorLost";
pub const LOST_FALLBACK: &str = "Dropped to floor";

pub trait RollHost: Send + Sync {
    /// Current settings. Read at every wait check, so changes apply mid-drain.
    fn config(&self) -> RollMonitorConfig;

    fn in_combat(&self) -> bool {
        false
    }

    fn format_player_name(&self, format: NameFormat, raw_name: &str) -> String {
        format_player_name(format, raw_name)
    }

    fn localize(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    /// Fire-and-forget diagnostic sink.
    fn report_error(&self, error: &RollError, context: &str) {
        tracing::error!(error = %error, "{context}");
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Host backed by an in-process config with default collaborators.
///
/// The config can be swapped at runtime through [`StaticHost::set_config`].
#[derive(Debug, Default)]
pub struct StaticHost {
    config: RwLock<RollMonitorConfig>,
}

impl StaticHost {
    pub fn new(config: RollMonitorConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    pub fn set_config(&self, config: RollMonitorConfig) {
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
    }
}

impl RollHost for StaticHost {
    fn config(&self) -> RollMonitorConfig {
        *self.config.read().unwrap_or_else(|e| e.into_inner())
    }
}
