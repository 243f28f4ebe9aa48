use std::path::PathBuf;

use thiserror::Error;

/// Faults caught while a tick folds or sweeps rolls.
///
/// These come from host callbacks (name formatter, localizer) panicking
/// mid-fold. They are reported to the host and never stop the processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("panic while folding {event} event for item {item_id}: {message}")]
    FoldPanicked {
        event: &'static str,
        item_id: u32,
        message: String,
    },

    #[error("panic while sweeping expired rolls: {message}")]
    SweepPanicked { message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Best-effort text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
