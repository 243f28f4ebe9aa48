//! Roll monitor configuration loading.
//!
//! The config type itself lives in `lootwatch-types`; this module only reads
//! it from TOML. Missing keys take their defaults.

use std::fs;
use std::path::Path;

use lootwatch_types::RollMonitorConfig;

use crate::error::ConfigError;

/// Parse a config from TOML text. `origin` names the source in errors.
pub fn parse_config(content: &str, origin: &str) -> Result<RollMonitorConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        origin: origin.to_string(),
        source: e,
    })
}

/// Load a config from a TOML file.
pub fn load_config(path: &Path) -> Result<RollMonitorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&content, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), "Loaded roll monitor config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootwatch_types::NameFormat;

    #[test]
    fn test_parse_roll_monitor_toml() {
        let toml = r#"
enabled = true
process_frequency_ms = 500
pending_timeout_ms = 60000
roll_name_format = "surname_abbreviated"
show_roller_count = true
"#;

        let config = parse_config(toml, "inline").unwrap();
        assert_eq!(config.process_frequency_ms, 500);
        assert_eq!(config.pending_timeout_ms, 60_000);
        assert_eq!(config.roll_name_format, NameFormat::SurnameAbbreviated);
        assert!(config.show_roller_count);
        assert!(!config.show_roll_numbers);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_config("enabled = \"yes\"", "settings.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("settings.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/lootwatch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("lootwatch-config-{}.toml", std::process::id()));
        fs::write(&path, "won_timeout_ms = 1234\n").unwrap();
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.won_timeout_ms, 1234);
        assert!(config.enabled);
    }
}
