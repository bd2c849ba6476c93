use std::path::{Path, PathBuf};

use eventwatch_core::errors::{ExError, ExErrorKind, WatchError};
use eventwatch_core::logging_facility::Profile;
use eventwatch_core::snapshot::RetentionPolicy;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{config_error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "eventwatch.toml";

/// Top-level configuration.
///
/// Every section has serde defaults, so an empty file (or none at all) gives
/// a working setup apart from the listing URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub retention: RetentionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WatchConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it does not parse
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        let config: WatchConfig = toml::from_str(&content).map_err(|e| config_error(path, e))?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails, `Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io = |e: std::io::Error| {
            ExError::new(ExErrorKind::Io)
                .with_op("save_config")
                .with_message(format!("{}: {}", path.display(), e))
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("save_config")
                .with_message(e.to_string())
        })?;
        std::fs::write(path, content).map_err(io)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values that would make a run meaningless.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.source.timeout_secs == 0 {
            Some("source.timeout_secs must be positive")
        } else if self.retention.change_log_cap == 0 {
            Some("retention.change_log_cap must be positive")
        } else if self.retention.removed_retention_days <= 0 {
            Some("retention.removed_retention_days must be positive")
        } else if Profile::from_name(&self.logging.profile).is_none() {
            Some("logging.profile must be 'development' or 'production'")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(WatchError::InvalidConfig {
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(
            self.retention.change_log_cap,
            self.retention.removed_retention_days,
        )
    }

    pub fn logging_profile(&self) -> Profile {
        Profile::from_name(&self.logging.profile).unwrap_or(Profile::Development)
    }
}

/// Where the listing page comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Listing page URL; may instead be given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
            user_agent: format!("eventwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Snapshot storage location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one snapshot file per scope.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".eventwatch"),
        }
    }
}

/// Bounds on change log and removal archive growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    pub change_log_cap: usize,
    pub removed_retention_days: i64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        let policy = RetentionPolicy::default();
        Self {
            change_log_cap: policy.change_log_cap,
            removed_retention_days: policy.removed_retention.num_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `development` (human-readable, debug) or `production` (JSON, info).
    pub profile: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            profile: "development".to_string(),
        }
    }
}
