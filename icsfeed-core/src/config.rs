//! Feed parsing options, stored at ~/.config/icsfeed/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::datetime::TimeReference;
use crate::error::{FeedError, FeedResult};

/// Standard ICS property for the last modification time.
pub const LAST_MODIFIED_KEY: &str = "LAST-MODIFIED";

/// Underscore spelling some legacy importers matched instead.
pub const LEGACY_LAST_MODIFIED_KEY: &str = "LAST_MODIFIED";

/// Options that change how feed properties are interpreted.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FeedOptions {
    /// Match `LAST_MODIFIED` instead of `LAST-MODIFIED` for the update date.
    pub legacy_last_modified: bool,

    /// How decoded date-times become instants.
    pub time_reference: TimeReference,
}

impl FeedOptions {
    /// Property key mapped onto an event's update date.
    pub fn last_modified_key(&self) -> &'static str {
        if self.legacy_last_modified {
            LEGACY_LAST_MODIFIED_KEY
        } else {
            LAST_MODIFIED_KEY
        }
    }

    pub fn config_path() -> FeedResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FeedError::Config("Could not determine config directory".into()))?
            .join("icsfeed");

        Ok(config_dir.join("config.toml"))
    }

    /// Load options from `path`, or from the default config path.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> FeedResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| FeedError::Config(format!("{}: {e}", path.display())))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FeedResult<()> {
        let contents = "\
# icsfeed configuration

# Match the legacy LAST_MODIFIED key instead of LAST-MODIFIED:
# legacy_last_modified = false

# Interpret date-times ending in Z as UTC (\"utc\") or always as local time (\"local\"):
# time_reference = \"local\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FeedError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FeedError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
