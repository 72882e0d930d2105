//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default number of days shown by `ssa agenda`.
const DEFAULT_AGENDA_DAYS: u32 = 30;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Days listed after the first agenda day when `--to` is omitted.
    pub agenda_days: u32,

    /// Keyword applied to the agenda when `--keyword` is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agenda_days: DEFAULT_AGENDA_DAYS,
            keyword: None,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SSA_AGENDA_DAYS, SSA_KEYWORD
        figment = figment.merge(Env::prefixed("SSA_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for ssa.
///
/// On Linux: `~/.config/ssa`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ssa"))
}
