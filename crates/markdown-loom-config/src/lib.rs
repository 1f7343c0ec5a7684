//! User configuration for markdown-loom, read from
//! `~/.config/markdown-loom/config.toml`.

use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text inserted for a tab key press.
    pub tab_text: String,

    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Directory that relative replay script paths resolve against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_text: "\t".to_string(),
            pretty_json: true,
            scripts_dir: None,
        }
    }
}

impl Config {
    /// Reads the config at `path`. A missing file is `Ok(None)`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.scripts_dir = config.scripts_dir.as_deref().map(expand);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads the user config, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        expand(Path::new("~/.config/markdown-loom")).join("config.toml")
    }

    /// Resolves a script path: relative paths are taken from `scripts_dir`
    /// when one is configured.
    pub fn resolve_script(&self, script: &Path) -> PathBuf {
        match &self.scripts_dir {
            Some(dir) if script.is_relative() && !script.exists() => dir.join(script),
            _ => script.to_path_buf(),
        }
    }
}

/// Expands `~` and environment variables. Paths that fail to expand (an
/// unset variable, say) come back unchanged.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw).map_or_else(|_| path.to_path_buf(), |s| PathBuf::from(s.into_owned()))
}
