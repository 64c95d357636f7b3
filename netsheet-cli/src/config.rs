//! `seller-tools.toml` configuration.
//!
//! Resolution order: the file named by `SELLER_TOOLS_CONFIG`, then
//! `./seller-tools.toml`, then built-in defaults. Every section and key is
//! optional.
//!
//! ```toml
//! [branding]
//! agent_name = "Samantha Martinez | ELITE Agent"
//!
//! [logging]
//! level = "debug"
//! file = "seller-tools.log"
//!
//! [contact]
//! endpoint = "https://example.com/"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SELLER_TOOLS_CONFIG";

/// Looked up in the working directory when the env var is unset.
pub const DEFAULT_CONFIG_FILE: &str = "seller-tools.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    /// Shown under every document title.
    pub agent_name: String,
    /// Closing line of the timeline document.
    pub timeline_tagline: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            agent_name: "Samantha Martinez | ELITE Agent".to_string(),
            timeline_tagline: "Your personalized roadmap from \"Thinking about it\" to \"Sold.\""
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Appended to when present.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form handler URL. The `contact` command refuses to run without one.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub branding: BrandingConfig,
    pub logging: LoggingConfig,
    pub contact: ContactConfig,
}

impl Config {
    /// Loads the configuration from the first source that exists.
    pub fn load() -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match Self::resolve_path(env_path, Path::new(".")) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The explicit path if given, else the default file in `dir` if it exists.
    pub fn resolve_path(
        explicit: Option<PathBuf>,
        dir: &Path,
    ) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.branding.agent_name, "Samantha Martinez | ELITE Agent");
        assert_eq!(config.contact.timeout_secs, 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"

            [contact]
            endpoint = "https://forms.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
        assert_eq!(
            config.contact.endpoint.as_deref(),
            Some("https://forms.example.com/")
        );
        assert_eq!(config.contact.timeout_secs, 10);
        assert_eq!(config.branding, BrandingConfig::default());
    }

    #[test]
    fn explicit_path_wins_over_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "").unwrap();
        let explicit = PathBuf::from("/etc/seller-tools/custom.toml");

        let resolved = Config::resolve_path(Some(explicit.clone()), dir.path());

        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn working_directory_file_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[branding]\nagent_name = \"Test Agent\"\n").unwrap();

        let resolved = Config::resolve_path(None, dir.path()).unwrap();
        let config = Config::from_path(&resolved).unwrap();

        assert_eq!(resolved, path);
        assert_eq!(config.branding.agent_name, "Test Agent");
    }

    #[test]
    fn no_file_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(Config::resolve_path(None, dir.path()), None);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[contact]\ntimeout_secs = \"soon\"\n").unwrap();

        let err = Config::from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Config::from_path(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
