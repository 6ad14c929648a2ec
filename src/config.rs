//! Client configuration.
//!
//! The API key is resolved through a chain, checked in order:
//!
//! 1. `--api-key <key>` — explicit per-invocation override
//! 2. `ONCALL_API_KEY` env var — process/session level
//! 3. `~/.oncall/config.toml` — global default
//!
//! The result is an explicit [`Config`] constructed once at startup and
//! passed by reference into the API client; nothing here is global state.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

/// Default Opsgenie API endpoint. Overridable via `api-url` in the config
/// file, mainly for EU accounts and tests.
const DEFAULT_API_URL: &str = "https://api.opsgenie.com";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

/// On-disk shape of `~/.oncall/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_url: Option<String>,
}

impl Config {
    /// Resolve configuration from the chain described in the module docs.
    ///
    /// `explicit_key` is the `--api-key` flag; `file` is the `--config`
    /// flag, falling back to the default path. A missing config file is
    /// fine as long as a key comes from somewhere else.
    pub fn load(explicit_key: Option<&str>, file: Option<&Path>) -> Result<Self, String> {
        let env_key = env::var("ONCALL_API_KEY").ok();
        Self::resolve(explicit_key, env_key.as_deref(), file)
    }

    /// The resolution chain itself, with the env var passed in so tests
    /// don't depend on the process environment.
    fn resolve(
        explicit_key: Option<&str>,
        env_key: Option<&str>,
        file: Option<&Path>,
    ) -> Result<Self, String> {
        let from_file = match file {
            Some(path) => Some(Self::read_file(path)?),
            None => match Self::default_path() {
                Some(path) if path.exists() => Some(Self::read_file(&path)?),
                _ => None,
            },
        };
        let from_file = from_file.unwrap_or_default();

        // Empty values don't count as set anywhere in the chain.
        let nonempty = |k: &str| (!k.is_empty()).then(|| k.to_string());
        let api_key = explicit_key
            .and_then(nonempty)
            .or_else(|| env_key.and_then(nonempty))
            .or_else(|| from_file.api_key.as_deref().and_then(nonempty))
            .ok_or(
                "no API key set: pass --api-key, set ONCALL_API_KEY, \
                 or add `api-key = \"...\"` to ~/.oncall/config.toml",
            )?;

        Ok(Self {
            api_key,
            api_url: from_file
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// The default config file path: `~/.oncall/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".oncall").join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<ConfigFile, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_key_wins_over_env_and_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api-key = \"from-file\"");

        let config = Config::resolve(Some("from-flag"), Some("from-env"), Some(&path)).unwrap();
        assert_eq!(config.api_key, "from-flag");
    }

    #[test]
    fn env_key_wins_over_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api-key = \"from-file\"");

        let config = Config::resolve(None, Some("from-env"), Some(&path)).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn file_key_used_when_no_override() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api-key = \"from-file\"");

        let config = Config::resolve(None, None, Some(&path)).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn file_can_override_api_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "api-key = \"k\"\napi-url = \"https://api.eu.opsgenie.com\"",
        );

        let config = Config::resolve(None, None, Some(&path)).unwrap();
        assert_eq!(config.api_url, "https://api.eu.opsgenie.com");
    }

    #[test]
    fn empty_key_everywhere_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api-key = \"\"");

        let err = Config::resolve(None, None, Some(&path)).unwrap_err();
        assert!(err.contains("no API key set"), "unexpected error: {err}");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Config::resolve(Some("k"), None, Some(&path)).unwrap_err();
        assert!(err.contains("failed to read"), "unexpected error: {err}");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api-key = [not toml");

        let err = Config::resolve(Some("k"), None, Some(&path)).unwrap_err();
        assert!(err.contains("invalid config"), "unexpected error: {err}");
    }
}
