use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::domain::{Leader, default_leaders};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid base URL '{0}': must be an absolute http(s) URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means a request may stay in flight forever.
    pub request_timeout_secs: Option<u64>,
    /// Leadership bios are not fetched; they ship with the configuration and
    /// fall back to the built-in team when the file lists none.
    pub leaders: Vec<Leader>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            leaders: default_leaders(),
        }
    }
}

impl AppConfig {
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Validates `base_url` and makes sure resource paths can be appended to it.
pub fn normalize_base_url(base_url: &str) -> Result<String, ConfigError> {
    let trimmed = base_url.trim();
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
    }

    let mut normalized = trimmed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

/// Loads the config file (if any) and applies `RISTORANTE_BASE_URL`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&config_path())?;
    if let Ok(base_url) = std::env::var("RISTORANTE_BASE_URL") {
        log::debug!("base URL overridden from environment: {base_url}");
        config.set_base_url(&base_url)?;
    }
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.base_url = normalize_base_url(&config.base_url)?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("RISTORANTE_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var_os(key), home::home_dir()).unwrap_or_else(|| {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".ristorante")
    })
}

/// Per-user data directory: `RISTORANTE_DATA_HOME` wins, then the platform
/// convention. `None` when neither the environment nor `home` gives a root.
fn resolve_data_dir(
    env: impl Fn(&str) -> Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = env("RISTORANTE_DATA_HOME") {
        return Some(PathBuf::from(path));
    }

    if cfg!(target_os = "windows") {
        env("APPDATA").map(|appdata| PathBuf::from(appdata).join("Ristorante"))
    } else if cfg!(target_os = "macos") {
        home.map(|home| home.join("Library/Application Support/Ristorante"))
    } else {
        env("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| home.map(|home| home.join(".local/share")))
            .map(|root| root.join("ristorante"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_load_config_with_leaders() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
base_url = "http://menu.example:3001"
request_timeout_secs = 10

[[leaders]]
id = 0
name = "Peter Pan"
image = "images/alberto.png"
designation = "Chief Epicurious Officer"
abbr = "CEO"
featured = true
description = "Our CEO, Peter, credits his hardworking East Asian immigrant parents."
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.base_url, "http://menu.example:3001/");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.leaders.len(), 1);
        assert_eq!(config.leaders[0].abbr, "CEO");
    }

    #[test]
    fn test_default_config_ships_leaders() {
        let config = AppConfig::default();
        assert_eq!(config.leaders.len(), 4);
        let featured: Vec<_> = config.leaders.iter().filter(|l| l.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "Alberto Somayya");
    }

    #[test]
    fn test_config_without_leaders_keeps_builtin_team() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "base_url = \"http://menu.example:3001/\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.leaders, default_leaders());
    }

    #[test]
    fn test_data_dir_override_wins() {
        let env = |key: &str| (key == "RISTORANTE_DATA_HOME").then(|| OsString::from("/srv/menu"));
        assert_eq!(
            resolve_data_dir(env, Some(PathBuf::from("/home/ana"))),
            Some(PathBuf::from("/srv/menu"))
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_data_dir_follows_xdg_then_home() {
        let xdg = |key: &str| (key == "XDG_DATA_HOME").then(|| OsString::from("/xdg"));
        assert_eq!(
            resolve_data_dir(xdg, Some(PathBuf::from("/home/ana"))),
            Some(PathBuf::from("/xdg/ristorante"))
        );

        let unset = |_: &str| -> Option<OsString> { None };
        assert_eq!(
            resolve_data_dir(unset, Some(PathBuf::from("/home/ana"))),
            Some(PathBuf::from("/home/ana/.local/share/ristorante"))
        );
        assert_eq!(resolve_data_dir(unset, None), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "base_url = [").unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:3001").unwrap(),
            "http://localhost:3001/"
        );
        assert_eq!(
            normalize_base_url(" https://api.example/v1/ ").unwrap(),
            "https://api.example/v1/"
        );
        assert!(matches!(
            normalize_base_url("localhost:3001"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(normalize_base_url("ftp://files.example/").is_err());
    }
}
