//! Application configuration.
//!
//! Read from `<config dir>/folio/config.json` when present. Every field has a
//! default, so a missing file or a partial file is fine. Environment
//! variables override the file.

use crate::error::ConfigError;
use crate::source::Endpoint;
use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENDPOINT_ENV: &str = "FOLIO_EDUCATION_ENDPOINT";
pub const BASE_URL_ENV: &str = "FOLIO_BASE_URL";

/// Named data endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub education: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            education: "profile/education.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title shown above the timeline
    pub header: String,
    /// Base that relative endpoints are resolved against
    pub base_url: Option<String>,
    pub endpoints: Endpoints,
    /// Theme used when no preference has been stored yet
    pub theme: ThemeName,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            header: "Education".to_string(),
            base_url: None,
            endpoints: Endpoints::default(),
            theme: ThemeName::default(),
        }
    }
}

impl AppConfig {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    /// Loads the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Applies overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|s| !s.trim().is_empty()) {
            self.endpoints.education = endpoint;
        }
        if let Some(base) = lookup(BASE_URL_ENV).filter(|s| !s.trim().is_empty()) {
            self.base_url = Some(base);
        }
        self
    }

    /// Resolves the education endpoint against `base_url`.
    pub fn education_endpoint(&self) -> Result<Endpoint, ConfigError> {
        Endpoint::resolve(&self.endpoints.education, self.base_url.as_deref())
    }

    /// The header is required to be non-empty; an empty one falls back to the default.
    fn normalized(mut self) -> Self {
        if self.header.trim().is_empty() {
            log::warn!("empty header in config, using {:?}", Self::default().header);
            self.header = Self::default().header;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "dark", "endpoints": {"education": "https://me.dev/edu.json"}}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.header, "Education");
        assert_eq!(
            config.education_endpoint().unwrap(),
            Endpoint::Http("https://me.dev/edu.json".into())
        );
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ theme = dark }").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Json { .. })));
    }

    #[test]
    fn test_empty_header_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"header": "  "}"#).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().header, "Education");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENDPOINT_ENV, "data/education.json"),
            (BASE_URL_ENV, "https://cdn.me.dev/"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default().apply_env(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(
            config.education_endpoint().unwrap(),
            Endpoint::Http("https://cdn.me.dev/data/education.json".into())
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = AppConfig::default().apply_env(|_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
