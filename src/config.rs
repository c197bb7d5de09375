/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use frontdesk::CredentialStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find configuration directory")]
    NoConfigDir,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Display, Hash, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfigKey {
    Server,
    AuthToken,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authtoken: Option<String>,
}

impl Config {
    /// Empty values count as unset.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::Server => &self.server,
            ConfigKey::AuthToken => &self.authtoken,
        };

        value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, key: ConfigKey, value: Option<String>) {
        let slot = match key {
            ConfigKey::Server => &mut self.server,
            ConfigKey::AuthToken => &mut self.authtoken,
        };

        *slot = value.filter(|value| !value.is_empty());
    }
}

#[derive(Clone, Debug)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn locate() -> Result<Self, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push("studio");
        path.push("config.toml");
        Ok(Self { path })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }

        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.path, contents).map_err(io_error)
    }

    pub fn get(&self, key: ConfigKey) -> Result<Option<String>, ConfigError> {
        Ok(self.load()?.get(key).map(str::to_string))
    }

    pub fn set(&self, key: ConfigKey, value: Option<String>) -> Result<(), ConfigError> {
        let mut config = self.load()?;
        config.set(key, value);
        self.save(&config)
    }

    /// Backs `studio config <key> [value]`: prints the value, or stores a new one.
    pub fn set_get_value_from_string(
        &self,
        key: &str,
        value: Option<String>,
        quiet: bool,
    ) -> Result<Option<String>, ConfigError> {
        let Ok(config_key) = key.parse::<ConfigKey>() else {
            if !quiet {
                eprintln!("Invalid key: {}", key);
                eprintln!("Valid keys are:");
                for config_key in ConfigKey::iter() {
                    eprintln!("{}", config_key);
                }
            }

            return Err(ConfigError::InvalidKey(key.to_string()));
        };

        if let Some(value) = value {
            self.set(config_key, Some(value.clone()))?;

            if !quiet {
                println!("{} set to \"{}\"", config_key, value);
            }

            return Ok(Some(value));
        }

        let value = self.get(config_key)?;

        if !quiet {
            println!("{}", value.as_deref().unwrap_or("[unset]"));
        }

        Ok(value)
    }
}

/// Keeps the session credential under `authtoken` in the config file.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    file: ConfigFile,
}

impl ConfigStore {
    pub fn new(file: ConfigFile) -> Self {
        Self { file }
    }
}

impl CredentialStore for ConfigStore {
    type Error = ConfigError;

    fn load(&self) -> Option<String> {
        self.file
            .get(ConfigKey::AuthToken)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not read stored credential");
                None
            })
    }

    fn save(&mut self, credential: &str) -> Result<(), ConfigError> {
        self.file
            .set(ConfigKey::AuthToken, Some(credential.to_string()))
    }

    fn clear(&mut self) -> Result<(), ConfigError> {
        self.file.set(ConfigKey::AuthToken, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_file() -> (TempDir, ConfigFile) {
        let dir = tempfile::tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join("studio").join("config.toml"));
        (dir, file)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, file) = temp_file();
        assert_eq!(file.load().unwrap(), Config::default());
        assert_eq!(file.get(ConfigKey::Server).unwrap(), None);
    }

    #[test]
    fn test_set_get_value_from_string() {
        let (_dir, file) = temp_file();

        file.set_get_value_from_string("Server", Some("https://studio.example.com".to_string()), true)
            .unwrap();

        assert_eq!(
            file.set_get_value_from_string("server", None, true).unwrap(),
            Some("https://studio.example.com".to_string())
        );
        assert!(matches!(
            file.set_get_value_from_string("colour", None, true),
            Err(ConfigError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_key_names() {
        let keys: Vec<String> = ConfigKey::iter().map(|key| key.to_string()).collect();
        assert_eq!(keys, ["server", "authtoken"]);
    }

    #[test]
    fn test_store_round_trip_keeps_server() {
        let (_dir, file) = temp_file();
        file.set(ConfigKey::Server, Some("https://studio.example.com".to_string()))
            .unwrap();

        let mut store = ConfigStore::new(file.clone());
        assert_eq!(store.load(), None);

        store.save("tok-1").unwrap();
        assert_eq!(store.load(), Some("tok-1".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(
            file.get(ConfigKey::Server).unwrap().as_deref(),
            Some("https://studio.example.com")
        );
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (_dir, file) = temp_file();
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "server = [unterminated\n").unwrap();

        let err = file.set_get_value_from_string("server", None, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));

        let mut store = ConfigStore::new(file);
        assert!(matches!(store.save("tok-1"), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let (_dir, file) = temp_file();
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "authtoken = \"\"\n").unwrap();

        assert_eq!(ConfigStore::new(file).load(), None);
    }
}
