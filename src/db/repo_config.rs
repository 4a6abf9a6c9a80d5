//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::db::SqliteConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub sqlite: SqliteSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// SQLite connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqliteSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> u64 {
    30
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in the current and parent directory.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to SqliteConfig if this is a SQLite configuration.
    #[cfg(feature = "sqlite-repo")]
    pub fn to_sqlite_config(&self) -> Result<Option<SqliteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Sqlite {
            return Ok(None);
        }

        if self.sqlite.database_url.is_empty() {
            return Err(RepositoryError::configuration(
                "SQLite repository requires 'sqlite.database_url' setting",
            ));
        }

        Ok(Some(SqliteConfig {
            database_url: self.sqlite.database_url.clone(),
            max_pool_size: self.sqlite.max_connections,
            connection_timeout_sec: self.sqlite.connect_timeout,
        }))
    }

    /// Convert to SqliteConfig when the feature is disabled.
    #[cfg(not(feature = "sqlite-repo"))]
    pub fn to_sqlite_config(&self) -> Result<Option<SqliteConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type == RepositoryType::Sqlite {
            return Err(RepositoryError::configuration(
                "SQLite repository feature not enabled",
            ));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
    }

    #[test]
    fn test_local_config_has_no_sqlite_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert!(config.to_sqlite_config().unwrap().is_none());
    }

    #[cfg(feature = "sqlite-repo")]
    #[test]
    fn test_parse_sqlite_config() {
        let toml = r#"
[repository]
type = "sqlite"

[sqlite]
database_url = "saillog.db"
max_connections = 20
connect_timeout = 15
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "sqlite");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Sqlite);

        let sqlite_config = config.to_sqlite_config().unwrap().unwrap();
        assert_eq!(sqlite_config.database_url, "saillog.db");
        assert_eq!(sqlite_config.max_pool_size, 20);
        assert_eq!(sqlite_config.connection_timeout_sec, 15);
    }

    #[cfg(feature = "sqlite-repo")]
    #[test]
    fn test_sqlite_requires_database_url() {
        let toml = r#"
[repository]
type = "sqlite"

[sqlite]
database_url = ""
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        let result = config.to_sqlite_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_type_is_error() {
        let toml = r#"
[repository]
type = "etch-a-sketch"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert!(config.repository_type().is_err());
    }
}
