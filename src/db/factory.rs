//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::SqliteRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use super::SqliteConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// SQLite + Diesel implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("sqlite", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to SQLite if a database URL is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() {
            Self::Sqlite
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// This factory provides a centralized way to create repository instances
/// with proper initialization and configuration.
///
/// # Example
/// ```ignore
/// use saillog_rust::db::{RepositoryFactory, RepositoryType, SqliteConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a local repository
///     let local_repo = RepositoryFactory::create_local();
///
///     // Create a SQLite repository
///     let config = SqliteConfig::from_env()?;
///     let _sqlite_repo = RepositoryFactory::create(RepositoryType::Sqlite, Some(&config))?;
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `sqlite_config` - Optional database configuration (required for SQLite)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn FullRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        sqlite_config: Option<&SqliteConfig>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let config = sqlite_config.ok_or_else(|| {
                        RepositoryError::configuration(
                            "SQLite repository requires SqliteConfig",
                        )
                    })?;
                    let repo = Self::create_sqlite(config)?;
                    Ok(repo as Arc<dyn FullRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    let _ = sqlite_config;
                    Err(RepositoryError::configuration(
                        "SQLite repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a SQLite repository.
    ///
    /// # Arguments
    /// * `config` - SQLite configuration
    ///
    /// # Returns
    /// * `Ok(Arc<SqliteRepository>)` - SQLite repository instance
    /// * `Err(RepositoryError)` - If initialization fails
    #[cfg(feature = "sqlite-repo")]
    pub fn create_sqlite(config: &SqliteConfig) -> RepositoryResult<Arc<SqliteRepository>> {
        let repo = SqliteRepository::new(config.clone())?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    ///
    /// # Returns
    /// Boxed local repository instance
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(path)?;
        let repo_type = config
            .repository_type()
            .map_err(RepositoryError::configuration)?;
        let sqlite_config = config.to_sqlite_config()?;
        Self::create(repo_type, sqlite_config.as_ref())
    }

    /// Create a repository from environment configuration.
    ///
    /// Uses `REPOSITORY_TYPE` / `DATABASE_URL` to select and configure the
    /// backend.
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Local => Ok(Self::create_local()),
            RepositoryType::Sqlite => {
                #[cfg(feature = "sqlite-repo")]
                {
                    let config = SqliteConfig::from_env()
                        .map_err(RepositoryError::configuration)?;
                    let repo = Self::create_sqlite(&config)?;
                    Ok(repo as Arc<dyn FullRepository>)
                }
                #[cfg(not(feature = "sqlite-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "SQLite repository feature not enabled",
                    ))
                }
            }
        }
    }
}
