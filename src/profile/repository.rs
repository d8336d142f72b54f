//! Profile persistence boundary.
//!
//! This module provides the [`ProfileRepository`] trait the application layer
//! injects, and its YAML-file implementation.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::state::ProfileState;

/// The storage boundary for profiles.
///
/// The calculation engine is pure; everything it consumes arrives through an
/// implementation of this trait. Implementations are free to store profiles
/// however they like (file, database, remote service).
pub trait ProfileRepository {
    /// Loads the full profile.
    fn load_profile(&self) -> EngineResult<ProfileState>;

    /// Persists the full profile, replacing what was stored.
    fn save_profile(&self, profile: &ProfileState) -> EngineResult<()>;
}

/// A [`ProfileRepository`] backed by a single YAML file.
///
/// # Example
///
/// ```no_run
/// use roster_engine::profile::{ProfileRepository, YamlProfileRepository};
///
/// let repo = YamlProfileRepository::new("./config/profile.yaml");
/// let profile = repo.load_profile()?;
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct YamlProfileRepository {
    path: PathBuf,
}

impl YamlProfileRepository {
    /// Creates a repository reading and writing the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path this repository uses.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileRepository for YamlProfileRepository {
    fn load_profile(&self) -> EngineResult<ProfileState> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|_| EngineError::ProfileNotFound {
            path: path_str.clone(),
        })?;

        let profile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ProfileParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path_str, "loaded profile");
        Ok(profile)
    }

    fn save_profile(&self, profile: &ProfileState) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        let content =
            serde_yaml::to_string(profile).map_err(|e| EngineError::ProfileWriteError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| EngineError::ProfileWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        info!(path = %path_str, "saved profile");
        Ok(())
    }
}
