//! Repository factory.
//!
//! Selects how the dataset is loaded and builds the matching repository.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use super::error::DatasetResult;
use super::repositories::{FileRepository, SnapshotRepository};
use super::repository::EclipseRepository;
use crate::parsing::load_eclipses;

/// When the source file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadStrategy {
    /// Read once at process start and share the result.
    #[default]
    Startup,
    /// Re-read on every query.
    PerRequest,
}

impl LoadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStrategy::Startup => "startup",
            LoadStrategy::PerRequest => "per-request",
        }
    }
}

impl fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadStrategy {
    type Err = String;

    /// Parse a load strategy.
    ///
    /// # Arguments
    /// * `s` - `"startup"` (or `"once"`) / `"per-request"` (or `"per_request"`, `"request"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "startup" | "once" => Ok(Self::Startup),
            "per-request" | "per_request" | "request" => Ok(Self::PerRequest),
            _ => Err(format!("Unknown load strategy: {}", s)),
        }
    }
}

/// Factory for creating repository instances.
///
/// # Example
/// ```no_run
/// use eclipse_api::dataset::{EclipseRepository, LoadStrategy, RepositoryFactory};
///
/// let repo = RepositoryFactory::create(LoadStrategy::Startup, "eclipse_data.csv")
///     .expect("dataset must be readable");
/// assert_eq!(repo.strategy(), LoadStrategy::Startup);
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository for `strategy` over the file at `path`.
    ///
    /// The file is read once in both cases: an unreadable source must stop
    /// the service from starting even when later reads happen per request.
    pub fn create(
        strategy: LoadStrategy,
        path: impl Into<PathBuf>,
    ) -> DatasetResult<Arc<dyn EclipseRepository>> {
        let path = path.into();
        info!(
            "Creating eclipse repository (strategy={}, path={})",
            strategy,
            path.display()
        );

        match strategy {
            LoadStrategy::Startup => Ok(Self::create_snapshot(path)?),
            LoadStrategy::PerRequest => {
                load_eclipses(&path)?;
                Ok(Self::create_file(path))
            }
        }
    }

    /// Create a load-once repository.
    pub fn create_snapshot(path: impl Into<PathBuf>) -> DatasetResult<Arc<dyn EclipseRepository>> {
        Ok(Arc::new(SnapshotRepository::load(path)?))
    }

    /// Create a load-per-request repository without touching the file.
    pub fn create_file(path: impl Into<PathBuf>) -> Arc<dyn EclipseRepository> {
        Arc::new(FileRepository::new(path))
    }
}
