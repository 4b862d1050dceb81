use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::dataset::error::DatasetResult;
use crate::dataset::factory::LoadStrategy;
use crate::dataset::repository::{DatasetSummary, EclipseRepository};
use crate::models::EclipseRecord;
use crate::parsing::{load_eclipses, LoadReport};

/// Dataset read exactly once; every caller shares the same records.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    path: PathBuf,
    records: Arc<[EclipseRecord]>,
    dropped_rows: usize,
}

impl SnapshotRepository {
    /// Read and normalize `path` now. Fails if the file is unreadable.
    pub fn load(path: impl Into<PathBuf>) -> DatasetResult<Self> {
        let path = path.into();
        let report = load_eclipses(&path)?;
        Ok(Self::from_report(path, report))
    }

    /// Wrap an already loaded report.
    pub fn from_report(path: impl Into<PathBuf>, report: LoadReport) -> Self {
        Self {
            path: path.into(),
            records: report.records.into(),
            dropped_rows: report.dropped_rows,
        }
    }

    /// Build a repository straight from records, without a backing file.
    pub fn from_records(records: Vec<EclipseRecord>) -> Self {
        Self::from_report(
            PathBuf::new(),
            LoadReport {
                records,
                dropped_rows: 0,
            },
        )
    }
}

#[async_trait]
impl EclipseRepository for SnapshotRepository {
    async fn eclipses(&self) -> DatasetResult<Arc<[EclipseRecord]>> {
        Ok(Arc::clone(&self.records))
    }

    async fn summary(&self) -> DatasetResult<DatasetSummary> {
        Ok(DatasetSummary {
            records: self.records.len(),
            dropped_rows: self.dropped_rows,
        })
    }

    fn strategy(&self) -> LoadStrategy {
        LoadStrategy::Startup
    }

    fn source_path(&self) -> &Path {
        &self.path
    }
}
