//! Repository trait over the loaded eclipse dataset.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::error::DatasetResult;
use super::factory::LoadStrategy;
use crate::models::EclipseRecord;
use crate::parsing::LoadReport;

/// Counts describing one load of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Valid records served
    pub records: usize,
    /// Rows excluded by the loader
    pub dropped_rows: usize,
}

impl From<&LoadReport> for DatasetSummary {
    fn from(report: &LoadReport) -> Self {
        Self {
            records: report.records.len(),
            dropped_rows: report.dropped_rows,
        }
    }
}

/// Read access to the normalized eclipse records.
///
/// Implementations differ only in *when* the source file is read; the
/// returned records are always in source row order and never mutated.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait EclipseRepository: Send + Sync {
    /// All valid records, in source order.
    async fn eclipses(&self) -> DatasetResult<Arc<[EclipseRecord]>>;

    /// Record and dropped-row counts taken from a single load.
    async fn summary(&self) -> DatasetResult<DatasetSummary>;

    /// The load strategy backing this repository.
    fn strategy(&self) -> LoadStrategy;

    /// Path of the source file.
    fn source_path(&self) -> &Path;
}
