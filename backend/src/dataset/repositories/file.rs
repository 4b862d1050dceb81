use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::dataset::error::{DatasetError, DatasetResult};
use crate::dataset::factory::LoadStrategy;
use crate::dataset::repository::{DatasetSummary, EclipseRepository};
use crate::models::EclipseRecord;
use crate::parsing::{load_eclipses, LoadReport};

/// Dataset re-read from disk on every call, so edits to the file show up
/// without a restart.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn reload(&self) -> DatasetResult<LoadReport> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || load_eclipses(&path))
            .await
            .map_err(|e| DatasetError::internal(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl EclipseRepository for FileRepository {
    async fn eclipses(&self) -> DatasetResult<Arc<[EclipseRecord]>> {
        Ok(self.reload().await?.records.into())
    }

    async fn summary(&self) -> DatasetResult<DatasetSummary> {
        let report = self.reload().await?;
        Ok(DatasetSummary::from(&report))
    }

    fn strategy(&self) -> LoadStrategy {
        LoadStrategy::PerRequest
    }

    fn source_path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_repository_sees_file_changes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "date;type;regions;duration_sec\n2025-03-14;Total;A;60\n").unwrap();
        file.flush().unwrap();

        let repo = FileRepository::new(file.path());
        assert_eq!(repo.eclipses().await.unwrap().len(), 1);

        writeln!(file, "2025-09-07;Partial;B;120").unwrap();
        file.flush().unwrap();
        let records = repo.eclipses().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].eclipse_type, "partial");
        assert_eq!(repo.strategy(), LoadStrategy::PerRequest);
    }

    #[tokio::test]
    async fn test_file_repository_summary_from_one_load() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "date;type;regions;duration_sec\nbad;Total;A;60\n2025-03-14;Total;B;60\n").unwrap();
        file.flush().unwrap();

        let repo = FileRepository::new(file.path());
        let summary = repo.summary().await.unwrap();
        assert_eq!(summary, DatasetSummary { records: 1, dropped_rows: 1 });
    }

    #[tokio::test]
    async fn test_file_repository_missing_file() {
        let repo = FileRepository::new("/nonexistent/eclipses.csv");
        let err = repo.eclipses().await.unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
