//! Query operations over the normalized eclipse sequence.
//!
//! The synchronous functions are pure over a record slice. The `fetch_*`
//! variants obtain the slice from an [`EclipseRepository`] first.

use chrono::NaiveDate;

use crate::dataset::{DatasetResult, EclipseRepository};
use crate::models::EclipseRecord;

/// Every record, in load order.
pub fn list_all(records: &[EclipseRecord]) -> Vec<EclipseRecord> {
    records.to_vec()
}

/// Records whose normalized type contains `type_filter`, case-insensitively.
///
/// The filter is not checked against the accepted eclipse families; callers
/// validate it first. No match yields an empty vector.
pub fn list_by_type(records: &[EclipseRecord], type_filter: &str) -> Vec<EclipseRecord> {
    records
        .iter()
        .filter(|record| record.matches_type(type_filter))
        .cloned()
        .collect()
}

/// First record in load order whose date is on or after `now`.
///
/// The scan does not sort by date: with an unsorted source this is the first
/// qualifying row, not necessarily the chronologically nearest one.
pub fn next_upcoming(records: &[EclipseRecord], now: NaiveDate) -> Option<EclipseRecord> {
    records.iter().find(|record| record.date >= now).cloned()
}

/// [`list_all`] over the repository's current records.
pub async fn fetch_all(repo: &dyn EclipseRepository) -> DatasetResult<Vec<EclipseRecord>> {
    let records = repo.eclipses().await?;
    Ok(list_all(&records))
}

/// [`list_by_type`] over the repository's current records.
pub async fn fetch_by_type(
    repo: &dyn EclipseRepository,
    type_filter: &str,
) -> DatasetResult<Vec<EclipseRecord>> {
    let records = repo.eclipses().await?;
    Ok(list_by_type(&records, type_filter))
}

/// [`next_upcoming`] over the repository's current records.
pub async fn fetch_next_upcoming(
    repo: &dyn EclipseRepository,
    now: NaiveDate,
) -> DatasetResult<Option<EclipseRecord>> {
    let records = repo.eclipses().await?;
    Ok(next_upcoming(&records, now))
}
