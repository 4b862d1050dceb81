use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use super::normalize::{normalize_type, parse_date, seconds_to_minutes};
use crate::dataset::error::{DatasetError, DatasetResult};
use crate::models::EclipseRecord;

/// Field delimiter of the eclipse dataset.
pub const DELIMITER: u8 = b';';

/// Candidate names of the duration column, in lookup order. Both hold seconds.
pub const DURATION_COLUMNS: [&str; 2] = ["duration_sec", "duration"];

/// Outcome of one load event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Valid records in source row order
    pub records: Vec<EclipseRecord>,
    /// Rows excluded because their date (or encoding) could not be parsed
    pub dropped_rows: usize,
}

/// Positions of the known columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    eclipse_type: usize,
    regions: usize,
    duration: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> DatasetResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require =
            |name: &str| find(name).ok_or_else(|| DatasetError::missing_column(name));

        Ok(Self {
            date: require("date")?,
            eclipse_type: require("type")?,
            regions: require("regions")?,
            duration: DURATION_COLUMNS.iter().find_map(|name| find(name)),
        })
    }

    /// Build a record from a raw row, or `None` when the date is unusable.
    fn to_record(self, row: &StringRecord) -> Option<EclipseRecord> {
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let date = parse_date(field(self.date))?;
        let duration = self
            .duration
            .and_then(|idx| seconds_to_minutes(field(idx)));

        Some(EclipseRecord::new(
            date,
            normalize_type(field(self.eclipse_type)),
            field(self.regions),
            duration,
        ))
    }
}

/// Load and normalize the eclipse dataset at `path`.
///
/// A missing or unreadable file is an error. Rows with bad dates are dropped
/// and counted in [`LoadReport::dropped_rows`].
pub fn load_eclipses(path: &Path) -> DatasetResult<LoadReport> {
    let file = File::open(path)
        .map_err(|e| DatasetError::io(path, &e).with_operation("load_eclipses"))?;

    let report = parse_eclipses(file)
        .map_err(|e| e.with_path(path).with_operation("load_eclipses"))?;

    info!(
        "Loaded {} eclipse records from {} ({} rows dropped)",
        report.records.len(),
        path.display(),
        report.dropped_rows
    );

    Ok(report)
}

/// Parse `;`-delimited eclipse rows from any reader.
///
/// Only header names are trimmed; `regions` is kept byte for byte.
pub fn parse_eclipses<R: Read>(source: R) -> DatasetResult<LoadReport> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    let mut report = LoadReport::default();

    for (i, result) in reader.records().enumerate() {
        let row_number = i + 1;
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Dropping undecodable row {}: {}", row_number, e);
                report.dropped_rows += 1;
                continue;
            }
        };

        match columns.to_record(&row) {
            Some(record) => report.records.push(record),
            None => {
                debug!(
                    "Dropping row {} with unparseable date {:?}",
                    row_number,
                    row.get(columns.date).unwrap_or("")
                );
                report.dropped_rows += 1;
            }
        }
    }

    Ok(report)
}
