use crate::models::{DataProvider, DataSource, SourceRecord};
use crate::types::CompanyNameSet;
use crate::{Error, Score};
use flate2::read::GzDecoder;
use log::{info, warn};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestionReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Rows ingested from one data source. `(date, name)` is unique.
#[derive(Debug, Default)]
struct SourceTable {
    records: Vec<SourceRecord>,
    unique_keys: HashSet<(String, String)>,
}

impl SourceTable {
    /// Returns `false` if a row with the same unique key is already present.
    fn insert(&mut self, record: SourceRecord) -> bool {
        let (date, name) = record.unique_key();
        if !self.unique_keys.insert((date.to_string(), name.to_string())) {
            return false;
        }

        self.records.push(record);
        true
    }
}

/// In-memory store of ingested data source files, one table per source.
///
/// This is the [`DataProvider`] used by the CLI and the integration tests.
#[derive(Debug, Default)]
pub struct CompanyDataStore {
    tables: BTreeMap<DataSource, SourceTable>,
}

impl CompanyDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table for `source` unless it is already there.
    pub fn ensure_table(&mut self, source: DataSource) -> TableStatus {
        if self.tables.contains_key(&source) {
            TableStatus::AlreadyExists
        } else {
            self.tables.insert(source, SourceTable::default());
            TableStatus::Created
        }
    }

    /// Reads a data file from `reader` into the table for `source`.
    ///
    /// Rows that fail to parse, and rows repeating an existing `(date, name)` pair, are
    /// skipped and counted as failed.
    pub fn ingest<R: Read>(
        &mut self,
        source: DataSource,
        reader: R,
    ) -> Result<IngestionReport, Error> {
        self.ensure_table(source);

        let rows = source.read_records(reader)?;
        let table = self.tables.entry(source).or_default();

        let mut report = IngestionReport::default();
        for row in rows {
            match row {
                Ok(record) => {
                    let description = format!("{:?}", record.unique_key());
                    if table.insert(record) {
                        report.succeeded += 1;
                    } else {
                        warn!("Unable to insert duplicate row: {}", description);
                        report.failed += 1;
                    }
                }
                Err(err) => {
                    warn!("Unable to insert row: {}", err);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Ingestion of {} complete! Rows succeeded: {}, Rows failed: {}",
            source, report.succeeded, report.failed
        );

        Ok(report)
    }

    /// Ingests a data file from disk. Files ending in `.gz` are decompressed on the fly.
    pub fn ingest_file<P: AsRef<Path>>(
        &mut self,
        source: DataSource,
        path: P,
    ) -> Result<IngestionReport, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::IoError(std::io::Error::new(
                err.kind(),
                format!("Unable to open file {}: {}", path.display(), err),
            ))
        })?;
        let reader = BufReader::new(file);

        if path.extension().map_or(false, |extension| extension == "gz") {
            self.ingest(source, GzDecoder::new(reader))
        } else {
            self.ingest(source, reader)
        }
    }

    /// Number of rows stored for `source`.
    pub fn row_count(&self, source: DataSource) -> usize {
        self.tables
            .get(&source)
            .map_or(0, |table| table.records.len())
    }

    fn records(&self) -> impl Iterator<Item = &SourceRecord> {
        self.tables.values().flat_map(|table| table.records.iter())
    }
}

impl DataProvider for CompanyDataStore {
    fn list_distinct_company_names(&self) -> Result<CompanyNameSet, Error> {
        Ok(self
            .records()
            .map(|record| record.company_name().to_string())
            .collect())
    }

    fn fetch_raw_scores(&self, company_name: &str) -> Result<Vec<Score>, Error> {
        Ok(self
            .records()
            .filter(|record| record.company_name() == company_name)
            .flat_map(|record| record.score_components())
            .collect())
    }
}
