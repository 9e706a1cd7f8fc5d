use crate::models::SRayEnterpriseRecord;
use crate::types::DataSourceIdentifier;
use crate::{Error, Score};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// The data providers a data file can come from.
///
/// Each variant knows how to read its own file layout into [`SourceRecord`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataSource {
    SRayEnterprise,
}

impl DataSource {
    pub const ALL: &'static [DataSource] = &[DataSource::SRayEnterprise];

    pub fn identifier(self) -> &'static DataSourceIdentifier {
        match self {
            DataSource::SRayEnterprise => "s-ray",
        }
    }

    /// Parses every row of a data file. Rows that cannot be parsed are returned as errors so
    /// the caller can count them and keep going.
    pub fn read_records<R: Read>(
        self,
        reader: R,
    ) -> Result<Vec<Result<SourceRecord, Error>>, Error> {
        match self {
            DataSource::SRayEnterprise => Ok(SRayEnterpriseRecord::read_all(reader)?
                .into_iter()
                .map(|record| record.map(SourceRecord::SRayEnterprise))
                .collect()),
        }
    }

    fn identifiers() -> String {
        Self::ALL
            .iter()
            .map(|source| source.identifier())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for DataSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|source| source.identifier() == s)
            .ok_or_else(|| {
                Error::UnknownDataSource(format!(
                    "'{}' (source must be one of: {})",
                    s,
                    Self::identifiers()
                ))
            })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// One parsed row from any data source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    SRayEnterprise(SRayEnterpriseRecord),
}

impl SourceRecord {
    pub fn company_name(&self) -> &str {
        match self {
            SourceRecord::SRayEnterprise(record) => &record.name,
        }
    }

    /// The `(date, name)` pair that is unique within a source's table.
    pub fn unique_key(&self) -> (&str, &str) {
        match self {
            SourceRecord::SRayEnterprise(record) => (&record.date, &record.name),
        }
    }

    pub fn score_components(&self) -> Vec<Score> {
        match self {
            SourceRecord::SRayEnterprise(record) => record.score_components(),
        }
    }
}
