use crate::constants::S_RAY_ENTERPRISE_SCORE_SOURCE;
use crate::{Error, Score};
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use std::io::Read;

const HUMAN_SCORE_DESCRIPTION: &str = "Human Rights, Labour Rights, Occupational Health and \
    Safety, Employment Quality, Diversity; Product Quality and Safety, Product Access, \
    Community Relations";

const LABOR_SCORE_DESCRIPTION: &str = "Labor Rights, Occupational Health and Safety, \
    Diversity, Compensation, Training and Development, Employment Quality";

const ENVIRONMENT_SCORE_DESCRIPTION: &str = "Emissions, Waste, Environmental Stewardship, \
    Environmental Management, Resource Use, Water, Environmental Solutions";

/// Columns of an S-Ray Enterprise export, in file order.
const COLUMNS: [&str; 16] = [
    "date",
    "name",
    "ticker",
    "dom_region",
    "dom_country_iso",
    "economic_sector",
    "industry",
    "esg",
    "esg_e",
    "esg_s",
    "esg_g",
    "gc",
    "gc_hr",
    "gc_lr",
    "gc_en",
    "gc_ac",
];

/// One row of an Arabesque S-Ray Enterprise export.
///
/// Cells are trimmed; empty optional cells are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SRayEnterpriseRecord {
    pub date: String,
    pub name: String,
    pub ticker: Option<String>,
    pub dom_region: Option<String>,
    pub dom_country_iso: Option<String>,
    pub economic_sector: Option<String>,
    pub industry: Option<String>,
    pub esg: Option<f64>,
    pub esg_e: Option<f64>,
    pub esg_s: Option<f64>,
    pub esg_g: Option<f64>,
    pub gc: Option<f64>,
    pub gc_hr: Option<f64>,
    pub gc_lr: Option<f64>,
    pub gc_en: Option<f64>,
    pub gc_ac: Option<f64>,
}

impl SRayEnterpriseRecord {
    /// Reads every row of an export.
    ///
    /// Fails only if the header row is unreadable. Each row is parsed independently so one
    /// bad row does not stop the rest.
    pub fn read_all<R: Read>(reader: R) -> Result<Vec<Result<Self, Error>>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut headers = reader.headers()?.clone();

        // The export starts with a byte order mark which would otherwise end up in the
        // first column name
        if !headers.is_empty() {
            let mut fixed_headers = StringRecord::new();
            fixed_headers.push_field(COLUMNS[0]);
            for header in headers.iter().skip(1) {
                fixed_headers.push_field(header.trim());
            }
            headers = fixed_headers;
        }

        let column_indices: Vec<Option<usize>> = COLUMNS
            .iter()
            .map(|column| headers.iter().position(|header| header == *column))
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let row = match record {
                Ok(record) => {
                    if record.len() > headers.len() {
                        warn!(
                            "Row had extra data, truncating: {:?}",
                            record.iter().collect::<Vec<_>>()
                        );
                    }
                    Self::from_string_record(&record, &column_indices)
                }
                Err(err) => Err(Error::from(err)),
            };
            rows.push(row);
        }

        Ok(rows)
    }

    fn from_string_record(
        record: &StringRecord,
        column_indices: &[Option<usize>],
    ) -> Result<Self, Error> {
        let cells = RowCells {
            record,
            column_indices,
            line: record.position().map_or(0, |position| position.line()),
        };

        Ok(Self {
            date: cells.required_text(0)?,
            name: cells.required_text(1)?,
            ticker: cells.text(2),
            dom_region: cells.text(3),
            dom_country_iso: cells.text(4),
            economic_sector: cells.text(5),
            industry: cells.text(6),
            esg: cells.number(7)?,
            esg_e: cells.number(8)?,
            esg_s: cells.number(9)?,
            esg_g: cells.number(10)?,
            gc: cells.number(11)?,
            gc_hr: cells.number(12)?,
            gc_lr: cells.number(13)?,
            gc_en: cells.number(14)?,
            gc_ac: cells.number(15)?,
        })
    }

    /// The Human, Labor and Environment scores of this row.
    ///
    /// A score that is missing or exactly zero is treated as "no data" and left out.
    pub fn score_components(&self) -> Vec<Score> {
        [
            (self.gc_hr, "Human", HUMAN_SCORE_DESCRIPTION),
            (self.gc_lr, "Labor", LABOR_SCORE_DESCRIPTION),
            (self.gc_en, "Environment", ENVIRONMENT_SCORE_DESCRIPTION),
        ]
        .into_iter()
        .filter_map(|(value, label, description)| match value {
            Some(value) if value != 0.0 => Some(Score::new(
                value,
                0.0,
                100.0,
                label,
                description,
                S_RAY_ENTERPRISE_SCORE_SOURCE,
            )),
            _ => None,
        })
        .collect()
    }
}

/// Looks up the cells of one row by their position in `COLUMNS`.
struct RowCells<'r> {
    record: &'r StringRecord,
    column_indices: &'r [Option<usize>],
    line: u64,
}

impl<'r> RowCells<'r> {
    fn cell(&self, column: usize) -> &'r str {
        self.column_indices[column]
            .and_then(|index| self.record.get(index))
            .map_or("", str::trim)
    }

    fn text(&self, column: usize) -> Option<String> {
        Some(self.cell(column))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn required_text(&self, column: usize) -> Result<String, Error> {
        self.text(column).ok_or_else(|| {
            Error::ParserError(format!(
                "Line {}: missing required column '{}'",
                self.line, COLUMNS[column]
            ))
        })
    }

    fn number(&self, column: usize) -> Result<Option<f64>, Error> {
        let value = self.cell(column);
        if value.is_empty() {
            return Ok(None);
        }

        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Some(number)),
            _ => Err(Error::ParserError(format!(
                "Line {}: invalid number '{}' in column '{}'",
                self.line, value, COLUMNS[column]
            ))),
        }
    }
}
