pub mod constants;

use csv::Reader;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::Path;

/// A domain name and the company it is expected to resolve to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainExpectation {
    pub domain: String,
    pub expected_company: Option<String>,
}

/// Utility to load domain expectations from a CSV file for testing and benchmarking.
///
/// An empty `expected_company` cell means the domain should not match any company.
pub fn load_domain_expectations_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<DomainExpectation>, Box<dyn Error>> {
    let mut expectations = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let domain = record.get(0).unwrap_or_default().to_string();
            let expected_company = record
                .get(1)
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string());
            expectations.push(DomainExpectation {
                domain,
                expected_company,
            });
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(expectations)
}

/// Utility to load the distinct `name` column of a data file, in file order.
pub fn load_company_names_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut company_names: Vec<String> = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(file_path)?;

    let name_index = reader
        .headers()?
        .iter()
        .position(|header| header == "name")
        .ok_or("Missing 'name' column")?;

    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(name_index).filter(|name| !name.is_empty()) {
            if !company_names.iter().any(|known| known == name) {
                company_names.push(name.to_string());
            }
        }
    }

    Ok(company_names)
}

/// Writes a gzip-compressed copy of `source` to `destination`.
pub fn write_gzip_copy<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<(), Box<dyn Error>> {
    let mut input_file = File::open(source)?;
    let output_file = File::create(destination)?;

    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}

/// Compares guesses against expectations and returns a description of every mismatch.
pub fn find_domain_mismatches<F>(expectations: &[DomainExpectation], mut guess: F) -> Vec<String>
where
    F: FnMut(&str) -> Option<String>,
{
    expectations
        .iter()
        .filter_map(|expectation| {
            let actual = guess(&expectation.domain);
            if actual == expectation.expected_company {
                None
            } else {
                Some(format!(
                    "{} - Expected: {:?}, but got: {:?}",
                    expectation.domain, expectation.expected_company, actual
                ))
            }
        })
        .collect()
}
