use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A main score was requested over zero components.
    EmptyInput,
    /// A score component declares the same `min` and `max`, so it cannot be rescaled.
    DegenerateRange {
        label: String,
        min: f64,
        max: f64,
    },
    InvalidDomainName(String),
    UnknownDataSource(String),
    ParserError(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Empty Input Error: no score components to aggregate"),
            Error::DegenerateRange { label, min, max } => write!(
                f,
                "Degenerate Range Error: score '{}' has min ({}) equal to max ({})",
                label, min, max
            ),
            Error::InvalidDomainName(msg) => write!(f, "Invalid Domain Name: {}", msg),
            Error::UnknownDataSource(identifier) => {
                write!(f, "Unknown Data Source: {}", identifier)
            }
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
