use std::collections::BTreeSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the name of a company as an owned `String`. This is the unique identifier of a
/// company as known to the data provider.
pub type CompanyName = String;

/// The distinct company names known to a data provider, in lexicographical order.
pub type CompanyNameSet = BTreeSet<CompanyName>;

/// A single comparison string derived from a domain name.
pub type MatchTarget = String;

/// `1 - similarity` between a match target and a normalized company name, in `[0, 1]`.
///
/// Lower is better; `0.0` means identical.
pub type MatchDistance = f64;

/// Search relevance bucket of a company name. `0` is the best match.
pub type MatchPriority = u8;

/// Identifier used to select a data source on the command line (e.g. `s-ray`).
pub type DataSourceIdentifier = str;
