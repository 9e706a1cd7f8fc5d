use crate::types::CompanyNameSet;
use crate::{Error, Score};

/// Read-only access to the companies and score components known to a data store.
///
/// Implementations are passed explicitly into the query functions; matching and scoring
/// never construct one themselves.
pub trait DataProvider {
    /// Every distinct company name.
    fn list_distinct_company_names(&self) -> Result<CompanyNameSet, Error>;

    /// Score components for a company, with missing metrics already left out.
    fn fetch_raw_scores(&self, company_name: &str) -> Result<Vec<Score>, Error>;
}
