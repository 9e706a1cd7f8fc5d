mod constants;
pub use constants::{
    DATA_FILE_ENV_VAR, DATA_SOURCE_ENV_VAR, DEFAULT_COMPANY_NAME_MATCHER_CONFIG, MAIN_SCORE_LABEL,
    MAIN_SCORE_SOURCE,
};
pub mod models;
pub use models::{
    CompanyDataStore, CompanyNameMatcher, CompanyNameMatcherConfig, CompanyNameQuery,
    CompanyScoreSummary, DataProvider, DataSource, DomainName, Error, IngestionReport, Score,
    ScoreAggregator, ScoreSource, TableStatus,
};
pub mod types;
mod utils;
pub use types::{CompanyName, CompanyNameSet, MatchDistance, MatchPriority};
pub use utils::{normalize_company_name, ratcliff_obershelp_similarity, sort_ranked_company_names};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Guesses which of `candidates` owns `domain_text`, using the default matcher config.
///
/// Returns `Ok(None)` when there are no candidates or no candidate is close enough, and an
/// error only if the domain name itself is malformed.
///
/// ### Example:
/// ```rust
/// use greenscreen::{guess_company, CompanyNameSet};
///
/// let candidates: CompanyNameSet = ["Acme Corporation", "Other Co"]
///     .iter()
///     .map(|name| name.to_string())
///     .collect();
///
/// let company = guess_company("www.acmecorp.com", &candidates).unwrap();
/// assert_eq!(company.as_deref(), Some("Acme Corporation"));
/// ```
pub fn guess_company<'c, I>(domain_text: &str, candidates: I) -> Result<Option<CompanyName>, Error>
where
    I: IntoIterator<Item = &'c CompanyName>,
{
    guess_company_with_custom_config(domain_text, candidates, &DEFAULT_COMPANY_NAME_MATCHER_CONFIG)
}

pub fn guess_company_with_custom_config<'c, I>(
    domain_text: &str,
    candidates: I,
    company_name_matcher_config: &CompanyNameMatcherConfig,
) -> Result<Option<CompanyName>, Error>
where
    I: IntoIterator<Item = &'c CompanyName>,
{
    // Without candidates there is nothing to match, whatever the domain looks like
    let mut candidates = candidates.into_iter().peekable();
    if candidates.peek().is_none() {
        return Ok(None);
    }

    let domain_name = DomainName::parse(domain_text)?;
    let matcher = CompanyNameMatcher::new(company_name_matcher_config);

    Ok(matcher.guess_company(&domain_name, candidates))
}

/// Ranks `candidates` against optional free text. See [`CompanyNameQuery`].
///
/// ### Example:
/// ```rust
/// use greenscreen::search_company_names;
///
/// let candidates = vec!["Beta Inc".to_string(), "Acme Corp".to_string()];
///
/// assert_eq!(search_company_names(&candidates, Some("ACME")), vec!["Acme Corp"]);
/// assert_eq!(search_company_names(&candidates, None), vec!["Acme Corp", "Beta Inc"]);
/// ```
pub fn search_company_names<'c, I>(candidates: I, search_text: Option<&str>) -> Vec<CompanyName>
where
    I: IntoIterator<Item = &'c CompanyName>,
{
    CompanyNameQuery::new(search_text).rank(candidates)
}

/// Summarizes score components into the main score. See [`ScoreAggregator`].
pub fn aggregate_scores(components: &[Score]) -> Result<Score, Error> {
    ScoreAggregator::aggregate(components)
}

/// Resolves a domain name to a company and summarizes its scores.
///
/// Returns `Ok(None)` when the domain does not match any known company.
pub fn score_domain<P>(provider: &P, domain_text: &str) -> Result<Option<CompanyScoreSummary>, Error>
where
    P: DataProvider + ?Sized,
{
    let company_names = provider.list_distinct_company_names()?;

    match guess_company(domain_text, &company_names)? {
        Some(company_name) => Ok(Some(CompanyScoreSummary::for_company(provider, company_name)?)),
        None => Ok(None),
    }
}

/// Searches company names and summarizes the scores of every result, in ranked order.
pub fn query_companies<P>(
    provider: &P,
    search_text: Option<&str>,
) -> Result<Vec<CompanyScoreSummary>, Error>
where
    P: DataProvider + ?Sized,
{
    let company_names = provider.list_distinct_company_names()?;

    search_company_names(&company_names, search_text)
        .into_iter()
        .map(|company_name| CompanyScoreSummary::for_company(provider, company_name))
        .collect()
}
