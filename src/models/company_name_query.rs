use crate::types::{CompanyName, MatchPriority};
use crate::utils::sort_ranked_company_names;

/// Free-text search over company names, by case-insensitive substring relevance.
///
/// - Priority `0`: the name contains the whole query.
/// - Priority `1`: the name contains at least one whitespace-separated query token.
/// - Otherwise the name is not a result.
///
/// Without a query, every name is a priority `0` result.
#[derive(Debug, Clone)]
pub struct CompanyNameQuery {
    search_text: Option<String>,
    search_tokens: Vec<String>,
}

impl CompanyNameQuery {
    pub fn new(search_text: Option<&str>) -> Self {
        let search_text = search_text.map(str::to_lowercase);
        let search_tokens = search_text
            .as_deref()
            .map(|text| text.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            search_text,
            search_tokens,
        }
    }

    /// The match priority for a company name, with `0` being the best match.
    pub fn priority(&self, company_name: &str) -> Option<MatchPriority> {
        let search_text = match &self.search_text {
            Some(search_text) => search_text,
            None => return Some(0),
        };

        let subject = company_name.to_lowercase();

        if subject.contains(search_text.as_str()) {
            return Some(0);
        }

        if self
            .search_tokens
            .iter()
            .any(|token| subject.contains(token.as_str()))
        {
            return Some(1);
        }

        None
    }

    /// Matching candidates ordered by priority, then by name.
    pub fn rank<'c, I>(&self, candidates: I) -> Vec<CompanyName>
    where
        I: IntoIterator<Item = &'c CompanyName>,
    {
        let ranked_names: Vec<(MatchPriority, CompanyName)> = candidates
            .into_iter()
            .filter_map(|candidate| {
                self.priority(candidate)
                    .map(|priority| (priority, candidate.clone()))
            })
            .collect();

        sort_ranked_company_names(ranked_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompanyNameSet;

    fn candidates(names: &[&str]) -> CompanyNameSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let query = CompanyNameQuery::new(Some("acme"));
        assert_eq!(
            query.rank(&candidates(&["Acme Corp", "Beta Inc"])),
            vec!["Acme Corp"]
        );
    }

    #[test]
    fn test_whole_phrase_ranks_before_single_tokens() {
        let query = CompanyNameQuery::new(Some("Valley Farms"));
        assert_eq!(
            query.rank(&candidates(&["Valley Produce", "Green Valley Farms", "Hill Farms"])),
            vec!["Green Valley Farms", "Hill Farms", "Valley Produce"]
        );
    }

    #[test]
    fn test_no_query_returns_everything_sorted() {
        let query = CompanyNameQuery::new(None);
        assert_eq!(
            query.rank(&vec!["Zeta".to_string(), "Alpha".to_string()]),
            vec!["Alpha", "Zeta"]
        );
    }

    #[test]
    fn test_priorities() {
        let query = CompanyNameQuery::new(Some("green energy"));
        assert_eq!(query.priority("Green Energy Partners"), Some(0));
        assert_eq!(query.priority("Evergreen Holdings"), Some(1));
        assert_eq!(query.priority("Blue Water"), None);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        // An empty string is a substring of every name
        let query = CompanyNameQuery::new(Some(""));
        assert_eq!(query.priority("Anything"), Some(0));
    }
}
