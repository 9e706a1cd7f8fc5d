use crate::types::{CompanyName, MatchDistance, MatchTarget};
use crate::utils::{normalize_company_name, ratcliff_obershelp_similarity};
use crate::{CompanyNameMatcherConfig, DomainName};
use log::debug;
use std::cmp::Ordering;

/// Guesses which company a domain name belongs to.
///
/// Each candidate company name is normalized and compared against every target derived from
/// the domain. A candidate keeps its best (lowest) distance over all targets, and the overall
/// closest candidate is accepted only when it beats the configured distance threshold.
#[derive(Debug, Clone, Copy)]
pub struct CompanyNameMatcher<'a> {
    config: &'a CompanyNameMatcherConfig,
}

impl<'a> CompanyNameMatcher<'a> {
    pub fn new(config: &'a CompanyNameMatcherConfig) -> Self {
        Self { config }
    }

    /// Returns the closest candidate, or `None` when there are no candidates or the closest
    /// one is not close enough.
    ///
    /// Ties on distance go to the lexicographically smallest name.
    pub fn guess_company<'c, I>(&self, domain_name: &DomainName, candidates: I) -> Option<CompanyName>
    where
        I: IntoIterator<Item = &'c CompanyName>,
    {
        let targets = domain_name.match_targets(self.config.ignored_labels);

        let (best_candidate, best_distance) = candidates
            .into_iter()
            .map(|candidate| (candidate, Self::best_distance(&targets, candidate)))
            .min_by(|a, b| compare_distances(a, b))?;

        if best_distance < self.config.max_match_distance {
            debug!(
                "Best candidate for domain {} is {:?} at {:.4}",
                domain_name, best_candidate, best_distance
            );
            Some(best_candidate.clone())
        } else {
            debug!(
                "Rejected best candidate {:?} for domain {} at {:.4} (threshold {:.4})",
                best_candidate, domain_name, best_distance, self.config.max_match_distance
            );
            None
        }
    }

    /// The lowest distance between any target and the normalized candidate.
    fn best_distance(targets: &[MatchTarget], candidate: &str) -> MatchDistance {
        let normalized_candidate = normalize_company_name(candidate);

        targets
            .iter()
            .map(|target| match_distance(target, &normalized_candidate))
            .fold(MatchDistance::INFINITY, MatchDistance::min)
    }
}

/// `1 - similarity` between a lower-cased target and an already normalized company name.
pub fn match_distance(target: &str, normalized_company_name: &str) -> MatchDistance {
    1.0 - ratcliff_obershelp_similarity(&target.to_lowercase(), normalized_company_name)
}

/// Orders by distance (ascending), then by company name (ascending).
fn compare_distances(a: &(&CompanyName, MatchDistance), b: &(&CompanyName, MatchDistance)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0))
}
