use crate::types::MatchDistance;

#[derive(Debug, Clone, Copy)]
pub struct CompanyNameMatcherConfig {
    /// A guess is accepted only if its distance is strictly below this value.
    pub max_match_distance: MatchDistance,
    /// Domain labels never used as match targets (compared case-insensitively).
    pub ignored_labels: &'static [&'static str],
}
