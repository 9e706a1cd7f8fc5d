use crate::types::{CompanyName, MatchPriority};

/// Sorts ranked company names and drops their priorities.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by priority in ascending order (priority `0` first).
/// - **Secondary:** Within a priority, sorts by the raw company name in ascending
///   lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use greenscreen::sort_ranked_company_names;
///
/// let ranked = vec![
///     (1, "Valley Produce".to_string()),
///     (0, "Green Valley Farms".to_string()),
///     (1, "Sun Valley".to_string()),
/// ];
///
/// assert_eq!(
///     sort_ranked_company_names(ranked),
///     vec!["Green Valley Farms", "Sun Valley", "Valley Produce"]
/// );
/// ```
pub fn sort_ranked_company_names(
    mut ranked_names: Vec<(MatchPriority, CompanyName)>,
) -> Vec<CompanyName> {
    ranked_names.sort_by(|a, b| {
        a.0.cmp(&b.0) // Sort by priority (ascending)
            .then_with(|| a.1.cmp(&b.1)) // Secondary sort by company name (ascending)
    });

    ranked_names
        .into_iter()
        .map(|(_, company_name)| company_name)
        .collect()
}
