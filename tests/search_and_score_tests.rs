use greenscreen::{
    aggregate_scores, normalize_company_name, search_company_names, CompanyNameSet, Error, Score,
    ScoreSource,
};
use std::borrow::Cow;

#[cfg(test)]
mod search_tests {
    use super::*;

    fn candidates(names: &[&str]) -> CompanyNameSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_single_word_query() {
        assert_eq!(
            search_company_names(&candidates(&["Acme Corp", "Beta Inc"]), Some("acme")),
            vec!["Acme Corp"]
        );
    }

    #[test]
    fn test_phrase_query_falls_back_to_tokens() {
        assert_eq!(
            search_company_names(
                &candidates(&["Valley Produce", "Green Valley Farms"]),
                Some("valley farms")
            ),
            vec!["Green Valley Farms", "Valley Produce"]
        );

        // Neither name holds the whole phrase, so both land in priority 1
        assert_eq!(
            search_company_names(
                &candidates(&["Sunny Farms", "Valley Produce"]),
                Some("valley farms")
            ),
            vec!["Sunny Farms", "Valley Produce"]
        );
    }

    #[test]
    fn test_absent_query_returns_all_names() {
        let names = candidates(&["Gamma", "Alpha", "Beta"]);
        assert_eq!(
            search_company_names(&names, None),
            vec!["Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_sorts_by_raw_name_within_priority() {
        // Upper-case letters sort before lower-case ones in the raw name
        assert_eq!(
            search_company_names(&candidates(&["acme labs", "Acme Corp", "ACME"]), Some("acme")),
            vec!["ACME", "Acme Corp", "acme labs"]
        );
    }

    #[test]
    fn test_search_does_not_normalize_names() {
        // "Co" would be dropped by normalization, but search works on the raw name
        assert_eq!(
            search_company_names(&candidates(&["Other Co"]), Some("co")),
            vec!["Other Co"]
        );
        assert_eq!(normalize_company_name("Other Co"), "other");
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    fn component(value: f64, min: f64, max: f64) -> Score {
        Score::new(
            value,
            min,
            max,
            "Component",
            "A test component",
            ScoreSource {
                identity: Cow::Borrowed("Test Provider"),
                description: Cow::Borrowed("Provides test data"),
            },
        )
    }

    #[test]
    fn test_aggregate_mixed_ranges() {
        let main_score =
            aggregate_scores(&[component(50.0, 0.0, 100.0), component(0.0, 0.0, 50.0)]).unwrap();

        assert_eq!(main_score.value, 25.0);
        assert_eq!((main_score.min, main_score.max), (0.0, 100.0));
        assert_eq!(main_score.label, "Main Score");
        assert_ne!(main_score.source.identity, "Test Provider");
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(matches!(aggregate_scores(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_aggregate_degenerate_range() {
        assert!(matches!(
            aggregate_scores(&[component(1.0, 5.0, 5.0)]),
            Err(Error::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_aggregate_single_short_list() {
        let main_score = aggregate_scores(&[component(7.5, 0.0, 10.0)]).unwrap();
        assert_eq!(main_score.value, 75.0);
    }
}
