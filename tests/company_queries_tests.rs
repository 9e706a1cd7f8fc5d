use greenscreen::{
    query_companies, score_domain, CompanyDataStore, CompanyScoreSummary, DataProvider,
    DataSource, Error, IngestionReport, Score, ScoreSource, MAIN_SCORE_LABEL, MAIN_SCORE_SOURCE,
};
use std::borrow::Cow;
use tempfile::TempDir;
use test_utils::constants::S_RAY_SAMPLE_CSV_PATH;
use test_utils::write_gzip_copy;

#[cfg(test)]
mod tests {
    use super::*;

    fn load_store() -> CompanyDataStore {
        let mut store = CompanyDataStore::new();
        store
            .ingest_file(DataSource::SRayEnterprise, &*S_RAY_SAMPLE_CSV_PATH)
            .expect("Failed to ingest sample data");
        store
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_ingest_sample_file() {
        let mut store = CompanyDataStore::new();
        let report = store
            .ingest_file(DataSource::SRayEnterprise, &*S_RAY_SAMPLE_CSV_PATH)
            .unwrap();

        // One duplicate (date, name) row, one unparseable number, one missing date
        assert_eq!(
            report,
            IngestionReport {
                succeeded: 14,
                failed: 3
            }
        );
        assert_eq!(store.list_distinct_company_names().unwrap().len(), 13);
    }

    #[test]
    fn test_ingest_gzip_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let gzip_path = temp_dir.path().join("s_ray_sample.csv.gz");
        write_gzip_copy(&*S_RAY_SAMPLE_CSV_PATH, &gzip_path).expect("Failed to write gzip copy");

        let mut store = CompanyDataStore::new();
        let report = store
            .ingest_file(DataSource::SRayEnterprise, &gzip_path)
            .unwrap();

        assert_eq!(report.succeeded, 14);
        assert_eq!(
            store.list_distinct_company_names().unwrap(),
            load_store().list_distinct_company_names().unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let mut store = CompanyDataStore::new();
        let result = store.ingest_file(DataSource::SRayEnterprise, "tests/test_data_files/missing.csv");

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_score_domain() {
        let store = load_store();

        let summary = score_domain(&store, "www.acmecorp.com")
            .unwrap()
            .expect("Expected a company for the domain");

        assert_eq!(summary.company, "Acme Corporation");

        // Human 60, Labor 40, Environment 80, then Human 70 (the zero Labor score is no data)
        let labels: Vec<_> = summary
            .score_components
            .iter()
            .map(|score| score.label.to_string())
            .collect();
        assert_eq!(labels, vec!["Human", "Labor", "Environment", "Human"]);

        let main_score = summary.main_score.expect("Expected a main score");
        assert_close(main_score.value, 62.5);
        assert_eq!(main_score.label, MAIN_SCORE_LABEL);
        assert_eq!(main_score.source, MAIN_SCORE_SOURCE);
    }

    #[test]
    fn test_score_domain_without_match() {
        let store = load_store();
        assert_eq!(score_domain(&store, "zzzz.com").unwrap(), None);
    }

    #[test]
    fn test_company_without_scores_has_no_main_score() {
        let store = load_store();

        let summary = score_domain(&store, "shop.siemens.de").unwrap().unwrap();
        assert_eq!(summary.company, "Siemens AG");
        assert!(summary.score_components.is_empty());
        assert_eq!(summary.main_score, None);
    }

    #[test]
    fn test_query_companies_ranks_and_scores() {
        let store = load_store();

        let summaries = query_companies(&store, Some("valley farms")).unwrap();
        let names: Vec<_> = summaries.iter().map(|summary| summary.company.as_str()).collect();
        assert_eq!(names, vec!["Green Valley Farms", "Valley Produce Ltd"]);

        assert_close(summaries[0].main_score.as_ref().unwrap().value, 90.0);
        assert_close(summaries[1].main_score.as_ref().unwrap().value, 50.0);
    }

    #[test]
    fn test_query_companies_without_text_lists_everything() {
        let store = load_store();

        let summaries = query_companies(&store, None).unwrap();
        assert_eq!(summaries.len(), 13);
        assert_eq!(summaries[0].company, "Acme Corporation");
        assert_eq!(summaries[12].company, "Valley Produce Ltd");
    }

    #[test]
    fn test_query_companies_without_results() {
        let store = load_store();
        assert!(query_companies(&store, Some("nonexistent")).unwrap().is_empty());
    }

    struct DegenerateProvider;

    impl DataProvider for DegenerateProvider {
        fn list_distinct_company_names(&self) -> Result<greenscreen::CompanyNameSet, Error> {
            Ok(["Broken Range Corp".to_string()].into_iter().collect())
        }

        fn fetch_raw_scores(&self, _company_name: &str) -> Result<Vec<Score>, Error> {
            Ok(vec![Score::new(
                1.0,
                5.0,
                5.0,
                "Flat",
                "A score with no range",
                ScoreSource {
                    identity: Cow::Borrowed("Test Provider"),
                    description: Cow::Borrowed("Provides malformed data"),
                },
            )])
        }
    }

    #[test]
    fn test_degenerate_range_from_provider_is_surfaced() {
        let result = query_companies(&DegenerateProvider, Some("broken"));
        assert!(matches!(result, Err(Error::DegenerateRange { .. })));

        let provider: &dyn DataProvider = &DegenerateProvider;
        let result = CompanyScoreSummary::for_company(provider, "Broken Range Corp".to_string());
        assert!(matches!(result, Err(Error::DegenerateRange { .. })));
    }
}
