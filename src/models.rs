pub mod company_data_store;
pub use company_data_store::{CompanyDataStore, IngestionReport, TableStatus};

pub mod company_name_matcher;
pub use company_name_matcher::CompanyNameMatcher;

pub mod company_name_query;
pub use company_name_query::CompanyNameQuery;

pub mod company_score_summary;
pub use company_score_summary::CompanyScoreSummary;

pub mod config;
pub use config::CompanyNameMatcherConfig;

pub mod data_provider;
pub use data_provider::DataProvider;

pub mod data_source;
pub use data_source::{DataSource, SourceRecord};

pub mod domain_name;
pub use domain_name::DomainName;

pub mod error;
pub use error::Error;

pub mod s_ray_enterprise_record;
pub use s_ray_enterprise_record::SRayEnterpriseRecord;

pub mod score;
pub use score::{Score, ScoreSource};

pub mod score_aggregator;
pub use score_aggregator::ScoreAggregator;
