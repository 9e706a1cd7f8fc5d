use crate::models::{CompanyNameMatcherConfig, ScoreSource};
use std::borrow::Cow;

pub const DEFAULT_COMPANY_NAME_MATCHER_CONFIG: CompanyNameMatcherConfig =
    CompanyNameMatcherConfig {
        max_match_distance: 0.5,
        ignored_labels: &["www"],
    };

/// Legal-entity suffixes stripped from company names when they appear as standalone tokens.
pub const LEGAL_ENTITY_SUFFIXES: &[&str] = &["plc", "ltd", "llc", "sca", "kgaa", "gmbh"];

/// Characters deleted from company names before tokenizing.
pub const COMPANY_NAME_STRIPPED_CHARS: &[char] = &['.', ',', '/'];

/// Company name tokens with this many characters or fewer are dropped as noise.
pub const MAX_NOISE_TOKEN_LENGTH: usize = 2;

pub const MAX_DOMAIN_LABEL_LENGTH: usize = 63;
pub const MAX_DOMAIN_NAME_LENGTH: usize = 255;

pub const MAIN_SCORE_MIN: f64 = 0.0;
pub const MAIN_SCORE_MAX: f64 = 100.0;
pub const MAIN_SCORE_LABEL: &str = "Main Score";
pub const MAIN_SCORE_DESCRIPTION: &str =
    "The collective knowledge of our data sources summarized into one score.";

pub const MAIN_SCORE_SOURCE: ScoreSource = ScoreSource {
    identity: Cow::Borrowed("GreenScreen, LLC"),
    description: Cow::Borrowed("Hold the companies you shop at accountable for sustainability."),
};

pub const S_RAY_ENTERPRISE_SCORE_SOURCE: ScoreSource = ScoreSource {
    identity: Cow::Borrowed("Arabesque S-Ray Enterprise ESG"),
    description: Cow::Borrowed(
        "Arabesque S-Ray is a global financial services company that focuses on advisory and \
        data solutions by combining big data and environmental, social and governance (ESG) \
        metrics to assess the performance and sustainability of publicly listed companies \
        worldwide.",
    ),
};

/// Environment variable holding the default data file for the CLI.
pub const DATA_FILE_ENV_VAR: &str = "GS_DATA_FILE";

/// Environment variable holding the default data source identifier for the CLI.
pub const DATA_SOURCE_ENV_VAR: &str = "GS_DATA_SOURCE";
