use crate::types::CompanyName;
use crate::{DataProvider, Error, Score, ScoreAggregator};
use std::fmt;

/// A company together with its score components and the main score computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyScoreSummary {
    pub company: CompanyName,
    /// `None` when the data provider has no score components for the company.
    pub main_score: Option<Score>,
    pub score_components: Vec<Score>,
}

impl CompanyScoreSummary {
    /// Fetches the company's components from `provider` and aggregates them.
    ///
    /// A company without components gets no main score instead of an aggregation error.
    pub fn for_company<P>(provider: &P, company: CompanyName) -> Result<Self, Error>
    where
        P: DataProvider + ?Sized,
    {
        let score_components = provider.fetch_raw_scores(&company)?;

        let main_score = if score_components.is_empty() {
            None
        } else {
            Some(ScoreAggregator::aggregate(&score_components)?)
        };

        Ok(Self {
            company,
            main_score,
            score_components,
        })
    }
}

impl fmt::Display for CompanyScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.company)?;
        match &self.main_score {
            Some(main_score) => writeln!(f, "  {}", main_score)?,
            None => writeln!(f, "  No score data available")?,
        }
        for component in &self.score_components {
            writeln!(f, "    {}", component)?;
        }
        Ok(())
    }
}
