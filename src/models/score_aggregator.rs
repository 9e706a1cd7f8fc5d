use crate::constants::{
    MAIN_SCORE_DESCRIPTION, MAIN_SCORE_LABEL, MAIN_SCORE_MAX, MAIN_SCORE_MIN, MAIN_SCORE_SOURCE,
};
use crate::{Error, Score};
use log::warn;

/// Summarizes score components into the main score.
///
/// Every component is rescaled to `[0, 100]` from its own range, and the main score is the
/// arithmetic mean of the rescaled values.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Fails with [`Error::EmptyInput`] when there are no components, and with
    /// [`Error::DegenerateRange`] when any component has `min == max`.
    pub fn aggregate(components: &[Score]) -> Result<Score, Error> {
        if components.is_empty() {
            warn!("Cannot calculate a main score without components");
            return Err(Error::EmptyInput);
        }

        let mut scaled_total = 0.0;
        for component in components {
            if component.has_degenerate_range() {
                warn!(
                    "Score '{}' from '{}' has a degenerate range ({} - {})",
                    component.label, component.source.identity, component.min, component.max
                );
                return Err(Error::DegenerateRange {
                    label: component.label.to_string(),
                    min: component.min,
                    max: component.max,
                });
            }

            scaled_total += component.scaled_to_percent();
        }

        Ok(Score::new(
            scaled_total / components.len() as f64,
            MAIN_SCORE_MIN,
            MAIN_SCORE_MAX,
            MAIN_SCORE_LABEL,
            MAIN_SCORE_DESCRIPTION,
            MAIN_SCORE_SOURCE,
        ))
    }
}
