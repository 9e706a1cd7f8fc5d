use std::borrow::Cow;
use std::fmt;

/// Who produced a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSource {
    pub identity: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

/// A single metric value together with the range it was measured on.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub label: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub source: ScoreSource,
}

impl Score {
    pub fn new(
        value: f64,
        min: f64,
        max: f64,
        label: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        source: ScoreSource,
    ) -> Self {
        Self {
            value,
            min,
            max,
            label: label.into(),
            description: description.into(),
            source,
        }
    }

    /// `true` when `min == max`, so the value cannot be placed on another scale.
    pub fn has_degenerate_range(&self) -> bool {
        self.max == self.min
    }

    /// Linearly maps `value` from `[min, max]` onto `[0, 100]`.
    ///
    /// Callers must rule out a degenerate range first.
    pub fn scaled_to_percent(&self) -> f64 {
        (self.value - self.min) * 100.0 / (self.max - self.min)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} ({} - {}) [{}]",
            self.label, self.value, self.min, self.max, self.source.identity
        )
    }
}
