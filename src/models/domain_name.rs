use crate::constants::{MAX_DOMAIN_LABEL_LENGTH, MAX_DOMAIN_NAME_LENGTH};
use crate::types::MatchTarget;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A domain name as an ordered sequence of labels, most-specific first.
///
/// The root label is implicit: `sub.example.com` holds `["sub", "example", "com"]`, and
/// `com`'s parent is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    /// Parses dotted domain text. A single trailing dot (the explicit root) is accepted.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if relative.is_empty() {
            return Err(Error::InvalidDomainName(format!(
                "'{}' has no labels",
                text
            )));
        }

        if relative.chars().count() > MAX_DOMAIN_NAME_LENGTH {
            return Err(Error::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                text, MAX_DOMAIN_NAME_LENGTH
            )));
        }

        let mut labels = Vec::new();
        for label in relative.split('.') {
            if label.is_empty() {
                return Err(Error::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    text
                )));
            }
            if label.chars().count() > MAX_DOMAIN_LABEL_LENGTH {
                return Err(Error::InvalidDomainName(format!(
                    "label '{}' is longer than {} characters",
                    label, MAX_DOMAIN_LABEL_LENGTH
                )));
            }
            labels.push(label.to_string());
        }

        Ok(Self { labels })
    }

    /// Labels from most-specific to the label directly under the root.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The full name with dots replaced by spaces, e.g. `www acmecorp com`.
    pub fn to_spaced_text(&self) -> String {
        self.labels.join(" ")
    }

    /// Derives the strings a company name is compared against.
    ///
    /// The first target is always the full spaced name. After it come the individual labels,
    /// most-specific first, skipping the label directly under the root and any label listed in
    /// `ignored_labels` (case-insensitive).
    pub fn match_targets(&self, ignored_labels: &[&str]) -> Vec<MatchTarget> {
        let mut targets = vec![self.to_spaced_text()];

        // The last label's parent is the root; it never names the organization
        let organizational_labels = &self.labels[..self.labels.len() - 1];

        targets.extend(
            organizational_labels
                .iter()
                .filter(|label| {
                    !ignored_labels
                        .iter()
                        .any(|ignored| label.eq_ignore_ascii_case(ignored))
                })
                .cloned(),
        );

        targets
    }
}

impl FromStr for DomainName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainName::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("."))
    }
}
