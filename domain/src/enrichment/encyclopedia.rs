//! Typed outcome of an encyclopedia summary lookup.

use serde::{Deserialize, Serialize};

/// Result of looking up a disease in the encyclopedia.
///
/// Every lookup ends in exactly one of these; adapters never return an error
/// for the encyclopedia, they convert failures into [`TransientError`].
///
/// [`TransientError`]: EncyclopediaOutcome::TransientError
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EncyclopediaOutcome {
    /// An unambiguous page was found
    Summary(String),
    /// The title names a disambiguation page; at most [`MAX_CANDIDATES`] entries
    Ambiguous(Vec<String>),
    /// No page exists for the title
    NotFound,
    /// Network, rate-limit or decoding failure
    TransientError(String),
}

/// Maximum number of candidate titles reported for an ambiguous lookup.
pub const MAX_CANDIDATES: usize = 3;

impl EncyclopediaOutcome {
    /// Build an `Ambiguous` outcome, keeping only the first [`MAX_CANDIDATES`].
    pub fn ambiguous<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ambiguous(
            candidates
                .into_iter()
                .take(MAX_CANDIDATES)
                .map(Into::into)
                .collect(),
        )
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary(_))
    }

    /// User-facing text for this outcome.
    pub fn message(&self, title: &str) -> String {
        match self {
            Self::Summary(text) => text.clone(),
            Self::Ambiguous(candidates) => format!(
                "Multiple entries found for '{}': {}",
                title,
                candidates
                    .iter()
                    .take(MAX_CANDIDATES)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::NotFound => format!("Not found: no encyclopedia page for '{}'.", title),
            Self::TransientError(detail) => format!("Error: {}", detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_message_is_text() {
        let outcome = EncyclopediaOutcome::Summary("Malaria is a disease.".to_string());
        assert_eq!(outcome.message("Malaria"), "Malaria is a disease.");
        assert!(outcome.is_summary());
    }

    #[test]
    fn test_ambiguous_keeps_three_candidates() {
        let outcome = EncyclopediaOutcome::ambiguous(["A", "B", "C", "D", "E"]);
        assert_eq!(
            outcome,
            EncyclopediaOutcome::Ambiguous(vec!["A".into(), "B".into(), "C".into()])
        );
        assert_eq!(
            outcome.message("Acne"),
            "Multiple entries found for 'Acne': A, B, C"
        );
    }

    #[test]
    fn test_ambiguous_message_caps_manually_built_lists() {
        let outcome = EncyclopediaOutcome::Ambiguous(
            ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
        );
        assert!(!outcome.message("x").contains('D'));
    }

    #[test]
    fn test_not_found_message() {
        let message = EncyclopediaOutcome::NotFound.message("Dimorphic hemmorhoids(piles)");
        assert!(message.to_lowercase().contains("not found"));
        assert!(message.contains("Dimorphic hemmorhoids(piles)"));
    }

    #[test]
    fn test_transient_error_message() {
        let outcome = EncyclopediaOutcome::TransientError("rate limited".to_string());
        assert_eq!(outcome.message("x"), "Error: rate limited");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(EncyclopediaOutcome::NotFound).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "not_found"}));
    }
}
