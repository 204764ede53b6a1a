//! Enrichment: descriptive text attached to a prediction.
//!
//! Two interchangeable variants exist, chosen at runtime with [`EnrichmentMode`]:
//! an encyclopedia summary ([`encyclopedia::EncyclopediaOutcome`]) or a
//! generated narrative ([`narrative::Narrative`]).

pub mod encyclopedia;
pub mod narrative;

use crate::core::error::DomainError;
use encyclopedia::EncyclopediaOutcome;
use narrative::Narrative;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which enrichment variant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentMode {
    /// Encyclopedia summary lookup (default)
    #[default]
    Encyclopedia,
    /// Definition/treatment/urgency narrative from a generative model
    Narrative,
}

impl EnrichmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentMode::Encyclopedia => "encyclopedia",
            EnrichmentMode::Narrative => "narrative",
        }
    }
}

impl FromStr for EnrichmentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encyclopedia" | "wiki" | "wikipedia" => Ok(EnrichmentMode::Encyclopedia),
            "narrative" | "generative" | "llm" => Ok(EnrichmentMode::Narrative),
            other => Err(DomainError::InvalidEnrichmentMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for EnrichmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enrichment text attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Enrichment {
    Encyclopedia {
        /// Name of the encyclopedia, e.g. "Wikipedia"
        name: String,
        title: String,
        outcome: EncyclopediaOutcome,
    },
    Narrative(Narrative),
}

impl Enrichment {
    pub fn mode(&self) -> EnrichmentMode {
        match self {
            Enrichment::Encyclopedia { .. } => EnrichmentMode::Encyclopedia,
            Enrichment::Narrative(_) => EnrichmentMode::Narrative,
        }
    }
}
