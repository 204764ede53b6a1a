//! Hospital search: query construction and result records.

use crate::diagnosis::label::DiseaseLabel;
use serde::{Deserialize, Serialize};

/// Default number of hospital results shown in a report.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One search hit (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl HospitalResult {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// A hospital search request for a predicted disease near a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalQuery {
    disease: DiseaseLabel,
    location: String,
    max_results: usize,
}

impl HospitalQuery {
    /// Returns `None` when the location is blank: no search should be made.
    pub fn new(disease: DiseaseLabel, location: &str, max_results: usize) -> Option<Self> {
        let location = location.trim();
        if location.is_empty() {
            return None;
        }
        Some(Self {
            disease,
            location: location.to_string(),
            max_results,
        })
    }

    pub fn disease(&self) -> &DiseaseLabel {
        &self.disease
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Free-text query sent to the search backend.
    pub fn text(&self) -> String {
        format!(
            "{} hospital near {} book appointment",
            self.disease, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> DiseaseLabel {
        DiseaseLabel::new(s).unwrap()
    }

    #[test]
    fn test_query_text() {
        let query = HospitalQuery::new(label("Malaria"), " Boston ", 5).unwrap();
        assert_eq!(query.text(), "Malaria hospital near Boston book appointment");
        assert_eq!(query.location(), "Boston");
        assert_eq!(query.max_results(), 5);
    }

    #[test]
    fn test_blank_location_yields_no_query() {
        assert!(HospitalQuery::new(label("Malaria"), "", 5).is_none());
        assert!(HospitalQuery::new(label("Malaria"), "   \t", 5).is_none());
    }
}
