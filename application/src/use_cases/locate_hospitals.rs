//! Hospital locator
//!
//! Wraps the search backend with the location guard and result limit.

use crate::ports::hospital_search::{HospitalSearch, SearchError};
use early_detect_domain::{DiseaseLabel, HospitalQuery, HospitalResult};
use std::sync::Arc;
use tracing::{debug, info};

pub struct HospitalLocator {
    search: Arc<dyn HospitalSearch>,
}

impl HospitalLocator {
    pub fn new(search: Arc<dyn HospitalSearch>) -> Self {
        Self { search }
    }

    /// Search for hospitals treating `disease` near `location`.
    ///
    /// A blank location skips the backend entirely and yields no results.
    /// Results keep the backend's order and are capped at `max_results`.
    pub async fn locate(
        &self,
        disease: &DiseaseLabel,
        location: &str,
        max_results: usize,
    ) -> Result<Vec<HospitalResult>, SearchError> {
        let Some(query) = HospitalQuery::new(disease.clone(), location, max_results) else {
            debug!("No location given, skipping hospital search");
            return Ok(Vec::new());
        };

        let text = query.text();
        info!("Searching hospitals: {}", text);
        let mut results = self.search.search(&text, query.max_results()).await?;
        results.truncate(query.max_results());
        Ok(results)
    }
}
