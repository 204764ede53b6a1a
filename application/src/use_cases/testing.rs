//! Test doubles for the application ports.

use crate::ports::classifier::{ClassifierError, DiseaseClassifier, ensure_shape};
use crate::ports::encyclopedia::Encyclopedia;
use crate::ports::hospital_search::{HospitalSearch, SearchError};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use crate::services::lazy::{LoadError, ServiceLoader};
use async_trait::async_trait;
use early_detect_domain::{
    DiseaseLabel, EncyclopediaOutcome, FeatureVector, HospitalResult, SchemaDescriptor,
    SymptomCatalog,
};
use std::sync::{Arc, Mutex};

/// Classifier that records every vector and always predicts the same label
pub struct MockClassifier {
    schema: SchemaDescriptor,
    label: String,
    seen: Mutex<Vec<FeatureVector>>,
}

impl MockClassifier {
    pub fn new(label: &str) -> Self {
        Self::with_schema(label, SymptomCatalog::standard().descriptor())
    }

    pub fn with_schema(label: &str, schema: SchemaDescriptor) -> Self {
        Self {
            schema,
            label: label.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiseaseClassifier for MockClassifier {
    fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    async fn predict(&self, vector: &FeatureVector) -> Result<DiseaseLabel, ClassifierError> {
        ensure_shape(&self.schema, vector)?;
        self.seen.lock().unwrap().push(vector.clone());
        DiseaseLabel::new(self.label.clone())
            .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))
    }
}

/// Encyclopedia returning a fixed outcome and recording requests
pub struct MockEncyclopedia {
    outcome: EncyclopediaOutcome,
    requests: Mutex<Vec<(String, usize)>>,
}

impl MockEncyclopedia {
    pub fn new(outcome: EncyclopediaOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Encyclopedia for MockEncyclopedia {
    fn name(&self) -> &str {
        "MockPedia"
    }

    async fn summarize(&self, title: &str, sentences: usize) -> EncyclopediaOutcome {
        self.requests
            .lock()
            .unwrap()
            .push((title.to_string(), sentences));
        self.outcome.clone()
    }
}

/// Generator echoing the prompt, optionally failing on prompts containing a marker
pub struct MockGenerator {
    fail_marker: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            fail_marker: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(marker) = &self.fail_marker
            && prompt.contains(marker.as_str())
        {
            return Err(GenerationError::RequestFailed("503 Service Unavailable".into()));
        }
        Ok(format!("  Answer to: {}  ", prompt))
    }
}

/// Loader that never succeeds
pub struct FailingLoader;

#[async_trait]
impl ServiceLoader<dyn TextGenerator> for FailingLoader {
    fn describe(&self) -> String {
        "failing generator".to_string()
    }

    async fn load(&self) -> Result<Arc<dyn TextGenerator>, LoadError> {
        Err(LoadError::new("text generator", "model registry unreachable"))
    }
}

#[async_trait]
impl ServiceLoader<dyn DiseaseClassifier> for FailingLoader {
    fn describe(&self) -> String {
        "failing classifier".to_string()
    }

    async fn load(&self) -> Result<Arc<dyn DiseaseClassifier>, LoadError> {
        Err(LoadError::new("classifier", "artifact download failed"))
    }
}

/// Search backend producing numbered hits and recording queries
pub struct MockSearch {
    hits: usize,
    respect_limit: bool,
    fail: bool,
    queries: Mutex<Vec<(String, usize)>>,
}

impl MockSearch {
    pub fn with_hits(hits: usize) -> Self {
        Self {
            hits,
            respect_limit: true,
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_hits(0)
        }
    }

    /// Return every hit regardless of `max_results`
    pub fn ignoring_limit(mut self) -> Self {
        self.respect_limit = false;
        self
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HospitalSearch for MockSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<HospitalResult>, SearchError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        if self.fail {
            return Err(SearchError::Status(503));
        }
        let count = if self.respect_limit {
            self.hits.min(max_results)
        } else {
            self.hits
        };
        Ok((1..=count)
            .map(|i| {
                HospitalResult::new(
                    format!("Hospital {}", i),
                    format!("https://hospital{}.example.org/appointments", i),
                    format!("Book an appointment at hospital {}", i),
                )
            })
            .collect())
    }
}
