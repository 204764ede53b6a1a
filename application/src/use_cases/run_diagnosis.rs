//! Run Diagnosis use case
//!
//! Orchestrates the full pipeline for one patient input: build the feature
//! vector, classify, enrich, search for hospitals, assemble the report.
//! External calls run one after another; nothing is retried.

use crate::config::DiagnosisParams;
use crate::ports::classifier::{ClassifierError, DiseaseClassifier};
use crate::ports::hospital_search::SearchError;
use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use crate::services::lazy::{LazyHandle, LoadError};
use crate::use_cases::enrich::Enricher;
use crate::use_cases::locate_hospitals::HospitalLocator;
use early_detect_domain::{
    DiagnosisReport, DomainError, FeatureVector, PatientInput, PatientSummary, SymptomCatalog,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a diagnosis run
#[derive(Error, Debug)]
pub enum RunDiagnosisError {
    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(#[from] LoadError),

    #[error("Classifier schema does not match the symptom catalog: {0}")]
    SchemaMismatch(DomainError),

    #[error("Prediction failed: {0}")]
    Classification(#[from] ClassifierError),

    #[error("Hospital search failed: {0}")]
    HospitalSearch(#[from] SearchError),
}

/// Input for the RunDiagnosis use case
#[derive(Debug, Clone)]
pub struct RunDiagnosisInput {
    pub patient: PatientInput,
    /// Free-text location; blank skips the hospital search
    pub location: String,
}

impl RunDiagnosisInput {
    pub fn new(patient: PatientInput) -> Self {
        Self {
            patient,
            location: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Use case for running one diagnosis
pub struct RunDiagnosisUseCase {
    catalog: &'static SymptomCatalog,
    classifier: Arc<LazyHandle<dyn DiseaseClassifier>>,
    enricher: Arc<dyn Enricher>,
    locator: HospitalLocator,
    params: DiagnosisParams,
}

impl RunDiagnosisUseCase {
    pub fn new(
        catalog: &'static SymptomCatalog,
        classifier: Arc<LazyHandle<dyn DiseaseClassifier>>,
        enricher: Arc<dyn Enricher>,
        locator: HospitalLocator,
    ) -> Self {
        Self {
            catalog,
            classifier,
            enricher,
            locator,
            params: DiagnosisParams::default(),
        }
    }

    pub fn with_params(mut self, params: DiagnosisParams) -> Self {
        self.params = params;
        self
    }

    pub fn catalog(&self) -> &'static SymptomCatalog {
        self.catalog
    }

    /// Load the classifier now and verify its schema against the catalog.
    ///
    /// Calling this at startup surfaces a wrong or outdated model before the
    /// user fills in the form. [`execute`](Self::execute) performs the same
    /// check if it was not called.
    pub async fn warm_up(&self) -> Result<(), RunDiagnosisError> {
        self.classifier_checked(&NoProgress).await.map(|_| ())
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunDiagnosisInput,
    ) -> Result<DiagnosisReport, RunDiagnosisError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDiagnosisInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DiagnosisReport, RunDiagnosisError> {
        let vector = FeatureVector::build(self.catalog, &input.patient);
        debug!(
            "Built feature vector with {} of {} symptoms set",
            input.patient.selected_count(),
            vector.len()
        );

        let classifier = self.classifier_checked(progress).await?;

        progress.on_stage_start(Stage::Classify);
        let prediction = match classifier.predict(&vector).await {
            Ok(label) => {
                progress.on_stage_complete(Stage::Classify, true);
                label
            }
            Err(e) => {
                progress.on_stage_complete(Stage::Classify, false);
                return Err(e.into());
            }
        };
        info!("Predicted disease: {}", prediction);

        progress.on_stage_start(Stage::Enrich);
        let enrichment = self.enricher.enrich(&prediction).await;
        progress.on_stage_complete(Stage::Enrich, true);

        let location = input.location.trim();
        let hospitals = if location.is_empty() {
            progress.on_stage_skipped(Stage::LocateHospitals);
            Vec::new()
        } else {
            progress.on_stage_start(Stage::LocateHospitals);
            let result = self
                .locator
                .locate(&prediction, location, self.params.max_hospital_results)
                .await;
            progress.on_stage_complete(Stage::LocateHospitals, result.is_ok());
            result?
        };

        let patient = PatientSummary {
            age: input.patient.age,
            gender: input.patient.gender,
            symptoms: input
                .patient
                .selected_symptoms(self.catalog)
                .iter()
                .map(|s| s.label())
                .collect(),
        };

        Ok(DiagnosisReport {
            patient,
            prediction,
            enrichment,
            location: (!location.is_empty()).then(|| location.to_string()),
            hospitals,
        })
    }

    async fn classifier_checked(
        &self,
        progress: &dyn ProgressNotifier,
    ) -> Result<Arc<dyn DiseaseClassifier>, RunDiagnosisError> {
        let first_load = !self.classifier.is_loaded();
        if first_load {
            progress.on_stage_start(Stage::LoadModel);
        }

        let classifier = match self.classifier.get().await {
            Ok(c) => c,
            Err(e) => {
                if first_load {
                    progress.on_stage_complete(Stage::LoadModel, false);
                }
                warn!("{}", e);
                return Err(e.into());
            }
        };

        let checked = self
            .catalog
            .descriptor()
            .ensure_compatible(classifier.schema());
        if first_load {
            progress.on_stage_complete(Stage::LoadModel, checked.is_ok());
        }
        checked.map_err(RunDiagnosisError::SchemaMismatch)?;

        Ok(classifier)
    }
}
