//! Diagnosis report: everything the renderer needs for one request.

use super::label::DiseaseLabel;
use crate::enrichment::Enrichment;
use crate::hospital::HospitalResult;
use crate::symptom::patient::{Age, Gender};
use serde::{Deserialize, Serialize};

/// Summary of the patient input echoed back in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub age: Age,
    pub gender: Gender,
    /// Display labels of the selected symptoms, in catalog order
    pub symptoms: Vec<String>,
}

/// Result of one run of the diagnosis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub patient: PatientSummary,
    pub prediction: DiseaseLabel,
    pub enrichment: Enrichment,
    /// Location the hospital search ran for (`None` when it was skipped)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Search hits in backend order; empty when no search ran
    pub hospitals: Vec<HospitalResult>,
}

impl DiagnosisReport {
    /// Whether the renderer should show a hospital section at all.
    pub fn has_hospitals(&self) -> bool {
        !self.hospitals.is_empty()
    }
}
