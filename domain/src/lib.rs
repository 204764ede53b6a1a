//! Domain layer for early-detect
//!
//! This crate contains the symptom schema, the feature vector encoding and
//! the entities that make up a diagnosis report. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Symptom Catalog**: the ordered list of symptom identifiers that defines
//!   the classifier's input columns, tagged with a schema id
//! - **Feature Vector**: a 0/1 encoding of the patient's selected symptoms
//! - **Enrichment**: encyclopedia summary or generated narrative for a prediction
//! - **Hospital Query**: web search for care providers near a location

pub mod config;
pub mod core;
pub mod diagnosis;
pub mod enrichment;
pub mod hospital;
pub mod prompt;
pub mod symptom;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use diagnosis::{
    label::DiseaseLabel,
    report::{DiagnosisReport, PatientSummary},
};
pub use enrichment::{
    Enrichment, EnrichmentMode,
    encyclopedia::{EncyclopediaOutcome, MAX_CANDIDATES},
    narrative::{Narrative, NarrativeSection, NarrativeTopic, SectionText},
};
pub use hospital::{DEFAULT_MAX_RESULTS, HospitalQuery, HospitalResult};
pub use prompt::PromptTemplate;
pub use symptom::{
    catalog::{SCHEMA_ID, SYMPTOM_COUNT, SchemaDescriptor, Symptom, SymptomCatalog, display_label},
    feature_vector::FeatureVector,
    patient::{Age, Gender, PatientInput},
};
