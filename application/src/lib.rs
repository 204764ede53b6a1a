//! Application layer for early-detect
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod services;
pub mod use_cases;

// Re-export commonly used types
pub use config::DiagnosisParams;
pub use ports::{
    classifier::{ClassifierError, DiseaseClassifier, ensure_shape},
    encyclopedia::{DEFAULT_SUMMARY_SENTENCES, Encyclopedia},
    hospital_search::{HospitalSearch, SearchError},
    progress::{NoProgress, ProgressNotifier, Stage},
    text_generator::{GenerationError, TextGenerator},
};
pub use services::lazy::{LazyHandle, LoadError, ServiceLoader};
pub use use_cases::enrich::{EncyclopediaEnricher, Enricher, NarrativeEnricher};
pub use use_cases::locate_hospitals::HospitalLocator;
pub use use_cases::run_diagnosis::{RunDiagnosisError, RunDiagnosisInput, RunDiagnosisUseCase};
