//! Symptom schema, patient input and feature vector construction.
//!
//! - [`catalog::SymptomCatalog`]: the ordered 132-column schema
//! - [`patient::PatientInput`]: age, gender and selected symptoms
//! - [`feature_vector::FeatureVector`]: 0/1 encoding of a patient input

pub mod catalog;
pub mod feature_vector;
pub mod patient;
