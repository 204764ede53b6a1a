//! Prediction output and the aggregated report.

pub mod label;
pub mod report;
