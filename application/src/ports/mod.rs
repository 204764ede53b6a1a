//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod classifier;
pub mod encyclopedia;
pub mod hospital_search;
pub mod progress;
pub mod text_generator;
