//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod enrich;
pub mod locate_hospitals;
pub mod run_diagnosis;
#[cfg(test)]
pub(crate) mod testing;
