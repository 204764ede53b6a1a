//! Interactive intake
//!
//! A reedline-based form that collects the patient input, plus the loop that
//! runs a diagnosis for each completed form.

mod form;
pub mod parse;
mod repl;

pub use form::IntakeForm;
pub use repl::DiagnosisRepl;
