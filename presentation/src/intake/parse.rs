//! Parsers for intake form answers

use early_detect_domain::{Age, DomainError, Gender, PatientInput, SymptomCatalog};

/// Blank means the default age.
pub fn parse_age(input: &str) -> Result<Age, DomainError> {
    if input.trim().is_empty() {
        return Ok(Age::default());
    }
    input.parse()
}

/// Blank means the default gender.
pub fn parse_gender(input: &str) -> Result<Gender, DomainError> {
    if input.trim().is_empty() {
        return Ok(Gender::default());
    }
    input.parse()
}

/// Apply a comma-separated selection of checklist numbers (1-based) and
/// symptom names to `patient`.
///
/// Nothing is applied unless every entry is valid.
pub fn apply_symptom_selection(
    patient: &mut PatientInput,
    catalog: &SymptomCatalog,
    input: &str,
) -> Result<usize, DomainError> {
    let mut updated = patient.clone();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<usize>() {
            Ok(0) => return Err(DomainError::UnknownSymptom("#0".to_string())),
            Ok(n) => {
                updated.select_index(catalog, n - 1)?;
            }
            Err(_) => {
                updated.select(catalog, token)?;
            }
        }
    }
    let added = updated.selected_count() - patient.selected_count();
    *patient = updated;
    Ok(added)
}
