//! Feature Vector Builder: encodes a [`PatientInput`] against a [`SymptomCatalog`].

use super::catalog::SymptomCatalog;
use super::patient::PatientInput;
use serde::{Deserialize, Serialize};

/// One 0/1 slot per catalog entry, tagged with the schema it was built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    schema_id: String,
    values: Vec<u8>,
}

impl FeatureVector {
    /// Build the vector for `input`: slot `i` is 1 iff catalog entry `i` was selected.
    ///
    /// # Panics
    /// Panics if `input` holds an index outside `catalog`. `PatientInput` only
    /// accepts indices validated against a catalog, so this means the input was
    /// built from a different catalog.
    pub fn build(catalog: &SymptomCatalog, input: &PatientInput) -> Self {
        let mut values = vec![0u8; catalog.len()];
        for index in input.selected_indices() {
            assert!(
                index < values.len(),
                "symptom index {} outside catalog of {}",
                index,
                values.len()
            );
            values[index] = 1;
        }
        Self {
            schema_id: catalog.schema_id().to_string(),
            values,
        }
    }

    /// Construct directly from raw values (used by adapters and tests).
    pub fn from_values(schema_id: impl Into<String>, values: Vec<u8>) -> Self {
        Self {
            schema_id: schema_id.into(),
            values,
        }
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices holding a 1.
    pub fn active_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Values as `f64`, the row shape numeric models expect.
    pub fn as_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| f64::from(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptom::catalog::SYMPTOM_COUNT;

    #[test]
    fn test_empty_input_yields_all_zero_vector() {
        let catalog = SymptomCatalog::standard();
        let vector = FeatureVector::build(catalog, &PatientInput::default());
        assert_eq!(vector.len(), SYMPTOM_COUNT);
        assert!(vector.values().iter().all(|&v| v == 0));
        assert_eq!(vector.schema_id(), catalog.schema_id());
    }

    #[test]
    fn test_single_selection_sets_only_that_index() {
        let catalog = SymptomCatalog::standard();
        for k in [0, 1, 64, 131] {
            let mut input = PatientInput::default();
            input.select_index(catalog, k).unwrap();
            let vector = FeatureVector::build(catalog, &input);
            assert_eq!(vector.active_indices(), vec![k]);
        }
    }

    #[test]
    fn test_values_restricted_to_zero_and_one() {
        let catalog = SymptomCatalog::standard();
        let mut input = PatientInput::default();
        for k in (0..catalog.len()).step_by(3) {
            input.select_index(catalog, k).unwrap();
        }
        let vector = FeatureVector::build(catalog, &input);
        assert_eq!(vector.len(), catalog.len());
        assert!(vector.values().iter().all(|&v| v <= 1));
        assert_eq!(vector.active_indices().len(), input.selected_count());
    }

    #[test]
    fn test_itching_is_first_column() {
        let catalog = SymptomCatalog::standard();
        let input = PatientInput::default()
            .with_symptoms(catalog, ["itching"])
            .unwrap();
        let vector = FeatureVector::build(catalog, &input);
        assert_eq!(vector.values()[0], 1);
        assert_eq!(vector.as_f64().iter().sum::<f64>(), 1.0);
    }
}
