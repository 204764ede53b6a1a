//! Symptom Catalog: the fixed, ordered symptom schema the classifier was trained on.
//!
//! Position in [`SYMPTOMS`] is the column index of the feature vector. The
//! identifiers are kept exactly as the training data spells them, including
//! the irregular ones (`spotting_ urination`, `fluid_overload.1`, ...), because
//! the classifier artifact declares its feature names with the same spelling.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of symptom columns in the schema.
pub const SYMPTOM_COUNT: usize = 132;

/// Identifier of the symptom schema compiled into this binary.
pub const SCHEMA_ID: &str = "disease-symptom-132/v1";

/// Symptom identifiers in training-column order.
pub const SYMPTOMS: [&str; SYMPTOM_COUNT] = [
    "itching", "skin_rash", "nodal_skin_eruptions", "continuous_sneezing",
    "shivering", "chills", "joint_pain", "stomach_pain",
    "acidity", "ulcers_on_tongue", "muscle_wasting", "vomiting",
    "burning_micturition", "spotting_ urination", "fatigue", "weight_gain",
    "anxiety", "cold_hands_and_feets", "mood_swings", "weight_loss",
    "restlessness", "lethargy", "patches_in_throat", "irregular_sugar_level",
    "cough", "high_fever", "sunken_eyes", "breathlessness",
    "sweating", "dehydration", "indigestion", "headache",
    "yellowish_skin", "dark_urine", "nausea", "loss_of_appetite",
    "pain_behind_the_eyes", "back_pain", "constipation", "abdominal_pain",
    "diarrhoea", "mild_fever", "yellow_urine", "yellowing_of_eyes",
    "acute_liver_failure", "fluid_overload", "swelling_of_stomach", "swelled_lymph_nodes",
    "malaise", "blurred_and_distorted_vision", "phlegm", "throat_irritation",
    "redness_of_eyes", "sinus_pressure", "runny_nose", "congestion",
    "chest_pain", "weakness_in_limbs", "fast_heart_rate", "pain_during_bowel_movements",
    "pain_in_anal_region", "bloody_stool", "irritation_in_anus", "neck_pain",
    "dizziness", "cramps", "bruising", "obesity",
    "swollen_legs", "swollen_blood_vessels", "puffy_face_and_eyes", "enlarged_thyroid",
    "brittle_nails", "swollen_extremeties", "excessive_hunger", "extra_marital_contacts",
    "drying_and_tingling_lips", "slurred_speech", "knee_pain", "hip_joint_pain",
    "muscle_weakness", "stiff_neck", "swelling_joints", "movement_stiffness",
    "spinning_movements", "loss_of_balance", "unsteadiness", "weakness_of_one_body_side",
    "loss_of_smell", "bladder_discomfort", "foul_smell_of urine", "continuous_feel_of_urine",
    "passage_of_gases", "internal_itching", "toxic_look_(typhos)", "depression",
    "irritability", "muscle_pain", "altered_sensorium", "red_spots_over_body",
    "belly_pain", "abnormal_menstruation", "dischromic _patches", "watering_from_eyes",
    "increased_appetite", "polyuria", "family_history", "mucoid_sputum",
    "rusty_sputum", "lack_of_concentration", "visual_disturbances", "receiving_blood_transfusion",
    "receiving_unsterile_injections", "coma", "stomach_bleeding", "distention_of_abdomen",
    "history_of_alcohol_consumption", "fluid_overload.1", "blood_in_sputum", "prominent_veins_on_calf",
    "palpitations", "painful_walking", "pus_filled_pimples", "blackheads",
    "scurring", "skin_peeling", "silver_like_dusting", "small_dents_in_nails",
    "inflammatory_nails", "blister", "red_sore_around_nose", "yellow_crust_ooze",
];

/// Versioned description of a positional feature schema.
///
/// Both the catalog and every classifier backend expose one of these, so a
/// mismatch is caught when the model is loaded instead of producing a
/// meaningless prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub id: String,
    pub features: Vec<String>,
}

impl SchemaDescriptor {
    pub fn new(id: impl Into<String>, features: Vec<String>) -> Self {
        Self {
            id: id.into(),
            features,
        }
    }

    /// Verify that `other` describes exactly the same columns in the same order.
    ///
    /// The schema id must match too, unless `other` leaves it empty (artifacts
    /// exported without an id are accepted when their columns line up).
    pub fn ensure_compatible(&self, other: &SchemaDescriptor) -> Result<(), DomainError> {
        if self.features.len() != other.features.len() {
            return Err(DomainError::SchemaMismatch(format!(
                "expected {} features, model declares {}",
                self.features.len(),
                other.features.len()
            )));
        }

        if let Some((index, (ours, theirs))) = self
            .features
            .iter()
            .zip(&other.features)
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return Err(DomainError::SchemaMismatch(format!(
                "column {} is '{}' in the catalog but '{}' in the model",
                index, ours, theirs
            )));
        }

        if !other.id.is_empty() && other.id != self.id {
            return Err(DomainError::SchemaMismatch(format!(
                "schema id '{}' does not match '{}'",
                other.id, self.id
            )));
        }

        Ok(())
    }
}

/// One entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symptom {
    index: usize,
    id: &'static str,
}

impl Symptom {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Checklist label, e.g. `skin_rash` -> `Skin rash`.
    pub fn label(&self) -> String {
        display_label(self.id)
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Ordered, immutable symptom schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomCatalog {
    schema_id: &'static str,
    entries: &'static [&'static str],
}

static STANDARD: SymptomCatalog = SymptomCatalog {
    schema_id: SCHEMA_ID,
    entries: &SYMPTOMS,
};

impl SymptomCatalog {
    /// The catalog compiled into the binary.
    pub fn standard() -> &'static SymptomCatalog {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn schema_id(&self) -> &'static str {
        self.schema_id
    }

    pub fn get(&self, index: usize) -> Option<Symptom> {
        self.entries.get(index).map(|id| Symptom { index, id })
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, id)| Symptom { index, id })
    }

    /// Find a symptom by identifier or display label.
    ///
    /// Matching ignores case, treats `_` and spaces alike and collapses runs of
    /// whitespace, so `"Skin rash"`, `"skin_rash"` and `"SKIN  RASH"` all match.
    pub fn find(&self, name: &str) -> Option<Symptom> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.iter().find(|s| normalize(s.id) == wanted)
    }

    /// Like [`find`](Self::find) but returns a typed error for unknown names.
    pub fn resolve(&self, name: &str) -> Result<Symptom, DomainError> {
        self.find(name)
            .ok_or_else(|| DomainError::UnknownSymptom(name.trim().to_string()))
    }

    /// Schema descriptor for comparison against a classifier.
    pub fn descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor::new(
            self.schema_id,
            self.entries.iter().map(|s| s.to_string()).collect(),
        )
    }
}

/// Human-readable label: underscores become spaces, the first letter is
/// upper-cased and the rest lower-cased.
pub fn display_label(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn normalize(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_order() {
        let catalog = SymptomCatalog::standard();
        assert_eq!(catalog.len(), SYMPTOM_COUNT);
        assert_eq!(catalog.get(0).unwrap().id(), "itching");
        assert_eq!(catalog.get(131).unwrap().id(), "yellow_crust_ooze");
        assert!(catalog.get(132).is_none());
    }

    #[test]
    fn test_identifiers_are_unique_after_normalization() {
        let normalized: HashSet<_> = SYMPTOMS.iter().map(|s| normalize(s)).collect();
        assert_eq!(normalized.len(), SYMPTOM_COUNT);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("skin_rash"), "Skin rash");
        assert_eq!(display_label("toxic_look_(typhos)"), "Toxic look (typhos)");
        assert_eq!(display_label("spotting_ urination"), "Spotting  urination");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_find_by_label_and_identifier() {
        let catalog = SymptomCatalog::standard();
        assert_eq!(catalog.find("skin_rash").unwrap().index(), 1);
        assert_eq!(catalog.find("Skin rash").unwrap().index(), 1);
        assert_eq!(catalog.find("  SKIN   RASH ").unwrap().index(), 1);
        assert_eq!(
            catalog.find("spotting urination").unwrap().id(),
            "spotting_ urination"
        );
        assert!(catalog.find("").is_none());
        assert!(catalog.find("purple tongue").is_none());
    }

    #[test]
    fn test_resolve_unknown_symptom() {
        let err = SymptomCatalog::standard().resolve(" purple tongue ").unwrap_err();
        assert!(matches!(err, DomainError::UnknownSymptom(ref n) if n == "purple tongue"));
    }

    #[test]
    fn test_descriptor_compatible_with_itself() {
        let descriptor = SymptomCatalog::standard().descriptor();
        assert_eq!(descriptor.id, SCHEMA_ID);
        assert!(descriptor.ensure_compatible(&descriptor.clone()).is_ok());
    }

    #[test]
    fn test_descriptor_detects_reordering() {
        let ours = SymptomCatalog::standard().descriptor();
        let mut theirs = ours.clone();
        theirs.features.swap(0, 1);
        let err = ours.ensure_compatible(&theirs).unwrap_err();
        assert!(err.to_string().contains("column 0"));
    }

    #[test]
    fn test_descriptor_detects_length_and_id() {
        let ours = SymptomCatalog::standard().descriptor();

        let mut shorter = ours.clone();
        shorter.features.pop();
        assert!(ours.ensure_compatible(&shorter).is_err());

        let mut other_id = ours.clone();
        other_id.id = "other/v2".to_string();
        assert!(ours.ensure_compatible(&other_id).is_err());

        let mut anonymous = ours.clone();
        anonymous.id.clear();
        assert!(ours.ensure_compatible(&anonymous).is_ok());
    }
}
