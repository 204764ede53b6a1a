//! Patient input: age, gender and the selected symptoms for one request.

use super::catalog::{Symptom, SymptomCatalog};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Patient age in whole years, bounded to `0..=100` (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 25;

    pub fn new(years: u8) -> Result<Self, DomainError> {
        if years > Self::MAX {
            return Err(DomainError::AgeOutOfRange(years.into()));
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for Age {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl FromStr for Age {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidAge(s.trim().to_string()))?;
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(DomainError::AgeOutOfRange(value));
        }
        Age::new(value as u8)
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary gender choice offered by the intake form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Numeric encoding (Male = 1, Female = 0).
    ///
    /// The bundled classifier takes symptom columns only, so this is not part
    /// of the feature vector.
    pub fn as_flag(&self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(DomainError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs collected for a single prediction request.
///
/// Symptoms are stored as catalog indices, so a `PatientInput` is only
/// meaningful together with the catalog it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientInput {
    pub age: Age,
    pub gender: Gender,
    selected: BTreeSet<usize>,
}

impl PatientInput {
    pub fn new(age: Age, gender: Gender) -> Self {
        Self {
            age,
            gender,
            selected: BTreeSet::new(),
        }
    }

    /// Select a symptom by name, validated against `catalog`.
    pub fn select(&mut self, catalog: &SymptomCatalog, name: &str) -> Result<Symptom, DomainError> {
        let symptom = catalog.resolve(name)?;
        self.selected.insert(symptom.index());
        Ok(symptom)
    }

    /// Select a symptom by catalog index.
    pub fn select_index(&mut self, catalog: &SymptomCatalog, index: usize) -> Result<Symptom, DomainError> {
        let symptom = catalog
            .get(index)
            .ok_or_else(|| DomainError::UnknownSymptom(format!("#{}", index + 1)))?;
        self.selected.insert(index);
        Ok(symptom)
    }

    /// Builder-style selection by name.
    pub fn with_symptoms<I, S>(mut self, catalog: &SymptomCatalog, names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.select(catalog, name.as_ref())?;
        }
        Ok(self)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected catalog indices in ascending order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected symptoms, resolved against `catalog`, in catalog order.
    pub fn selected_symptoms(&self, catalog: &SymptomCatalog) -> Vec<Symptom> {
        self.selected
            .iter()
            .filter_map(|&i| catalog.get(i))
            .collect()
    }
}

impl Default for PatientInput {
    fn default() -> Self {
        Self::new(Age::default(), Gender::default())
    }
}
