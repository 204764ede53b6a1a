//! Prompt templates for the generative narrative

use crate::diagnosis::label::DiseaseLabel;
use crate::enrichment::narrative::NarrativeTopic;

/// Templates for the three narrative questions
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for a plain-language definition
    pub fn definition(disease: &DiseaseLabel) -> String {
        format!(
            "Explain in simple terms what {} is. Keep it to a short paragraph.",
            disease
        )
    }

    /// Prompt asking for common treatments
    pub fn treatment(disease: &DiseaseLabel) -> String {
        format!(
            "What are the common treatments for {}? Answer in a short paragraph.",
            disease
        )
    }

    /// Prompt asking how urgently to seek care
    pub fn urgency(disease: &DiseaseLabel) -> String {
        format!(
            "How urgent is it to see a doctor for {}? Mention warning signs that need immediate care.",
            disease
        )
    }

    pub fn for_topic(topic: NarrativeTopic, disease: &DiseaseLabel) -> String {
        match topic {
            NarrativeTopic::Definition => Self::definition(disease),
            NarrativeTopic::Treatment => Self::treatment(disease),
            NarrativeTopic::Urgency => Self::urgency(disease),
        }
    }
}
