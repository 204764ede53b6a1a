//! Generative-model narrative: definition, treatment and urgency sections.

use serde::{Deserialize, Serialize};

/// The three questions asked of the generative model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeTopic {
    Definition,
    Treatment,
    Urgency,
}

impl NarrativeTopic {
    /// All topics in display order.
    pub const ALL: [NarrativeTopic; 3] = [
        NarrativeTopic::Definition,
        NarrativeTopic::Treatment,
        NarrativeTopic::Urgency,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            NarrativeTopic::Definition => "What is it?",
            NarrativeTopic::Treatment => "Treatment",
            NarrativeTopic::Urgency => "How urgent is it?",
        }
    }
}

/// Text of one section, or the error that replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum SectionText {
    Generated(String),
    Failed(String),
}

impl SectionText {
    pub fn display(&self) -> String {
        match self {
            SectionText::Generated(text) => text.clone(),
            SectionText::Failed(detail) => format!("Error: {}", detail),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, SectionText::Generated(_))
    }
}

/// One generated section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSection {
    pub topic: NarrativeTopic,
    pub text: SectionText,
}

/// Definition, treatment and urgency sections for a predicted disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub sections: Vec<NarrativeSection>,
}

impl Narrative {
    pub fn new(sections: Vec<NarrativeSection>) -> Self {
        Self { sections }
    }

    pub fn section(&self, topic: NarrativeTopic) -> Option<&NarrativeSection> {
        self.sections.iter().find(|s| s.topic == topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display() {
        assert_eq!(SectionText::Generated("ok".into()).display(), "ok");
        assert_eq!(SectionText::Failed("timeout".into()).display(), "Error: timeout");
    }

    #[test]
    fn test_section_lookup() {
        let narrative = Narrative::new(vec![NarrativeSection {
            topic: NarrativeTopic::Urgency,
            text: SectionText::Generated("See a doctor today.".into()),
        }]);
        assert!(narrative.section(NarrativeTopic::Urgency).is_some());
        assert!(narrative.section(NarrativeTopic::Definition).is_none());
    }
}
