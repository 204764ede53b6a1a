//! Enrichment use case
//!
//! Attaches descriptive text to a prediction, using either an encyclopedia
//! summary or a generated narrative. Both variants degrade gracefully: a
//! failing backend produces an error message inside the enrichment instead of
//! failing the request.

use crate::ports::encyclopedia::Encyclopedia;
use crate::ports::text_generator::TextGenerator;
use crate::services::lazy::LazyHandle;
use async_trait::async_trait;
use early_detect_domain::{
    DiseaseLabel, EncyclopediaOutcome, Enrichment, EnrichmentMode, Narrative, NarrativeSection,
    NarrativeTopic, PromptTemplate, SectionText,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Produces the enrichment for a predicted disease
#[async_trait]
pub trait Enricher: Send + Sync {
    fn mode(&self) -> EnrichmentMode;

    async fn enrich(&self, disease: &DiseaseLabel) -> Enrichment;
}

/// Encyclopedia summary enrichment (variant A)
///
/// Definitive outcomes are memoized per title for the lifetime of the
/// enricher; transient errors are not, so a later request can succeed.
pub struct EncyclopediaEnricher {
    encyclopedia: Arc<dyn Encyclopedia>,
    sentences: usize,
    memo: Mutex<HashMap<String, EncyclopediaOutcome>>,
}

impl EncyclopediaEnricher {
    pub fn new(encyclopedia: Arc<dyn Encyclopedia>, sentences: usize) -> Self {
        Self {
            encyclopedia,
            sentences,
            memo: Mutex::new(HashMap::new()),
        }
    }

    async fn lookup(&self, title: &str) -> EncyclopediaOutcome {
        if let Some(cached) = self.memo.lock().unwrap().get(title) {
            debug!("Encyclopedia cache hit for '{}'", title);
            return cached.clone();
        }

        let outcome = self.encyclopedia.summarize(title, self.sentences).await;
        match &outcome {
            EncyclopediaOutcome::TransientError(detail) => {
                warn!("Encyclopedia lookup for '{}' failed: {}", title, detail);
            }
            other => {
                self.memo
                    .lock()
                    .unwrap()
                    .insert(title.to_string(), other.clone());
            }
        }
        outcome
    }
}

#[async_trait]
impl Enricher for EncyclopediaEnricher {
    fn mode(&self) -> EnrichmentMode {
        EnrichmentMode::Encyclopedia
    }

    async fn enrich(&self, disease: &DiseaseLabel) -> Enrichment {
        let title = disease.as_str();
        info!("Looking up '{}' in {}", title, self.encyclopedia.name());
        Enrichment::Encyclopedia {
            name: self.encyclopedia.name().to_string(),
            title: title.to_string(),
            outcome: self.lookup(title).await,
        }
    }
}

/// Generated narrative enrichment (variant B)
///
/// Sends one prompt per [`NarrativeTopic`]. Successful completions are
/// memoized by prompt text, so asking about the same disease twice in a
/// session reuses the earlier answers.
pub struct NarrativeEnricher {
    generator: Arc<LazyHandle<dyn TextGenerator>>,
    memo: Mutex<HashMap<String, String>>,
}

impl NarrativeEnricher {
    pub fn new(generator: Arc<LazyHandle<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            memo: Mutex::new(HashMap::new()),
        }
    }

    async fn section(&self, topic: NarrativeTopic, disease: &DiseaseLabel) -> SectionText {
        let prompt = PromptTemplate::for_topic(topic, disease);

        if let Some(cached) = self.memo.lock().unwrap().get(&prompt) {
            debug!("Narrative cache hit for {:?}", topic);
            return SectionText::Generated(cached.clone());
        }

        let generator = match self.generator.get().await {
            Ok(g) => g,
            Err(e) => {
                warn!("Text generator unavailable: {}", e);
                return SectionText::Failed(e.to_string());
            }
        };

        match generator.generate(&prompt).await {
            Ok(text) => {
                let text = text.trim().to_string();
                self.memo.lock().unwrap().insert(prompt, text.clone());
                SectionText::Generated(text)
            }
            Err(e) => {
                warn!("Generating {:?} section failed: {}", topic, e);
                SectionText::Failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl Enricher for NarrativeEnricher {
    fn mode(&self) -> EnrichmentMode {
        EnrichmentMode::Narrative
    }

    async fn enrich(&self, disease: &DiseaseLabel) -> Enrichment {
        info!("Generating narrative for '{}'", disease);
        let mut sections = Vec::with_capacity(NarrativeTopic::ALL.len());
        for topic in NarrativeTopic::ALL {
            let text = self.section(topic, disease).await;
            sections.push(NarrativeSection { topic, text });
        }
        Enrichment::Narrative(Narrative::new(sections))
    }
}
