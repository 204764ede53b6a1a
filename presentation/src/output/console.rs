//! Console output formatter for diagnosis reports

use colored::Colorize;
use early_detect_domain::{DiagnosisReport, Enrichment, OutputFormat, SymptomCatalog};

/// Formats diagnosis reports for console display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render `report` in the requested format
    pub fn render(report: &DiagnosisReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Summary => Self::format_summary(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete report
    pub fn format(report: &DiagnosisReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Early Disease Detection"));
        output.push('\n');

        // Patient
        output.push_str(&format!(
            "\n{} age {}, {}\n",
            "Patient:".cyan().bold(),
            report.patient.age,
            report.patient.gender
        ));
        let symptoms = if report.patient.symptoms.is_empty() {
            "(none selected)".dimmed().to_string()
        } else {
            report.patient.symptoms.join(", ")
        };
        output.push_str(&format!("{} {}\n", "Symptoms:".cyan().bold(), symptoms));

        output.push_str(&Self::section_header("Prediction"));
        output.push_str(&format!(
            "\n{} {}\n",
            "Predicted disease:".bold(),
            report.prediction.as_str().yellow().bold()
        ));

        output.push_str(&Self::section_header(&Self::enrichment_title(report)));
        output.push_str(&Self::format_enrichment(&report.enrichment));

        if report.has_hospitals() {
            let title = match &report.location {
                Some(location) => format!("Hospitals near {}", location),
                None => "Hospitals".to_string(),
            };
            output.push_str(&Self::section_header(&title));
            for (i, hospital) in report.hospitals.iter().enumerate() {
                output.push_str(&format!("\n{}. {}\n", i + 1, hospital.title.bold()));
                if !hospital.snippet.is_empty() {
                    output.push_str(&format!("{}\n", Self::indent(&hospital.snippet, "   ")));
                }
                output.push_str(&format!(
                    "   {} {}\n",
                    "Book/Visit:".green(),
                    hospital.link.underline()
                ));
            }
        }

        output.push_str(&Self::footer());
        output.push_str(&format!(
            "{}\n",
            "This is not a medical diagnosis. Please consult a doctor.".dimmed()
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(report: &DiagnosisReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format prediction and enrichment only (concise output)
    pub fn format_summary(report: &DiagnosisReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Predicted disease:".cyan().bold(),
            report.prediction.as_str().bold()
        ));
        output.push_str(&Self::format_enrichment(&report.enrichment));

        output
    }

    /// Numbered symptom checklist with display labels
    pub fn format_symptom_list(catalog: &SymptomCatalog) -> String {
        let mut output = format!("{}\n", "Symptoms:".cyan().bold());
        for symptom in catalog.iter() {
            output.push_str(&format!(
                "{:>4}. {} {}\n",
                symptom.index() + 1,
                symptom.label(),
                format!("({})", symptom.id()).dimmed()
            ));
        }
        output
    }

    fn enrichment_title(report: &DiagnosisReport) -> String {
        match &report.enrichment {
            Enrichment::Encyclopedia { name, .. } => {
                format!("About {} ({})", report.prediction, name)
            }
            Enrichment::Narrative(_) => format!("About {}", report.prediction),
        }
    }

    fn format_enrichment(enrichment: &Enrichment) -> String {
        match enrichment {
            Enrichment::Encyclopedia { title, outcome, .. } => {
                let text = outcome.message(title);
                if outcome.is_summary() {
                    format!("\n{}\n", text)
                } else {
                    format!("\n{}\n", text.yellow())
                }
            }
            Enrichment::Narrative(narrative) => {
                let mut output = String::new();
                for section in &narrative.sections {
                    let text = section.text.display();
                    let text = if section.text.is_generated() {
                        text
                    } else {
                        text.red().to_string()
                    };
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        section.topic.heading().yellow().bold(),
                        text
                    ));
                }
                output
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}


#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use async_trait::async_trait;
    use early_detect_application::{
        ClassifierError, DiseaseClassifier, Encyclopedia, EncyclopediaEnricher, HospitalLocator,
        HospitalSearch, LazyHandle, RunDiagnosisInput, RunDiagnosisUseCase, SearchError,
        ensure_shape,
    };
    use early_detect_domain::{
        Age, DiseaseLabel, EncyclopediaOutcome, FeatureVector, Gender, HospitalResult,
        PatientInput, SchemaDescriptor,
    };
    use std::sync::{Arc, Mutex};

    const SUMMARY: &str = "A fungal infection, also called mycosis, is a disease caused by fungi.";

    struct FixedClassifier(SchemaDescriptor);

    #[async_trait]
    impl DiseaseClassifier for FixedClassifier {
        fn schema(&self) -> &SchemaDescriptor {
            &self.0
        }

        async fn predict(&self, vector: &FeatureVector) -> Result<DiseaseLabel, ClassifierError> {
            ensure_shape(&self.0, vector)?;
            DiseaseLabel::new("Fungal infection")
                .map_err(|e| ClassifierError::InvalidOutput(e.to_string()))
        }
    }

    struct FixedEncyclopedia;

    #[async_trait]
    impl Encyclopedia for FixedEncyclopedia {
        fn name(&self) -> &str {
            "Wikipedia"
        }

        async fn summarize(&self, _title: &str, _sentences: usize) -> EncyclopediaOutcome {
            EncyclopediaOutcome::Summary(SUMMARY.to_string())
        }
    }

    /// Returns more hits than asked for so truncation happens in the locator
    #[derive(Default)]
    struct SevenHits {
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HospitalSearch for SevenHits {
        async fn search(
            &self,
            query: &str,
            _max_results: usize,
        ) -> Result<Vec<HospitalResult>, SearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok((1..=7)
                .map(|i| {
                    HospitalResult::new(
                        format!("Clinic {}", i),
                        format!("https://clinic{}.example", i),
                        "Dermatology",
                    )
                })
                .collect())
        }
    }

    fn use_case(search: Arc<SevenHits>) -> RunDiagnosisUseCase {
        let catalog = SymptomCatalog::standard();
        RunDiagnosisUseCase::new(
            catalog,
            Arc::new(LazyHandle::<dyn DiseaseClassifier>::ready(Arc::new(FixedClassifier(
                catalog.descriptor(),
            )))),
            Arc::new(EncyclopediaEnricher::new(Arc::new(FixedEncyclopedia), 4)),
            HospitalLocator::new(search),
        )
    }

    fn itching_patient() -> PatientInput {
        PatientInput::new(Age::default(), Gender::Male)
            .with_symptoms(SymptomCatalog::standard(), ["itching"])
            .unwrap()
    }

    #[tokio::test]
    async fn test_rendered_report_with_location() {
        colored::control::set_override(false);
        let search = Arc::new(SevenHits::default());
        let report = use_case(search.clone())
            .execute(RunDiagnosisInput::new(itching_patient()).with_location("Boston"))
            .await
            .unwrap();

        let output = ReportFormatter::format(&report);
        assert!(output.contains("Predicted disease: Fungal infection"));
        assert!(output.contains(SUMMARY));
        assert!(output.contains("Hospitals near Boston"));
        assert_eq!(output.matches("Book/Visit:").count(), 5);
        assert!(output.contains("Book/Visit: https://clinic5.example"));
        assert!(!output.contains("clinic6"));
        assert_eq!(search.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rendered_report_without_location() {
        colored::control::set_override(false);
        let search = Arc::new(SevenHits::default());
        let report = use_case(search.clone())
            .execute(RunDiagnosisInput::new(itching_patient()).with_location("  "))
            .await
            .unwrap();

        let output = ReportFormatter::format(&report);
        assert!(output.contains("Predicted disease: Fungal infection"));
        assert!(output.contains(SUMMARY));
        assert!(!output.contains("Hospitals"));
        assert!(!output.contains("Book/Visit"));
        assert!(search.queries.lock().unwrap().is_empty());
    }
}
