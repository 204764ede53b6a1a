//! Line-edited intake form

use super::parse::{apply_symptom_selection, parse_age, parse_gender};
use crate::output::console::ReportFormatter;
use colored::Colorize;
use early_detect_application::RunDiagnosisInput;
use early_detect_domain::{Age, PatientInput, SymptomCatalog};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::PathBuf;
use tracing::warn;

const HISTORY_SIZE: usize = 500;

/// Asks for age, gender, symptoms and location, one prompt at a time.
///
/// Ctrl-C or Ctrl-D at any prompt cancels the form.
pub struct IntakeForm {
    editor: Reedline,
    catalog: &'static SymptomCatalog,
    checklist_shown: bool,
}

impl IntakeForm {
    pub fn new(catalog: &'static SymptomCatalog, history_path: Option<PathBuf>) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Intake history disabled: {}", e),
            }
        }

        Self {
            editor,
            catalog,
            checklist_shown: false,
        }
    }

    /// Read one line; `None` when the user cancelled.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(Some(line.trim().to_string())),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
        }
    }

    /// Fill in the whole form; `None` when the user cancelled.
    pub fn collect(&mut self) -> io::Result<Option<RunDiagnosisInput>> {
        let age = loop {
            let Some(answer) = self.ask(&format!("Age [{}]", Age::DEFAULT))? else {
                return Ok(None);
            };
            match parse_age(&answer) {
                Ok(age) => break age,
                Err(e) => eprintln!("{} {}", "x".red(), e),
            }
        };

        let gender = loop {
            let Some(answer) = self.ask("Gender (male/female) [male]")? else {
                return Ok(None);
            };
            match parse_gender(&answer) {
                Ok(gender) => break gender,
                Err(e) => eprintln!("{} {}", "x".red(), e),
            }
        };

        if !self.checklist_shown {
            println!("\n{}", ReportFormatter::format_symptom_list(self.catalog));
            self.checklist_shown = true;
        }
        println!(
            "{}",
            "Enter symptom numbers or names separated by commas. '?' shows the list, blank finishes."
                .dimmed()
        );

        let mut patient = PatientInput::new(age, gender);
        loop {
            let label = format!("Symptoms ({} selected)", patient.selected_count());
            let Some(answer) = self.ask(&label)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                if patient.selected_count() == 0 {
                    println!("{}", "No symptoms selected.".yellow());
                }
                break;
            }
            if answer == "?" {
                println!("{}", ReportFormatter::format_symptom_list(self.catalog));
                continue;
            }
            if let Err(e) = apply_symptom_selection(&mut patient, self.catalog, &answer) {
                eprintln!("{} {}", "x".red(), e);
            }
        }

        let Some(location) = self.ask("Location (blank to skip hospital search)")? else {
            return Ok(None);
        };

        Ok(Some(RunDiagnosisInput::new(patient).with_location(location)))
    }
}
