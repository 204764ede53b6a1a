//! Interactive diagnosis loop

use super::form::IntakeForm;
use crate::config::ReplConfig;
use crate::output::console::ReportFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use early_detect_application::{RunDiagnosisInput, RunDiagnosisUseCase};
use early_detect_domain::OutputFormat;

/// Repeats intake form, diagnosis and report until the user quits
pub struct DiagnosisRepl {
    use_case: RunDiagnosisUseCase,
    format: OutputFormat,
    config: ReplConfig,
}

impl DiagnosisRepl {
    pub fn new(use_case: RunDiagnosisUseCase) -> Self {
        Self {
            use_case,
            format: OutputFormat::Full,
            config: ReplConfig::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive loop
    pub async fn run(&self) -> std::io::Result<()> {
        let mut form = IntakeForm::new(self.use_case.catalog(), self.config.history_path());

        self.print_welcome();

        loop {
            let Some(input) = form.collect()? else {
                println!("Bye!");
                break;
            };

            self.process(input).await;

            match form.ask("Another diagnosis? [Y/n]")? {
                Some(answer) if !answer.to_lowercase().starts_with('n') => continue,
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Early Disease Detection - Intake      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Answer each question and press Enter. Ctrl-D quits.");
        println!(
            "{}",
            "This tool is not a medical device. Always consult a doctor.".dimmed()
        );
        println!();
    }

    async fn process(&self, input: RunDiagnosisInput) {
        println!();

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(report) => println!("{}", ReportFormatter::render(&report, self.format)),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        println!();
    }
}
