//! Progress reporting for diagnosis runs

use colored::Colorize;
use early_detect_application::{ProgressNotifier, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

fn stage_display_name(stage: Stage) -> &'static str {
    match stage {
        Stage::LoadModel => "Loading classifier",
        Stage::Classify => "Classifying symptoms",
        Stage::Enrich => "Looking up disease information",
        Stage::LocateHospitals => "Searching for hospitals",
    }
}

/// Reports progress with an animated spinner per stage
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", stage_display_name(stage)));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let name = stage_display_name(stage);
        if success {
            pb.finish_with_message(format!("{} {}", "v".green(), name));
        } else {
            pb.finish_with_message(format!("{} {} (failed)", "x".red(), name));
        }
    }

    fn on_stage_skipped(&self, stage: Stage) {
        eprintln!(
            "{} {} (skipped)",
            "-".dimmed(),
            stage_display_name(stage).dimmed()
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage) {
        eprintln!("{} {}", "->".cyan(), stage_display_name(stage).bold());
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage.as_str());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage.as_str());
        }
    }

    fn on_stage_skipped(&self, stage: Stage) {
        eprintln!("  {} {} (skipped)", "-".dimmed(), stage.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_start(Stage::Classify);
        reporter.on_stage_start(Stage::Enrich);
        reporter.on_stage_complete(Stage::Enrich, true);
        assert!(reporter.spinner.lock().unwrap().is_none());

        // Completing with no active spinner is a no-op.
        reporter.on_stage_complete(Stage::LocateHospitals, false);
    }

    #[test]
    fn test_every_stage_has_a_name() {
        for stage in [Stage::LoadModel, Stage::Classify, Stage::Enrich, Stage::LocateHospitals] {
            assert!(!stage_display_name(stage).is_empty());
        }
    }
}
