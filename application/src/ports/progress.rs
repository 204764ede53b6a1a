//! Progress notification port
//!
//! Defines the interface for reporting progress while the diagnosis pipeline
//! waits on external services.

/// Pipeline stage that talks to an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadModel,
    Classify,
    Enrich,
    LocateHospitals,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::LoadModel => "load_model",
            Stage::Classify => "classify",
            Stage::Enrich => "enrich",
            Stage::LocateHospitals => "locate_hospitals",
        }
    }
}

/// Callback for progress updates during a diagnosis run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called when a stage is skipped (e.g. no location for the hospital search)
    fn on_stage_skipped(&self, _stage: Stage) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
