//! CLI entrypoint for early-detect
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use early_detect_application::{
    DiagnosisParams, DiseaseClassifier, EncyclopediaEnricher, Enricher, HospitalLocator,
    LazyHandle, NarrativeEnricher, NoProgress, ProgressNotifier, RunDiagnosisInput,
    RunDiagnosisUseCase, TextGenerator,
};
use early_detect_domain::{EnrichmentMode, PatientInput, SymptomCatalog};
use early_detect_infrastructure::{
    ClassifierLoader, ConfigLoader, DuckDuckGoSearch, FileConfig, GeneratorLoader,
    WikipediaClient, build_client,
};
use early_detect_presentation::{
    Cli, DiagnosisRepl, OutputConfig, ProgressReporter, ReplConfig, ReportFormatter,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let catalog = SymptomCatalog::standard();

    if cli.list_symptoms {
        print!("{}", ReportFormatter::format_symptom_list(catalog));
        return Ok(());
    }

    info!("Starting early-detect");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let lines: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", lines.join("\n"));
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    output.apply_color();

    let mut params = config.diagnosis_params();
    if let Some(mode) = cli.enrichment {
        params = params.with_enrichment_mode(mode.into());
    }
    info!("Enrichment: {}", params.enrichment_mode);

    // === Dependency Injection ===
    let use_case = build_use_case(&config, params, catalog)?;

    // Interactive mode
    if cli.interactive {
        // Surface a missing or incompatible model before the form is filled in
        use_case.warm_up().await?;

        let repl = DiagnosisRepl::new(use_case)
            .with_format(output.format)
            .with_config(ReplConfig {
                show_progress: !cli.quiet && config.repl.show_progress,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            });

        repl.run().await?;
        return Ok(());
    }

    // Single run mode - symptoms come from flags
    if cli.symptoms.is_empty() {
        warn!("No symptoms selected; predicting on an empty checklist (see --list-symptoms)");
    }

    let patient = PatientInput::new(cli.age, cli.gender).with_symptoms(catalog, &cli.symptoms)?;
    let input = RunDiagnosisInput::new(patient).with_location(cli.location.unwrap_or_default());

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let report = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    println!("{}", ReportFormatter::render(&report, output.format));

    Ok(())
}

/// Install the console subscriber, plus a non-blocking file writer for `--log-file`.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(level))
            .with(console)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(Some(guard))
}

fn build_use_case(
    config: &FileConfig,
    params: DiagnosisParams,
    catalog: &'static SymptomCatalog,
) -> Result<RunDiagnosisUseCase> {
    let client = build_client(&config.http).context("Failed to build HTTP client")?;

    let classifier: Arc<LazyHandle<dyn DiseaseClassifier>> = Arc::new(LazyHandle::new(
        ClassifierLoader::new(config.classifier.clone(), client.clone(), catalog),
    ));

    let enricher: Arc<dyn Enricher> = match params.enrichment_mode {
        EnrichmentMode::Encyclopedia => {
            let encyclopedia = WikipediaClient::new(client.clone(), &config.encyclopedia.base_url)
                .with_auto_suggest(config.encyclopedia.auto_suggest);
            Arc::new(EncyclopediaEnricher::new(
                Arc::new(encyclopedia),
                params.summary_sentences,
            ))
        }
        EnrichmentMode::Narrative => {
            let generator: Arc<LazyHandle<dyn TextGenerator>> = Arc::new(LazyHandle::new(
                GeneratorLoader::new(config.generator.clone(), client.clone()),
            ));
            Arc::new(NarrativeEnricher::new(generator))
        }
    };

    let locator = HospitalLocator::new(Arc::new(DuckDuckGoSearch::new(client, &config.search)));

    Ok(RunDiagnosisUseCase::new(catalog, classifier, enricher, locator).with_params(params))
}
