mod cli;
mod config;
mod logging;

use anyhow::{bail, Context};
use cli::Args;
use config::ConfigFile;
use dep_health::adapters::outbound::console::StderrProgressReporter;
use dep_health::adapters::outbound::filesystem::FileSystemReader;
use dep_health::adapters::outbound::memory::InMemoryVulnerabilityStore;
use dep_health::application::dto::{HealthRequest, HealthResponse, OutputFormat};
use dep_health::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_health::application::use_cases::{AnalyzeDependenciesUseCase, LoadCorpusUseCase};
use dep_health::health_analysis::domain::{parse_coordinate_list, DependencyCoordinate, Severity};
use dep_health::health_analysis::services::ThresholdConfig;
use dep_health::ports::outbound::LoadMode;
use dep_health::shared::error::ExitCode;
use dep_health::shared::security::read_input_file;
use dep_health::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    logging::init_logging(args.log_level.as_deref().or(config.log_level.as_deref()));

    let corpus_paths = resolve_corpus_paths(&args, &config)?;
    let coordinates = collect_coordinates(&args)?;
    let threshold = resolve_threshold(&args, &config)?;
    let format = resolve_format(&args, &config)?;

    let mut ignored_cves = config.ignored_ids();
    ignored_cves.extend(args.ignore_cves.iter().cloned());

    // Load corpus files; the first replaces, the rest merge
    let store = Arc::new(InMemoryVulnerabilityStore::new());
    let loader = LoadCorpusUseCase::new(
        FileSystemReader::new(),
        Arc::clone(&store),
        StderrProgressReporter::new(),
    );
    for (i, path) in corpus_paths.iter().enumerate() {
        let mode = if i == 0 {
            LoadMode::Replace
        } else {
            LoadMode::Merge
        };
        loader.execute(path, mode)?;
    }

    let use_case = AnalyzeDependenciesUseCase::new(store, StderrProgressReporter::new());
    let request = HealthRequest::new(coordinates, threshold, ignored_cves)
        .with_ignore_reasons(config.ignore_reasons());
    let response = use_case.execute(request);

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    print_summary(&response);

    if response.has_findings_above_threshold {
        Ok(ExitCode::VulnerabilitiesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

fn resolve_corpus_paths(args: &Args, config: &ConfigFile) -> Result<Vec<PathBuf>> {
    if !args.corpus.is_empty() {
        return Ok(args.corpus.clone());
    }
    match &config.corpus {
        Some(path) => Ok(vec![path.clone()]),
        None => bail!(
            "No vulnerability corpus specified.\n\n\
             💡 Hint: Pass --corpus <PATH> or set `corpus` in {}",
            config::CONFIG_FILENAME
        ),
    }
}

fn collect_coordinates(args: &Args) -> Result<Vec<DependencyCoordinate>> {
    let mut coordinates = Vec::new();

    if let Some(path) = &args.dependencies {
        let content = read_input_file(path, "dependency list")?;
        let listed = parse_coordinate_list(&content)
            .with_context(|| format!("Invalid dependency list: {}", path.display()))?;
        coordinates.extend(listed);
    }

    for input in &args.coordinates {
        coordinates.push(input.parse::<DependencyCoordinate>()?);
    }

    if coordinates.is_empty() {
        bail!(
            "No dependencies to analyze.\n\n\
             💡 Hint: Pass group:name:version coordinates or a --dependencies file"
        );
    }
    Ok(coordinates)
}

/// CLI thresholds override config thresholds; a CVSS threshold wins over a severity one.
fn resolve_threshold(args: &Args, config: &ConfigFile) -> Result<ThresholdConfig> {
    if let Some(score) = args.cvss_threshold {
        return Ok(ThresholdConfig::Cvss(score));
    }
    if let Some(severity) = args.severity_threshold {
        return Ok(ThresholdConfig::Severity(severity));
    }
    if let Some(score) = config.cvss_threshold {
        return Ok(ThresholdConfig::Cvss(score));
    }
    match &config.severity_threshold {
        Some(level) => {
            let severity = level
                .parse::<Severity>()
                .map_err(|e| anyhow::anyhow!("Invalid config: severity_threshold: {}", e))?;
            Ok(ThresholdConfig::Severity(severity))
        }
        None => Ok(ThresholdConfig::None),
    }
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match &config.format {
        Some(format) => format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e)),
        None => Ok(OutputFormat::Json),
    }
}

fn print_summary(response: &HealthResponse) {
    let (findings, affected) = response.summarize();
    let total = response.dependencies.len();
    if findings == 0 {
        eprintln!("{}", format!("✅ No known vulnerabilities in {} dependencies", total).green());
    } else if response.has_findings_above_threshold {
        eprintln!(
            "{}",
            format!(
                "❌ {} vulnerabilities in {} of {} dependencies (threshold exceeded)",
                findings, affected, total
            )
            .red()
            .bold()
        );
    } else {
        eprintln!(
            "{}",
            format!(
                "⚠️  {} vulnerabilities in {} of {} dependencies (below threshold)",
                findings, affected, total
            )
            .yellow()
        );
    }
}
