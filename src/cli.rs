use clap::Parser;
use dep_health::application::dto::OutputFormat;
use dep_health::health_analysis::domain::Severity;
use std::path::PathBuf;

/// Check resolved dependencies against a local vulnerability corpus
#[derive(Parser, Debug)]
#[command(name = "dep-health")]
#[command(version)]
#[command(
    about = "Check resolved dependencies against a local vulnerability corpus",
    long_about = None
)]
pub struct Args {
    /// Dependencies to analyze in group:name:version notation
    #[arg(value_name = "COORDINATE")]
    pub coordinates: Vec<String>,

    /// Vulnerability corpus file (JSON or YAML). Can be given multiple
    /// times; later files are merged into earlier ones
    #[arg(short, long, value_name = "PATH")]
    pub corpus: Vec<PathBuf>,

    /// File with one group:name:version coordinate per line
    #[arg(short, long, value_name = "PATH")]
    pub dependencies: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./dep-health.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail only on findings with a CVSS score at or above this value
    #[arg(
        long,
        value_name = "SCORE",
        value_parser = parse_cvss_threshold,
        conflicts_with = "severity_threshold"
    )]
    pub cvss_threshold: Option<f64>,

    /// Fail only on findings at or above this severity (low, medium, high, critical)
    #[arg(long, value_name = "LEVEL")]
    pub severity_threshold: Option<Severity>,

    /// Advisory id to exclude from threshold evaluation. Can be given multiple times
    #[arg(long = "ignore-cve", value_name = "ID")]
    pub ignore_cves: Vec<String>,

    /// Log filter for diagnostics on stderr (e.g. warn, debug, dep_health=trace)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_cvss_threshold(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("Invalid CVSS score: {}", value))?;
    if (0.0..=10.0).contains(&score) {
        Ok(score)
    } else {
        Err(format!(
            "CVSS threshold must be between 0.0 and 10.0, got {}",
            value
        ))
    }
}
