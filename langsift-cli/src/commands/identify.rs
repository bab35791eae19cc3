//! Identify command implementation

use crate::config::CliConfig;
use crate::input::resolve_input;
use crate::output::OutputTarget;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use langsift_core::{
    Aggregator, LinguaIdentifier, OutputFormat, PipelineConfig, RenderOptions, Workflow,
};
use std::path::PathBuf;

/// Arguments for the identify command
#[derive(Debug, Args)]
pub struct IdentifyArgs {
    /// UTF-8 file, or directory of UTF-8 files
    #[arg(short, long, value_name = "PATH", required = true)]
    pub input: PathBuf,

    /// Output format: json or stdout (case-insensitive)
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Segmentation: line-by-line or whole-text (case-insensitive)
    #[arg(short, long, value_name = "WORKFLOW", value_parser = parse_workflow)]
    pub workflow: Workflow,

    /// Number of top languages to report per unit
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 1, value_parser = parse_top_n)]
    pub top_n: usize,

    /// JSON output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LANGSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also visit files in nested directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|e: langsift_core::LangsiftError| e.to_string())
}

fn parse_workflow(value: &str) -> Result<Workflow, String> {
    value.parse().map_err(|e: langsift_core::LangsiftError| e.to_string())
}

fn parse_top_n(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("N should be a positive number, got \"{value}\"")),
    }
}

impl IdentifyArgs {
    /// Execute the identify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting language identification");
        log::debug!("Arguments: {:?}", self);

        // Configuration problems are reported before any file is read
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let input = resolve_input(&self.input)?;
        let pipeline = PipelineConfig::builder(self.workflow)
            .top_n(self.top_n)
            .recursive(self.recursive)
            .build()?;
        let target = OutputTarget::resolve(self.format, self.output.as_deref(), &config.output)?;

        let identifier = LinguaIdentifier::new(config.model.clone())
            .context("Failed to initialise the language detector")?;

        let mut progress = ProgressReporter::new(self.quiet);
        let results = Aggregator::new(&identifier, pipeline).run_with_observer(&input, &mut progress);
        progress.finish();
        let results = results
            .with_context(|| format!("Identification failed for {}", self.input.display()))?;

        let options = RenderOptions {
            pretty_json: config.output.pretty_json,
        };
        target.write(&results, self.format, &options)?;

        log::info!("Done: {} record(s)", results.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
