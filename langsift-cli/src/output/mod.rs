//! Output destination handling

use crate::config::OutputConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use langsift_core::{render, OutputFormat, RenderOptions, ResultSet};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};

/// Where rendered results go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output stream
    Stdout,
    /// A JSON file
    File(PathBuf),
}

impl OutputTarget {
    /// Pick the destination for `format`
    ///
    /// JSON needs a file: `--output` wins over the config file's
    /// `json_path`; with neither, the user is prompted when stdin is a
    /// terminal. `stdout` output never goes to a file.
    pub fn resolve(
        format: OutputFormat,
        output: Option<&Path>,
        config: &OutputConfig,
    ) -> Result<Self> {
        match format {
            OutputFormat::Stdout => {
                if let Some(path) = output {
                    return Err(CliError::InvalidOption(format!(
                        "--output {} requires --format json",
                        path.display()
                    ))
                    .into());
                }
                Ok(OutputTarget::Stdout)
            }
            OutputFormat::Json => {
                if let Some(path) = output.or(config.json_path.as_deref()) {
                    return Ok(OutputTarget::File(path.to_path_buf()));
                }
                if io::stdin().is_terminal() {
                    return prompt_for_path().map(OutputTarget::File);
                }
                Err(CliError::MissingDestination.into())
            }
        }
    }

    /// Render `results` into this destination
    pub fn write(
        &self,
        results: &ResultSet,
        format: OutputFormat,
        options: &RenderOptions,
    ) -> Result<()> {
        match self {
            OutputTarget::Stdout => render(results, format, io::stdout().lock(), options)
                .context("Failed to write results to stdout"),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                render(results, format, BufWriter::new(file), options)
                    .with_context(|| format!("Failed to write results to {}", path.display()))?;
                log::info!("Wrote {} record(s) to {}", results.len(), path.display());
                Ok(())
            }
        }
    }
}

fn prompt_for_path() -> Result<PathBuf> {
    let answer = dialoguer::Input::<String>::new()
        .with_prompt("JSON output file")
        .interact_text()
        .context("Failed to read the JSON output file name")?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::MissingDestination.into());
    }
    Ok(PathBuf::from(answer))
}
