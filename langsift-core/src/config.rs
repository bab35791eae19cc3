//! Pipeline and model configuration

use crate::error::{LangsiftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How input files are split into classifiable units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workflow {
    /// One unit per non-empty line, tagged with its line number
    LineByLine,
    /// One unit per file, newlines escaped
    WholeText,
}

impl Workflow {
    /// All workflows, in the order they are listed to users
    pub const ALL: [Workflow; 2] = [Workflow::LineByLine, Workflow::WholeText];

    /// Canonical name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Workflow::LineByLine => "line-by-line",
            Workflow::WholeText => "whole-text",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workflow {
    type Err = LangsiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "line-by-line" => Ok(Workflow::LineByLine),
            "whole-text" => Ok(Workflow::WholeText),
            _ => Err(LangsiftError::Config(format!(
                "workflow should be either \"line-by-line\" or \"whole-text\", got \"{s}\""
            ))),
        }
    }
}

/// Output encoding of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array written to a file
    Json,
    /// Tab-separated lines written to standard output
    Stdout,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Stdout];

    /// Canonical name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Stdout => "stdout",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LangsiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "stdout" => Ok(OutputFormat::Stdout),
            _ => Err(LangsiftError::Config(format!(
                "output format should be either \"json\" or \"stdout\", got \"{s}\""
            ))),
        }
    }
}

/// Settings fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    workflow: Workflow,
    top_n: usize,
    recursive: bool,
}

impl PipelineConfig {
    /// Create a builder for the given workflow
    pub fn builder(workflow: Workflow) -> PipelineConfigBuilder {
        PipelineConfigBuilder {
            config: PipelineConfig {
                workflow,
                top_n: 1,
                recursive: false,
            },
        }
    }

    /// Segmentation mode
    pub fn workflow(&self) -> Workflow {
        self.workflow
    }

    /// Number of languages requested per unit, always at least 1
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Whether nested directories are walked
    pub fn recursive(&self) -> bool {
        self.recursive
    }
}

/// Builder for [`PipelineConfig`]
#[derive(Debug)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set how many languages to request per unit
    pub fn top_n(mut self, n: usize) -> Self {
        self.config.top_n = n;
        self
    }

    /// Walk nested directories instead of only the top level
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        if self.config.top_n == 0 {
            return Err(LangsiftError::Config(
                "N should be a positive number".to_string(),
            ));
        }

        Ok(self.config)
    }
}

/// Bounds and thresholds handed to the language model once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Texts shorter than this many bytes are reported as unknown
    pub min_bytes: usize,

    /// Texts longer than this many bytes are truncated before classification
    pub max_bytes: usize,

    /// Minimum probability for a result to be flagged reliable
    ///
    /// Probabilities are relative confidences spread over every supported
    /// language, so a clear winner rarely exceeds 0.5.
    pub reliability_threshold: f64,

    /// Trade accuracy for speed and memory
    pub low_accuracy: bool,

    /// Load every language model up front instead of on first use
    pub preload_models: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            min_bytes: 0,
            max_bytes: 1000,
            reliability_threshold: 0.3,
            low_accuracy: false,
            preload_models: false,
        }
    }
}

impl ModelConfig {
    /// Check that the bounds are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_bytes == 0 {
            return Err(LangsiftError::Config(
                "max_bytes must be greater than 0".to_string(),
            ));
        }
        if self.min_bytes > self.max_bytes {
            return Err(LangsiftError::Config(format!(
                "min_bytes ({}) must not exceed max_bytes ({})",
                self.min_bytes, self.max_bytes
            )));
        }
        if !(0.0..=1.0).contains(&self.reliability_threshold) {
            return Err(LangsiftError::Config(format!(
                "reliability_threshold must be within [0, 1], got {}",
                self.reliability_threshold
            )));
        }
        Ok(())
    }
}
