//! Batch language identification
//!
//! This crate turns a file or a directory of UTF-8 files into an ordered set
//! of language predictions. Input is split into units (one per line, or one
//! per file), each unit is sent to a [`LanguageIdentifier`], and the answers
//! are collected into a [`ResultSet`] that can be rendered as JSON or as
//! tab-separated text.
//!
//! ```no_run
//! use langsift_core::{
//!     Aggregator, InputPath, LinguaIdentifier, ModelConfig, OutputFormat, PipelineConfig,
//!     RenderOptions, Workflow,
//! };
//!
//! # fn main() -> langsift_core::Result<()> {
//! let identifier = LinguaIdentifier::new(ModelConfig::default())?;
//! let config = PipelineConfig::builder(Workflow::LineByLine).top_n(2).build()?;
//! let results = Aggregator::new(&identifier, config).run(&InputPath::new("corpus")?)?;
//! langsift_core::render(&results, OutputFormat::Stdout, std::io::stdout(), &RenderOptions::default())?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod dto;
pub mod error;
pub mod identify;
pub mod input;
pub mod output;
pub mod segment;

// Re-export key types
pub use aggregate::{Aggregator, NoopObserver, RunObserver};
pub use config::{ModelConfig, OutputFormat, PipelineConfig, PipelineConfigBuilder, Workflow};
pub use dto::{LanguageResult, ResultRecord, ResultSet, TextUnit, UNKNOWN_LANGUAGE};
pub use error::{LangsiftError, Result};
pub use identify::{Classification, Invoker, LanguageIdentifier};
pub use input::InputPath;
pub use output::{render, JsonFormatter, OutputFormatter, RenderOptions, TsvFormatter};
pub use segment::{escape_newlines, SegmentedFile, Segmenter, Segments};

#[cfg(feature = "lingua")]
pub use identify::LinguaIdentifier;

/// Identify the languages of `path` with the bundled detector
///
/// Convenience wrapper building a [`LinguaIdentifier`] with default bounds.
#[cfg(feature = "lingua")]
pub fn identify_path<P: AsRef<std::path::Path>>(
    path: P,
    workflow: Workflow,
    top_n: usize,
) -> Result<ResultSet> {
    let identifier = LinguaIdentifier::new(ModelConfig::default())?;
    let config = PipelineConfig::builder(workflow).top_n(top_n).build()?;
    let input = InputPath::new(path.as_ref().to_path_buf())?;
    Aggregator::new(&identifier, config).run(&input)
}
