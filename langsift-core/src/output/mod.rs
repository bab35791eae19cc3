//! Rendering a result set

use crate::config::OutputFormat;
use crate::dto::ResultSet;
use crate::error::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write every record of `results`, in order, and flush
    fn render(&mut self, results: &ResultSet) -> Result<()>;
}

pub mod json;
pub mod tsv;

pub use json::JsonFormatter;
pub use tsv::TsvFormatter;

/// Knobs shared by the formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// Render `results` to `writer` in the requested format
pub fn render<W: Write>(
    results: &ResultSet,
    format: OutputFormat,
    writer: W,
    options: &RenderOptions,
) -> Result<()> {
    match format {
        OutputFormat::Json => JsonFormatter::new(writer)
            .pretty(options.pretty_json)
            .render(results),
        OutputFormat::Stdout => TsvFormatter::new(writer).render(results),
    }
}
