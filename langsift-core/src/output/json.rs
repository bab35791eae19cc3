//! JSON output formatter

use super::OutputFormatter;
use crate::dto::ResultSet;
use crate::error::{LangsiftError, Result};
use std::io::Write;

/// JSON formatter - writes the result set as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a pretty-printing JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Toggle indentation
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn render(&mut self, results: &ResultSet) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, results)?;
        } else {
            serde_json::to_writer(&mut self.writer, results)?;
        }
        writeln!(self.writer).map_err(LangsiftError::Output)?;
        self.writer.flush().map_err(LangsiftError::Output)?;
        Ok(())
    }
}
