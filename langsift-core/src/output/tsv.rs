//! Tab-separated output formatter

use super::OutputFormatter;
use crate::dto::ResultSet;
use crate::error::{LangsiftError, Result};
use std::io::{self, Write};

/// Fractional digits used for probability and proportion
pub const FLOAT_PRECISION: usize = 9;

/// TSV formatter - `source, language, probability, proportion, text` per line
///
/// Reliability and line numbers are only carried by the JSON encoding.
pub struct TsvFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TsvFormatter<W> {
    /// Create a new TSV formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TsvFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TsvFormatter<W> {
    fn render(&mut self, results: &ResultSet) -> Result<()> {
        for record in results {
            writeln!(
                self.writer,
                "{}\t{}\t{:.prec$}\t{:.prec$}\t{}",
                record.source.display(),
                record.language,
                record.probability,
                record.proportion,
                record.text,
                prec = FLOAT_PRECISION,
            )
            .map_err(LangsiftError::Output)?;
        }
        self.writer.flush().map_err(LangsiftError::Output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample;

    fn render(results: &ResultSet) -> String {
        let mut buffer = Vec::new();
        TsvFormatter::new(&mut buffer).render(results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_line_per_record_with_five_columns() {
        let output = render(&sample::results(true));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.split('\t').count(), 5);
        }
        assert_eq!(
            lines[0],
            "corpus/0.txt\ten\t0.997049868\t1.000000000\tThis text is written in English."
        );
    }

    #[test]
    fn test_line_number_and_reliability_not_emitted() {
        let output = render(&sample::results(true));
        assert!(!output.contains("true"));
        let columns: Vec<&str> = output.lines().next().unwrap().split('\t').collect();
        assert_eq!(columns[1], "en");
        assert_ne!(columns[0], "1");
    }

    #[test]
    fn test_non_ascii_text_column() {
        let output = render(&sample::results(false));
        assert!(output.ends_with("\t这是中文的。\n"));
        assert!(output.contains("\t0.999989986\t"));
    }
}
