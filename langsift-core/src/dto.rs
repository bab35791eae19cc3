//! Data carried between pipeline stages

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Language code reported when the model cannot decide
pub const UNKNOWN_LANGUAGE: &str = "und";

/// One prediction returned by a language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageResult {
    /// Language code, e.g. `en`
    pub language: String,
    /// Model confidence in `[0, 1]`
    pub probability: f64,
    /// Whether the model considers the prediction reliable
    pub is_reliable: bool,
    /// Share of the text attributed to this language, in `[0, 1]`
    pub proportion: f64,
}

impl LanguageResult {
    /// The sentinel result for text the model cannot classify
    pub fn unknown() -> Self {
        Self {
            language: UNKNOWN_LANGUAGE.to_string(),
            probability: 0.0,
            is_reliable: false,
            proportion: 0.0,
        }
    }
}

/// A piece of text submitted for a single classification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    /// Text to classify
    pub content: String,
    /// File the text came from
    pub source: PathBuf,
    /// 1-based line number, set only when segmenting line by line
    pub line_number: Option<usize>,
}

/// One output row: a unit's text paired with one model prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Classified text, newline-escaped in the whole-text workflow
    pub text: String,
    /// Language code
    pub language: String,
    /// Model confidence
    pub probability: f64,
    /// Reliability flag
    #[serde(rename = "reliable")]
    pub is_reliable: bool,
    /// Share of the text in this language
    pub proportion: f64,
    /// Line number, present only for line-by-line records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    /// Originating file
    pub source: PathBuf,
}

impl ResultRecord {
    /// Build a record from a unit and one of its predictions
    pub fn new(unit: &TextUnit, result: LanguageResult) -> Self {
        Self {
            text: unit.content.clone(),
            language: result.language,
            probability: result.probability,
            is_reliable: result.is_reliable,
            proportion: result.proportion,
            line_number: unit.line_number,
            source: unit.source.clone(),
        }
    }
}

/// Insertion-ordered, append-only collection of records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was produced
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&ResultRecord> {
        self.records.get(index)
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
