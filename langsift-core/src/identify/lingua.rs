//! Language identification backed by the `lingua` crate

use super::LanguageIdentifier;
use crate::config::ModelConfig;
use crate::dto::LanguageResult;
use crate::error::Result;
use ::lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use std::collections::HashMap;

/// Identifier over every language lingua knows, with CLD3-style byte bounds
pub struct LinguaIdentifier {
    detector: LanguageDetector,
    config: ModelConfig,
}

impl LinguaIdentifier {
    /// Build a detector for all supported languages
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = LanguageDetectorBuilder::from_all_languages();
        if config.low_accuracy {
            builder.with_low_accuracy_mode();
        }
        if config.preload_models {
            builder.with_preloaded_language_models();
        }

        log::debug!(
            "Language detector ready (bytes {}..={}, reliability >= {})",
            config.min_bytes,
            config.max_bytes,
            config.reliability_threshold
        );

        Ok(Self {
            detector: builder.build(),
            config,
        })
    }

    /// The configuration the detector was built with
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// ISO 639-1 codes of every language the detector can report, sorted
    pub fn supported_languages() -> Vec<String> {
        let mut codes: Vec<String> = Language::all()
            .into_iter()
            .map(|language| language.iso_code_639_1().to_string())
            .collect();
        codes.sort();
        codes
    }

    /// Apply the byte bounds; `None` means the text is too short to classify
    fn bounded<'t>(&self, text: &'t str) -> Option<&'t str> {
        if text.len() < self.config.min_bytes {
            return None;
        }
        Some(truncate_at_char_boundary(text, self.config.max_bytes))
    }

    /// Languages with non-zero confidence, best first
    fn ranked(&self, text: &str) -> Vec<(Language, f64)> {
        self.detector
            .compute_language_confidence_values(text)
            .into_iter()
            .filter(|(_, confidence)| *confidence > 0.0)
            .collect()
    }

    fn result(&self, language: Language, probability: f64, proportion: f64) -> LanguageResult {
        LanguageResult {
            language: language.iso_code_639_1().to_string(),
            probability,
            is_reliable: probability >= self.config.reliability_threshold,
            proportion,
        }
    }

    /// Share of `text` attributed to each language by span detection
    fn proportions(&self, text: &str) -> HashMap<Language, f64> {
        let mut bytes: HashMap<Language, usize> = HashMap::new();
        let mut total = 0usize;
        for span in self.detector.detect_multiple_languages_of(text) {
            let len = span.end_index().saturating_sub(span.start_index());
            *bytes.entry(span.language()).or_default() += len;
            total += len;
        }

        if total == 0 {
            return HashMap::new();
        }
        bytes
            .into_iter()
            .map(|(language, len)| (language, len as f64 / total as f64))
            .collect()
    }
}

impl LanguageIdentifier for LinguaIdentifier {
    fn best(&self, text: &str) -> Result<LanguageResult> {
        let Some(text) = self.bounded(text) else {
            return Ok(LanguageResult::unknown());
        };

        let ranked = self.ranked(text);
        let Some(&(language, probability)) = ranked.first() else {
            return Ok(LanguageResult::unknown());
        };

        let shares = reconcile_shares(language, self.proportions(text));
        Ok(self.result(language, probability, share_of(&shares, language)))
    }

    fn top_n(&self, text: &str, n: usize) -> Result<Vec<LanguageResult>> {
        let Some(text) = self.bounded(text) else {
            return Ok(vec![LanguageResult::unknown()]);
        };

        let ranked = self.ranked(text);
        let Some(&(leader, _)) = ranked.first() else {
            return Ok(vec![LanguageResult::unknown()]);
        };

        let shares = reconcile_shares(leader, self.proportions(text));
        Ok(ranked
            .into_iter()
            .take(n)
            .map(|(language, probability)| {
                self.result(language, probability, share_of(&shares, language))
            })
            .collect())
    }
}

/// Span shares, unless they disagree with the confidence ranking
///
/// When span detection finds nothing, or gives some other language a larger
/// share than the ranked `leader`, the whole text is attributed to the
/// leader.
fn reconcile_shares(leader: Language, shares: HashMap<Language, f64>) -> HashMap<Language, f64> {
    let leader_share = share_of(&shares, leader);
    let contradicted = shares.values().any(|share| *share > leader_share);
    if leader_share == 0.0 || contradicted {
        return HashMap::from([(leader, 1.0)]);
    }
    shares
}

fn share_of(shares: &HashMap<Language, f64>, language: Language) -> f64 {
    shares.get(&language).copied().unwrap_or(0.0)
}

/// Longest prefix of `text` no longer than `max_bytes` that ends on a char boundary
fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
