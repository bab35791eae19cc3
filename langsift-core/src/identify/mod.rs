//! Language identification boundary and per-unit dispatch

use crate::dto::{LanguageResult, TextUnit};
use crate::error::Result;

#[cfg(feature = "lingua")]
pub mod lingua;

#[cfg(feature = "lingua")]
pub use self::lingua::LinguaIdentifier;

/// A language identification model
///
/// Implementations receive non-empty UTF-8 text. Results from
/// [`top_n`](LanguageIdentifier::top_n) are ranked best first and may hold
/// fewer than `n` entries.
pub trait LanguageIdentifier {
    /// The single most likely language
    fn best(&self, text: &str) -> Result<LanguageResult>;

    /// Up to `n` most likely languages, best first
    fn top_n(&self, text: &str, n: usize) -> Result<Vec<LanguageResult>>;
}

impl<T: LanguageIdentifier + ?Sized> LanguageIdentifier for &T {
    fn best(&self, text: &str) -> Result<LanguageResult> {
        (**self).best(text)
    }

    fn top_n(&self, text: &str, n: usize) -> Result<Vec<LanguageResult>> {
        (**self).top_n(text, n)
    }
}

impl<T: LanguageIdentifier + ?Sized> LanguageIdentifier for Box<T> {
    fn best(&self, text: &str) -> Result<LanguageResult> {
        (**self).best(text)
    }

    fn top_n(&self, text: &str, n: usize) -> Result<Vec<LanguageResult>> {
        (**self).top_n(text, n)
    }
}

/// A unit together with the predictions made for it
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The classified unit
    pub unit: TextUnit,
    /// Predictions in model rank order
    pub results: Vec<LanguageResult>,
}

/// Sends units to a model, one call per unit
#[derive(Debug)]
pub struct Invoker<'a, I: LanguageIdentifier + ?Sized> {
    identifier: &'a I,
    top_n: usize,
}

impl<'a, I: LanguageIdentifier + ?Sized> Invoker<'a, I> {
    /// Create an invoker requesting `top_n` languages per unit
    ///
    /// `top_n` must be at least 1, as enforced by
    /// [`PipelineConfig`](crate::PipelineConfig).
    pub fn new(identifier: &'a I, top_n: usize) -> Self {
        debug_assert!(top_n >= 1, "top_n must be at least 1");
        Self { identifier, top_n }
    }

    /// Classify one unit
    ///
    /// With N = 1 the model's single-best operation is used; otherwise its
    /// top-N operation is called once and its answer forwarded as is.
    pub fn classify(&self, unit: TextUnit) -> Result<Classification> {
        let results = if self.top_n == 1 {
            vec![self.identifier.best(&unit.content)?]
        } else {
            self.identifier.top_n(&unit.content, self.top_n)?
        };

        log::trace!(
            "Classified {} (line {:?}): {} result(s)",
            unit.source.display(),
            unit.line_number,
            results.len()
        );

        Ok(Classification { unit, results })
    }
}
