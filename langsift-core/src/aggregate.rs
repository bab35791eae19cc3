//! Driving segmentation and identification into a result set

use crate::config::PipelineConfig;
use crate::dto::{ResultRecord, ResultSet};
use crate::error::Result;
use crate::identify::{Invoker, LanguageIdentifier};
use crate::input::InputPath;
use crate::segment::Segmenter;
use std::path::Path;

/// Hooks called as a run moves through its files
///
/// All methods default to doing nothing.
pub trait RunObserver {
    /// Called once with the number of files about to be processed
    fn files_found(&mut self, _count: usize) {}

    /// Called after a file is read, before its units are classified
    fn file_started(&mut self, _path: &Path) {}

    /// Called after all units of a file have been classified
    fn file_completed(&mut self, _path: &Path, _records: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Runs the whole pipeline for one input
pub struct Aggregator<'a, I: LanguageIdentifier + ?Sized> {
    identifier: &'a I,
    config: PipelineConfig,
}

impl<'a, I: LanguageIdentifier + ?Sized> Aggregator<'a, I> {
    /// Create an aggregator over `identifier`
    pub fn new(identifier: &'a I, config: PipelineConfig) -> Self {
        Self { identifier, config }
    }

    /// The run configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classify every unit of `input` and collect the records in order
    pub fn run(&self, input: &InputPath) -> Result<ResultSet> {
        self.run_with_observer(input, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting progress to `observer`
    ///
    /// The first error aborts the run; records gathered so far are dropped.
    pub fn run_with_observer(
        &self,
        input: &InputPath,
        observer: &mut dyn RunObserver,
    ) -> Result<ResultSet> {
        let segmenter = Segmenter::new(self.config.workflow()).recursive(self.config.recursive());
        let invoker = Invoker::new(self.identifier, self.config.top_n());

        let mut segments = segmenter.segment(input)?;
        log::info!(
            "Identifying {} file(s) from {} ({}, N={})",
            segments.file_count(),
            input.path().display(),
            self.config.workflow(),
            self.config.top_n()
        );
        observer.files_found(segments.file_count());

        let mut results = ResultSet::new();
        while let Some(file) = segments.next_file() {
            let file = file?;
            observer.file_started(&file.path);
            let before = results.len();

            for unit in file.units {
                let classification = invoker.classify(unit)?;
                for result in classification.results {
                    results.push(ResultRecord::new(&classification.unit, result));
                }
            }

            let produced = results.len() - before;
            log::debug!("{}: {} record(s)", file.path.display(), produced);
            observer.file_completed(&file.path, produced);
        }

        log::info!("Produced {} record(s)", results.len());
        Ok(results)
    }
}
