//! Splitting input files into classifiable units

use crate::config::Workflow;
use crate::dto::TextUnit;
use crate::error::{LangsiftError, Result};
use crate::input::InputPath;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Replace every `\n` with the two characters `\` and `n`
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Turns files into [`TextUnit`]s according to a [`Workflow`]
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    workflow: Workflow,
    recursive: bool,
}

impl Segmenter {
    /// Create a segmenter that only visits the top level of a directory
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            recursive: false,
        }
    }

    /// Also visit files in nested directories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// The workflow this segmenter applies
    pub fn workflow(&self) -> Workflow {
        self.workflow
    }

    /// Regular files to visit for `input`, in enumeration order
    ///
    /// Entries are sorted by file name so repeated runs over the same
    /// snapshot agree. Symlinks are classified only when they resolve to a
    /// regular file; broken links and links to directories are skipped.
    pub fn files(&self, input: &InputPath) -> Result<Vec<PathBuf>> {
        let root = match input {
            InputPath::File(path) => return Ok(vec![path.clone()]),
            InputPath::Directory(path) => path,
        };

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                LangsiftError::io(path, e.into())
            })?;

            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        log::debug!("Found {} files under {}", files.len(), root.display());
        Ok(files)
    }

    /// Read one file and split it into units
    pub fn segment_file(&self, path: &Path) -> Result<Vec<TextUnit>> {
        let text = fs::read_to_string(path).map_err(|e| LangsiftError::io(path, e))?;
        Ok(self.segment_text(&text, path))
    }

    /// Split already-loaded text into units attributed to `source`
    ///
    /// Line by line, `\n` and `\r\n` both end a line and neither is kept in
    /// the unit, so a CRLF file yields its lines without the trailing `\r`.
    pub fn segment_text(&self, text: &str, source: &Path) -> Vec<TextUnit> {
        match self.workflow {
            Workflow::LineByLine => text
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.is_empty())
                .map(|(index, line)| TextUnit {
                    content: line.to_string(),
                    source: source.to_path_buf(),
                    line_number: Some(index + 1),
                })
                .collect(),
            Workflow::WholeText => {
                if text.is_empty() {
                    return Vec::new();
                }
                vec![TextUnit {
                    content: escape_newlines(text),
                    source: source.to_path_buf(),
                    line_number: None,
                }]
            }
        }
    }

    /// Lazily segment every file of `input`
    ///
    /// Directory enumeration happens up front; each file is read only when
    /// the iterator reaches it. The first read failure is yielded as an
    /// error and ends the sequence.
    pub fn segment(&self, input: &InputPath) -> Result<Segments> {
        let files = self.files(input)?;
        Ok(Segments {
            segmenter: *self,
            file_count: files.len(),
            files: files.into_iter(),
            pending: Vec::new().into_iter(),
            failed: false,
        })
    }
}

/// Units of one file, as produced by [`Segments::next_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedFile {
    /// The file that was read
    pub path: PathBuf,
    /// Its units, possibly none
    pub units: Vec<TextUnit>,
}

/// Lazy sequence of units produced by [`Segmenter::segment`]
///
/// Iterating yields units across file boundaries; [`next_file`](Self::next_file)
/// yields the same units grouped by file, including files with no units.
#[derive(Debug)]
pub struct Segments {
    segmenter: Segmenter,
    file_count: usize,
    files: std::vec::IntoIter<PathBuf>,
    pending: std::vec::IntoIter<TextUnit>,
    failed: bool,
}

impl Segments {
    /// Number of files enumerated for this input
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    /// Read the next file and return all of its units
    ///
    /// Units of a file partly consumed through the iterator are not
    /// returned again.
    pub fn next_file(&mut self) -> Option<Result<SegmentedFile>> {
        if self.failed {
            return None;
        }

        let path = self.files.next()?;
        match self.segmenter.segment_file(&path) {
            Ok(units) => Some(Ok(SegmentedFile { path, units })),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl Iterator for Segments {
    type Item = Result<TextUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(unit) = self.pending.next() {
                return Some(Ok(unit));
            }

            match self.next_file()? {
                Ok(file) => self.pending = file.units.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
