//! Parallel batch processing.
//!
//! Documents are independent (no shared state between pipelines), so a
//! directory of PDFs fans out over Rayon's thread pool, one document per
//! task. Unreadable documents are reported in the returned report and
//! skipped; they never abort the run.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::options::ExtractOptions;
use crate::render::{to_json, JsonFormat};

/// Soft per-document budget; slower documents are logged, not aborted.
const SLOW_DOCUMENT: Duration = Duration::from_secs(10);

/// Outcome of one document in a batch run.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// Input PDF path
    pub input: PathBuf,
    /// Output JSON path (not written when `error` is set)
    pub output: PathBuf,
    /// Wall-clock time spent on this document
    pub elapsed: Duration,
    /// Failure message, if the document could not be processed
    pub error: Option<String>,
}

impl BatchEntry {
    /// Whether the document produced an output file.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-document outcomes, in input order
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Number of successfully processed documents.
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.succeeded()).count()
    }

    /// Number of failed documents.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Whether no PDF files were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total processing time across all documents.
    pub fn total_elapsed(&self) -> Duration {
        self.entries.iter().map(|e| e.elapsed).sum()
    }
}

/// Process every PDF in `input_dir`, writing one `<stem>.json` per
/// document into `output_dir`.
///
/// Files are discovered by their `.pdf` extension (case-insensitive) and
/// processed in sorted order for a deterministic report. An empty input
/// directory is not an error: the report is simply empty.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    options: &ExtractOptions,
    format: JsonFormat,
) -> Result<BatchReport> {
    let files = find_pdf_files(input_dir)?;
    fs::create_dir_all(output_dir)?;

    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|input| process_one(input, output_dir, options, format))
        .collect();

    Ok(BatchReport { entries })
}

/// Find all PDF files in a directory, sorted by name.
fn find_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Extract one document and write its JSON output.
fn process_one(
    input: &Path,
    output_dir: &Path,
    options: &ExtractOptions,
    format: JsonFormat,
) -> BatchEntry {
    let started = Instant::now();
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let output = output_dir.join(stem).with_extension("json");

    let result = crate::extract_file_with_options(input, options.clone())
        .and_then(|doc| to_json(&doc, format))
        .and_then(|json| fs::write(&output, json).map_err(Error::from));

    let elapsed = started.elapsed();
    if elapsed > SLOW_DOCUMENT {
        log::warn!(
            "{} took {:.1}s to process",
            input.display(),
            elapsed.as_secs_f32()
        );
    }

    let error = match result {
        Ok(()) => None,
        Err(e) => {
            log::error!("skipping {}: {}", input.display(), e);
            Some(e.to_string())
        }
    };

    BatchEntry {
        input: input.to_path_buf(),
        output,
        elapsed,
        error,
    }
}
