// src/core/collector.rs

use super::file_system::{CoreFileSystemScanner, FileSystemError, FileSystemScannerOperations};
use super::models::{CollectionRequest, CollectionSummary};
use super::progress::CollectionProgress;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/*
 * The collector is the single component of this tool: given an immutable
 * `CollectionRequest` it produces one output file containing the
 * concatenated contents of every matching file under the source directory,
 * invoking a progress callback as it goes.
 *
 * Copy policy: each matched file's raw bytes are written verbatim followed
 * by exactly one `\n` separator. Original line endings and encodings are
 * preserved, and consecutive files are never joined without a boundary.
 */

/*
 * Defines custom error types for a collection run. `InvalidRequest` is
 * surfaced before any traversal; the remaining variants abort a run that
 * has already started. A failed run leaves any partial output file in
 * place, and nothing is retried internally.
 */
#[derive(Debug)]
pub enum CollectorError {
    InvalidRequest(String),
    Scan(FileSystemError),
    Read { path: PathBuf, source: io::Error },
    Write(io::Error),
    WorkerFailed,
}

impl From<FileSystemError> for CollectorError {
    fn from(err: FileSystemError) -> Self {
        CollectorError::Scan(err)
    }
}

impl std::fmt::Display for CollectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectorError::InvalidRequest(msg) => write!(f, "Invalid collection request: {msg}"),
            CollectorError::Scan(e) => write!(f, "Scan failed: {e}"),
            CollectorError::Read { path, source } => {
                write!(f, "Failed to read {path:?}: {source}")
            }
            CollectorError::Write(e) => write!(f, "Failed to write output: {e}"),
            CollectorError::WorkerFailed => write!(f, "Collection worker terminated abnormally"),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectorError::Scan(e) => Some(e),
            CollectorError::Read { source, .. } => Some(source),
            CollectorError::Write(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;

/*
 * Defines the collection operation behind a trait so front-ends and the
 * background task can hold a collector without knowing the concrete type,
 * and so tests can substitute one.
 */
pub trait CollectorOperations: Send + Sync {
    /*
     * Runs one collection to completion or failure. The matched-file count
     * is fixed before streaming begins; `on_progress` is then invoked once
     * after each written file and once more with a terminal snapshot after
     * the output has been flushed. The callback must not block for long,
     * since the worker writes nothing while it runs.
     */
    fn collect(
        &self,
        request: &CollectionRequest,
        on_progress: &dyn Fn(CollectionProgress),
    ) -> Result<CollectionSummary>;
}

/*
 * The core implementation of `CollectorOperations`. It owns the output
 * sink exclusively for the duration of one run and streams files strictly
 * sequentially, so output order always equals traversal order and the
 * progress counter needs no synchronization.
 */
pub struct CoreCollector {
    scanner: Arc<dyn FileSystemScannerOperations>,
}

impl CoreCollector {
    pub fn new() -> Self {
        Self::with_scanner(Arc::new(CoreFileSystemScanner::new()))
    }

    pub fn with_scanner(scanner: Arc<dyn FileSystemScannerOperations>) -> Self {
        CoreCollector { scanner }
    }

    /*
     * Rejects a request before anything is traversed or created: the
     * source must be an existing directory, the output location's parent
     * must exist, and the extension must be non-empty. On rejection the
     * output file is guaranteed untouched.
     */
    fn validate_request(request: &CollectionRequest) -> Result<()> {
        if request.extension.is_empty() {
            return Err(CollectorError::InvalidRequest(
                "extension must not be empty".to_string(),
            ));
        }
        if !request.source_root.is_dir() {
            return Err(CollectorError::InvalidRequest(format!(
                "source directory {:?} does not exist or is not a directory",
                request.source_root
            )));
        }
        if let Some(parent) = request.output_path.parent() {
            // An empty parent means the output is relative to the current
            // directory, which always exists.
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(CollectorError::InvalidRequest(format!(
                    "output location {:?} has no existing parent directory",
                    request.output_path
                )));
            }
        }
        Ok(())
    }
}

impl Default for CoreCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectorOperations for CoreCollector {
    fn collect(
        &self,
        request: &CollectionRequest,
        on_progress: &dyn Fn(CollectionProgress),
    ) -> Result<CollectionSummary> {
        Self::validate_request(request)?;

        log::info!(
            "Collector: Scanning {:?} for files ending with '{}'.",
            request.source_root,
            request.extension
        );
        let matched = self
            .scanner
            .scan_for_matching_files(&request.source_root, &request.extension)?;
        let total_files = matched.len();
        log::info!(
            "Collector: {} matching files, streaming to {:?}.",
            total_files,
            request.output_path
        );

        // The sink is created only after a successful scan, so traversal
        // failures never leave a truncated output behind.
        let output = File::create(&request.output_path).map_err(CollectorError::Write)?;
        let mut writer = BufWriter::new(output);

        let mut files_processed = 0usize;
        let mut bytes_written = 0u64;
        for path in &matched {
            let content = fs::read(path).map_err(|source| CollectorError::Read {
                path: path.clone(),
                source,
            })?;
            writer.write_all(&content).map_err(CollectorError::Write)?;
            writer.write_all(b"\n").map_err(CollectorError::Write)?;
            bytes_written += content.len() as u64 + 1;
            files_processed += 1;
            log::trace!(
                "Collector: Wrote {path:?} ({files_processed}/{total_files})."
            );
            on_progress(CollectionProgress {
                files_processed,
                total_files,
                is_final: false,
            });
        }

        writer.flush().map_err(CollectorError::Write)?;
        on_progress(CollectionProgress {
            files_processed,
            total_files,
            is_final: true,
        });
        log::info!(
            "Collector: Run complete. {files_processed} files, {bytes_written} bytes written."
        );
        Ok(CollectionSummary {
            files_processed,
            bytes_written,
        })
    }
}
