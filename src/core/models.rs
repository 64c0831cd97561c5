use std::path::PathBuf;

// The file-name suffix collected when the caller does not specify one.
pub const DEFAULT_EXTENSION: &str = ".java";

/*
 * The immutable context for one collection run. Built once by the caller and
 * handed to the collector; nothing mutates it afterwards, so a run can be
 * described, logged, and restarted from the same value.
 */
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    pub source_root: PathBuf,
    pub output_path: PathBuf,
    pub extension: String,
}

impl CollectionRequest {
    pub fn new(source_root: PathBuf, output_path: PathBuf, extension: String) -> Self {
        CollectionRequest {
            source_root,
            output_path,
            extension,
        }
    }
}

/*
 * The typed result of a successful run. `bytes_written` counts file content
 * plus the one-byte separator written after each file.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    pub files_processed: usize,
    pub bytes_written: u64,
}
