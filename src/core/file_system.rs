use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/*
 * This module provides the file system scanning side of a collection run.
 * It walks a source directory tree in a deterministic order and produces the
 * ordered list of regular files whose names end with the configured
 * extension. It defines errors specific to these operations and a trait
 * `FileSystemScannerOperations` for abstracting the scanning logic, with a
 * concrete implementation `CoreFileSystemScanner`.
 */

/*
 * Defines custom error types for file system operations.
 * This enum centralizes error handling for directory scanning, I/O issues,
 * and path validity, providing more specific error information. A traversal
 * failure carries the offending path when the walker can name one.
 */
#[derive(Debug)]
pub enum FileSystemError {
    Io(io::Error),
    InvalidPath(PathBuf),
    Walk {
        path: Option<PathBuf>,
        source: walkdir::Error,
    },
}

impl From<io::Error> for FileSystemError {
    fn from(err: io::Error) -> Self {
        FileSystemError::Io(err)
    }
}

impl From<walkdir::Error> for FileSystemError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        FileSystemError::Walk { path, source: err }
    }
}

impl std::fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSystemError::Io(e) => write!(f, "I/O error: {e}"),
            FileSystemError::InvalidPath(p) => write!(f, "Invalid path: {p:?}"),
            FileSystemError::Walk {
                path: Some(p),
                source,
            } => write!(f, "Traversal failed at {p:?}: {source}"),
            FileSystemError::Walk { path: None, source } => {
                write!(f, "Traversal failed: {source}")
            }
        }
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileSystemError::Io(e) => Some(e),
            FileSystemError::Walk { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

/*
 * Defines the operations for scanning file systems.
 * This trait abstracts the specific mechanism for traversing a directory
 * tree and producing the ordered list of files matching a file-name suffix.
 * Implementations must visit regular files only (directories and symbolic
 * links are never content sources) and must yield the same order for the
 * same tree on every call.
 */
pub trait FileSystemScannerOperations: Send + Sync {
    /*
     * Scans `root_path` recursively and returns the paths of all regular
     * files whose name ends with `extension`, in traversal order. The
     * comparison is case-sensitive. Any entry that cannot be read aborts
     * the scan with an error rather than being silently skipped.
     */
    fn scan_for_matching_files(&self, root_path: &Path, extension: &str) -> Result<Vec<PathBuf>>;
}

/*
 * The core implementation of `FileSystemScannerOperations`.
 * Traversal is depth-first with entries sorted by file name at every level,
 * so the resulting order is deterministic and documented: lexicographic
 * within each directory, descending into a subdirectory when it is reached.
 */
pub struct CoreFileSystemScanner {}

impl CoreFileSystemScanner {
    pub fn new() -> Self {
        CoreFileSystemScanner {}
    }
}

impl Default for CoreFileSystemScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemScannerOperations for CoreFileSystemScanner {
    fn scan_for_matching_files(&self, root_path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !root_path.is_dir() {
            return Err(FileSystemError::InvalidPath(root_path.to_path_buf()));
        }
        log::debug!(
            "FileSystemScanner: Scanning directory {root_path:?} for files ending with '{extension}'."
        );

        let mut matched: Vec<PathBuf> = Vec::new();
        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name();

        for entry_result in walker {
            let entry = entry_result?; // Propagates walkdir::Error, converted by From trait.

            // Symlinks report their own file type here, so they never pass.
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if name.ends_with(extension) {
                matched.push(entry.into_path());
            }
        }

        log::debug!(
            "FileSystemScanner: Scan complete. Found {} matching files under {:?}.",
            matched.len(),
            root_path
        );
        Ok(matched)
    }
}
