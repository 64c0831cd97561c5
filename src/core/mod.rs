/*
 * This module consolidates the core, front-end-agnostic logic of the
 * application. It re-exports the key data structures and abstractions
 * (`FileSystemScannerOperations`, `CollectorOperations`) together with
 * their concrete implementations, the progress transport type, and the
 * structured background task that drives one collection run.
 */
pub mod collector;
pub mod file_system;
pub mod models;
pub mod progress;
pub mod task;

// Re-export key structures and enums
pub use models::{CollectionRequest, CollectionSummary, DEFAULT_EXTENSION};

// Re-export file system related items
pub use file_system::{CoreFileSystemScanner, FileSystemScannerOperations};

#[cfg(test)]
pub use file_system::FileSystemError;

// Re-export collector related items
pub use collector::{CollectorError, CollectorOperations, CoreCollector};

pub use progress::CollectionProgress;

pub use task::CollectionTask;
