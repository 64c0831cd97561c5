/*
 * Runs a collection as a structured background task: a dedicated worker
 * thread executes the collector while the caller keeps its own thread free
 * to render progress. The task exposes a receiving channel for progress
 * snapshots and a typed join, so a run is awaitable and its outcome is a
 * `Result` rather than something read out of shared mutable state.
 */
use super::collector::{CollectorError, CollectorOperations, CoreCollector, Result};
use super::models::{CollectionRequest, CollectionSummary};
use super::progress::CollectionProgress;
use crossbeam_channel::{Receiver, unbounded};
use std::thread::{self, JoinHandle};

pub struct CollectionTask {
    progress_rx: Receiver<CollectionProgress>,
    handle: JoinHandle<Result<CollectionSummary>>,
}

impl CollectionTask {
    /*
     * Starts a collection run for `request` on a new worker thread and
     * returns immediately. Exactly one task may target a given output
     * path at a time; the caller enforces that.
     */
    pub fn spawn(request: CollectionRequest) -> Self {
        Self::spawn_with_collector(request, CoreCollector::new())
    }

    pub fn spawn_with_collector<C>(request: CollectionRequest, collector: C) -> Self
    where
        C: CollectorOperations + 'static,
    {
        let (progress_tx, progress_rx) = unbounded();
        let handle = thread::spawn(move || {
            let on_progress = move |update: CollectionProgress| {
                // Fire-and-forget: a caller that stopped listening must
                // not stall or fail the run.
                let _ = progress_tx.send(update);
            };
            collector.collect(&request, &on_progress)
        });
        CollectionTask {
            progress_rx,
            handle,
        }
    }

    /*
     * The stream of progress snapshots. The channel disconnects when the
     * worker finishes, so iterating it drains every update and then ends;
     * `join` afterwards yields the run's result without blocking long.
     */
    pub fn progress(&self) -> &Receiver<CollectionProgress> {
        &self.progress_rx
    }

    /*
     * Waits for the worker to finish and returns its typed result. A
     * worker that panicked instead of returning surfaces as
     * `CollectorError::WorkerFailed`.
     */
    pub fn join(self) -> Result<CollectionSummary> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => {
                log::error!("CollectionTask: Worker thread panicked: {panic:?}");
                Err(CollectorError::WorkerFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::{self, Write};
    use std::path::Path;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        write!(file, "{content}")?;
        Ok(())
    }

    #[test]
    fn test_task_streams_progress_and_joins_with_summary() -> io::Result<()> {
        let dir = tempdir()?;
        let source = dir.path().join("src");
        create_file(&source.join("A.java"), "class A {}")?;
        create_file(&source.join("B.java"), "class B {}")?;
        let output_path = dir.path().join("collected.txt");

        let task = CollectionTask::spawn(CollectionRequest::new(
            source,
            output_path.clone(),
            ".java".to_string(),
        ));

        let updates: Vec<CollectionProgress> = task.progress().iter().collect();
        let summary = task.join().expect("run should succeed");

        assert_eq!(summary.files_processed, 2);
        // Count idempotence: the fixed total equals the per-file events seen.
        let per_file = updates.iter().filter(|u| !u.is_final).count();
        assert_eq!(per_file, 2);
        assert!(updates.last().is_some_and(|u| u.is_final));
        assert_eq!(fs::read_to_string(&output_path)?, "class A {}\nclass B {}\n");
        Ok(())
    }

    #[test]
    fn test_task_surfaces_collector_error_through_join() -> io::Result<()> {
        let dir = tempdir()?;
        let task = CollectionTask::spawn(CollectionRequest::new(
            dir.path().join("missing_source"),
            dir.path().join("collected.txt"),
            ".java".to_string(),
        ));

        let updates: Vec<CollectionProgress> = task.progress().iter().collect();
        let result = task.join();

        assert!(updates.is_empty());
        assert!(matches!(result, Err(CollectorError::InvalidRequest(_))));
        Ok(())
    }

    #[test]
    fn test_task_reports_panicking_worker_as_failure() {
        struct PanickingCollector;

        impl CollectorOperations for PanickingCollector {
            fn collect(
                &self,
                _request: &CollectionRequest,
                _on_progress: &dyn Fn(CollectionProgress),
            ) -> Result<CollectionSummary> {
                panic!("worker blew up");
            }
        }

        let task = CollectionTask::spawn_with_collector(
            CollectionRequest::new(
                std::path::PathBuf::from("unused"),
                std::path::PathBuf::from("unused_out"),
                ".java".to_string(),
            ),
            PanickingCollector,
        );

        let result = task.join();
        assert!(matches!(result, Err(CollectorError::WorkerFailed)));
    }
}
