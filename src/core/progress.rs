/*
 * Defines the shared data structure used to shuttle collection progress
 * between the background worker and the caller. The transport type is kept
 * lightweight and serializable so that front-end code can remain decoupled
 * from the worker implementation details.
 *
 * Each value is an immutable snapshot of work completed so far; consumers
 * never mutate one, they only observe the sequence.
 */
use serde::Serialize;

/*
 * A snapshot of one collection run's progress. The worker emits one after
 * every completed file with `is_final` false, and exactly one terminal
 * snapshot with `is_final` true. `total_files` is fixed before streaming
 * begins and identical in every snapshot of a run.
 */
#[derive(Debug, Clone, Serialize)]
pub struct CollectionProgress {
    pub files_processed: usize,
    pub total_files: usize,
    pub is_final: bool,
}

impl CollectionProgress {
    /*
     * The completed fraction as a whole percentage, rounded down. A run
     * with nothing to do has no meaningful fraction, so it reports 0 until
     * the terminal snapshot, which always reports 100.
     */
    pub fn percent(&self) -> u8 {
        if self.total_files == 0 {
            return if self.is_final { 100 } else { 0 };
        }
        ((100 * self.files_processed) / self.total_files) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_down() {
        let update = CollectionProgress {
            files_processed: 1,
            total_files: 3,
            is_final: false,
        };
        assert_eq!(update.percent(), 33);
    }

    #[test]
    fn test_percent_reaches_hundred_when_all_files_done() {
        let update = CollectionProgress {
            files_processed: 3,
            total_files: 3,
            is_final: false,
        };
        assert_eq!(update.percent(), 100);
    }

    #[test]
    fn test_empty_run_reports_hundred_only_at_terminal_snapshot() {
        let running = CollectionProgress {
            files_processed: 0,
            total_files: 0,
            is_final: false,
        };
        let terminal = CollectionProgress {
            files_processed: 0,
            total_files: 0,
            is_final: true,
        };
        assert_eq!(running.percent(), 0);
        assert_eq!(terminal.percent(), 100);
    }

    #[test]
    fn test_progress_serializes_to_flat_json() {
        let update = CollectionProgress {
            files_processed: 2,
            total_files: 4,
            is_final: false,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r#"{"files_processed":2,"total_files":4,"is_final":false}"#
        );
    }
}
