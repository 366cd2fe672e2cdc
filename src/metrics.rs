// Harvest metrics module
//
// Counters collected over one harvest run and logged as a summary at the end

use std::time::{Duration, Instant};

/// Per-run counters.
///
/// The harvest is single-threaded, so these are plain integers owned by the run.
#[derive(Debug, Clone)]
pub struct HarvestMetrics {
    /// Directories skipped because their name is on the denylist
    pub dirs_pruned: usize,

    /// Candidate files handed to the extractor
    pub files_scanned: usize,

    /// Directory entries that could not be probed
    pub entries_skipped: usize,

    /// Candidate files that could not be read
    pub read_failures: usize,

    /// Fragments found across all files
    pub fragments_found: usize,

    /// Fragments that failed to parse after normalization
    pub fragments_rejected: usize,

    /// Fragments that wrote at least one key
    pub fragments_merged: usize,

    /// Keys written into the accumulator, including overwrites
    pub keys_written: usize,

    start_time: Instant,
}

impl HarvestMetrics {
    pub fn new() -> Self {
        Self {
            dirs_pruned: 0,
            files_scanned: 0,
            entries_skipped: 0,
            read_failures: 0,
            fragments_found: 0,
            fragments_rejected: 0,
            fragments_merged: 0,
            keys_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_file_scanned(&mut self) {
        self.files_scanned += 1;
    }

    pub fn record_read_failure(&mut self) {
        self.read_failures += 1;
    }

    pub fn record_fragments_found(&mut self, count: usize) {
        self.fragments_found += count;
    }

    pub fn record_fragment_rejected(&mut self) {
        self.fragments_rejected += 1;
    }

    /// Record a parsed fragment and the number of keys it wrote.
    pub fn record_fragment_merged(&mut self, keys: usize) {
        if keys > 0 {
            self.fragments_merged += 1;
        }
        self.keys_written += keys;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!(
            "Files: {} scanned, {} unreadable, {} entries skipped, {} dirs pruned",
            self.files_scanned,
            self.read_failures,
            self.entries_skipped,
            self.dirs_pruned
        );
        tracing::info!(
            "Fragments: {} found, {} merged, {} rejected ({} keys written) in {:.2}s",
            self.fragments_found,
            self.fragments_merged,
            self.fragments_rejected,
            self.keys_written,
            self.elapsed().as_secs_f64()
        );
    }
}

impl Default for HarvestMetrics {
    fn default() -> Self {
        Self::new()
    }
}
