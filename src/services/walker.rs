//! Recursive site traversal.
//!
//! Walks a scan root depth-first with `walkdir`, pruning denylisted directories before
//! they are entered and keeping only files the [`PathFilter`] admits. Entries that cannot
//! be probed (broken symlinks, permission errors, symlink loops, non-UTF-8 names) are
//! reported as [`Diagnostic`]s and skipped; only a failure on the root itself is fatal.

use super::harvest::{Diagnostic, DiagnosticKind, HarvestError};
use super::path_filter::{CandidateKind, PathFilter};
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// A file selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    pub path: Utf8PathBuf,
    pub kind: CandidateKind,
}

/// Everything one traversal produced.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub candidates: Vec<CandidatePath>,
    pub skipped: Vec<Diagnostic>,
    pub pruned_dirs: usize,
}

/// Enumerate candidate files under `root`.
///
/// Entries are visited in file-name order so repeated runs over an unchanged tree see
/// fragments in the same order.
///
/// # Errors
/// [`HarvestError::RootUnavailable`] if `root` itself cannot be read.
pub fn walk(root: &Utf8Path, filter: &PathFilter) -> Result<WalkOutcome, HarvestError> {
    let mut outcome = WalkOutcome::default();
    let mut pruned = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let keep = entry
                .file_name()
                .to_str()
                .is_none_or(|name| filter.should_traverse(name));
            if !keep {
                tracing::debug!("Pruning {}", entry.path().display());
                pruned += 1;
            }
            keep
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(HarvestError::RootUnavailable {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| root.to_path_buf());
                tracing::warn!("Skipping unreadable entry {}: {}", path, err);
                outcome.skipped.push(Diagnostic::new(
                    path,
                    DiagnosticKind::UnreadableEntry,
                    err.to_string(),
                ));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => path,
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 path {}", raw.display());
                outcome.skipped.push(Diagnostic::new(
                    Utf8PathBuf::from(raw.to_string_lossy().into_owned()),
                    DiagnosticKind::UnreadableEntry,
                    "path is not valid UTF-8".to_string(),
                ));
                continue;
            }
        };

        let Some(kind) = path.file_name().and_then(|name| filter.classify(name)) else {
            continue;
        };

        outcome.candidates.push(CandidatePath { path, kind });
    }

    outcome.pruned_dirs = pruned;
    tracing::debug!(
        "Walked {}: {} candidates, {} skipped, {} pruned",
        root,
        outcome.candidates.len(),
        outcome.skipped.len(),
        outcome.pruned_dirs
    );
    Ok(outcome)
}
