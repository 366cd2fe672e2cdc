use super::extractor::{FragmentExtractor, RawFragment};
use super::merger::merge_into;
use super::normalizer::{FragmentError, LiteralNormalizer, parse_fragment};
use super::path_filter::PathFilter;
use super::walker::{CandidatePath, walk};
use crate::metrics::HarvestMetrics;
use crate::models::{HarvestSettings, ParsedFragmentConfig, ThemeAccumulator};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

/// Failures that end a harvest without writing output.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Scan root {path} is unavailable: {source}")]
    RootUnavailable { path: Utf8PathBuf, source: io::Error },

    #[error("Failed to serialize harvested config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write { path: Utf8PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A directory entry could not be probed during traversal.
    UnreadableEntry,
    /// A candidate file could not be read.
    UnreadableFile,
    /// A fragment did not parse after normalization.
    RejectedFragment,
}

/// A contained, non-fatal problem encountered during a harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: Utf8PathBuf,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: Utf8PathBuf, kind: DiagnosticKind, message: String) -> Self {
        Self {
            path,
            kind,
            message,
        }
    }
}

/// What a harvest did, returned alongside (or instead of) the written document.
#[derive(Debug)]
pub struct HarvestReport {
    pub scan_root: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    pub metrics: HarvestMetrics,
    pub diagnostics: Vec<Diagnostic>,
}

impl HarvestReport {
    fn new(scan_root: Utf8PathBuf, output_path: Utf8PathBuf) -> Self {
        Self {
            scan_root,
            output_path,
            metrics: HarvestMetrics::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}

/// Runs one harvest: walk, extract, normalize, parse, merge, persist.
///
/// The accumulator lives only inside [`Harvester::collect`]; nothing is shared between
/// runs. Per-entry, per-file and per-fragment failures are recorded in the
/// [`HarvestReport`] and never stop the run. Only a missing scan root or a failed write
/// is returned as an error, and in both cases the previous output is left untouched.
pub struct Harvester {
    settings: HarvestSettings,
    filter: PathFilter,
    extractor: FragmentExtractor,
    normalizer: LiteralNormalizer,
}

impl Harvester {
    pub fn new(settings: HarvestSettings) -> Self {
        Self {
            filter: PathFilter::from_settings(&settings),
            extractor: FragmentExtractor::new(),
            normalizer: LiteralNormalizer::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &HarvestSettings {
        &self.settings
    }

    /// The preferred subtree if it is an existing directory, otherwise the site root.
    pub fn scan_root(&self) -> Utf8PathBuf {
        match self.settings.preferred_root() {
            Some(preferred) if preferred.is_dir() => preferred,
            Some(preferred) => {
                tracing::info!(
                    "{} not found, scanning {} instead",
                    preferred,
                    self.settings.site_root
                );
                self.settings.site_root.clone()
            }
            None => self.settings.site_root.clone(),
        }
    }

    pub fn output_path(&self) -> Utf8PathBuf {
        self.settings.output_path()
    }

    /// Harvest and write the result to [`Harvester::output_path`].
    pub fn run(&self) -> Result<HarvestReport, HarvestError> {
        let (accumulator, report) = self.collect()?;
        persist(&accumulator, &report.output_path)?;

        tracing::info!(
            "Harvested config saved to {}",
            report
                .output_path
                .file_name()
                .unwrap_or(report.output_path.as_str())
        );
        report.metrics.log_summary();
        Ok(report)
    }

    /// Harvest without writing anything.
    pub fn collect(&self) -> Result<(ThemeAccumulator, HarvestReport), HarvestError> {
        tracing::info!("--> Scanning site for custom tailwind configs...");

        let scan_root = self.scan_root();
        let mut report = HarvestReport::new(scan_root.clone(), self.output_path());
        let mut accumulator = ThemeAccumulator::new();

        let walked = walk(&scan_root, &self.filter)?;
        report.metrics.dirs_pruned = walked.pruned_dirs;
        report.metrics.entries_skipped = walked.skipped.len();
        report.diagnostics.extend(walked.skipped);

        for candidate in &walked.candidates {
            self.harvest_file(candidate, &mut accumulator, &mut report);
        }

        Ok((accumulator, report))
    }

    fn harvest_file(
        &self,
        candidate: &CandidatePath,
        accumulator: &mut ThemeAccumulator,
        report: &mut HarvestReport,
    ) {
        report.metrics.record_file_scanned();

        let bytes = match fs::read(&candidate.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("Could not read {}: {}", candidate.path, err);
                report.metrics.record_read_failure();
                report.diagnostics.push(Diagnostic::new(
                    candidate.path.clone(),
                    DiagnosticKind::UnreadableFile,
                    err.to_string(),
                ));
                return;
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        let fragments = self.extractor.extract(candidate.kind, &content);
        report.metrics.record_fragments_found(fragments.len());

        for fragment in fragments {
            match self.interpret(&fragment) {
                Ok(parsed) => {
                    let keys = merge_into(accumulator, parsed);
                    report.metrics.record_fragment_merged(keys);
                }
                Err(err) => {
                    tracing::debug!(
                        "Ignoring fragment in {} at byte {}: {}",
                        candidate.path,
                        fragment.offset,
                        err
                    );
                    report.metrics.record_fragment_rejected();
                    report.diagnostics.push(Diagnostic::new(
                        candidate.path.clone(),
                        DiagnosticKind::RejectedFragment,
                        format!("byte {}: {}", fragment.offset, err),
                    ));
                }
            }
        }
    }

    /// Normalize one fragment and parse the result strictly.
    pub fn interpret(
        &self,
        fragment: &RawFragment<'_>,
    ) -> Result<ParsedFragmentConfig, FragmentError> {
        parse_fragment(&self.normalizer.normalize(fragment.text))
    }
}

/// Write `accumulator` as pretty-printed JSON.
///
/// The document goes to a sibling `.tmp` file first and is renamed into place, so
/// readers never observe a partial write.
pub fn persist(
    accumulator: &ThemeAccumulator,
    output_path: &Utf8Path,
) -> Result<(), HarvestError> {
    let json = serde_json::to_string_pretty(accumulator)?;
    let temp_path = Utf8PathBuf::from(format!("{}.tmp", output_path));

    fs::write(&temp_path, json).map_err(|source| HarvestError::Write {
        path: temp_path.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&temp_path, output_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(HarvestError::Write {
            path: output_path.to_path_buf(),
            source,
        });
    }

    tracing::debug!("Wrote {}", output_path);
    Ok(())
}
