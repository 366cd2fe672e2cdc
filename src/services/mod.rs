//! Services module - the harvesting pipeline.
//!
//! One harvest is a single synchronous pass over a site tree:
//!
//! 1. [`Harvester`] picks the scan root (`wp-content` when present, else the site root)
//! 2. [`walk`] enumerates candidate files, pruning denylisted directories via [`PathFilter`]
//! 3. [`FragmentExtractor`] finds `tailwind.config = {...}` literals (or takes a whole
//!    `*.tailwind.json` file)
//! 4. [`LiteralNormalizer`] rewrites each literal towards JSON and [`parse_fragment`] parses it
//! 5. [`merge_into`] folds `theme.extend.colors` / `theme.extend.fontFamily` into the
//!    [`ThemeAccumulator`](crate::models::ThemeAccumulator)
//! 6. [`persist`] writes `harvested-config.json`
//!
//! # Failure containment
//!
//! Unreadable directory entries, unreadable files and unparsable fragments are recorded as
//! [`Diagnostic`]s in the [`HarvestReport`] and skipped. Only [`HarvestError`] ends a run,
//! and it always does so before anything is written.
//!
//! # Usage Example
//!
//! ```ignore
//! use tailwind_harvester::models::HarvestSettings;
//! use tailwind_harvester::services::Harvester;
//!
//! let harvester = Harvester::new(HarvestSettings::for_site("/var/www/html"));
//! let report = harvester.run()?;
//! println!("{} fragments merged", report.metrics.fragments_merged);
//! ```
//!
//! [`compiler_config`] is the consumer side: it reads the written document back and
//! layers it over the built-in font families.

pub mod compiler_config;
pub mod extractor;
pub mod harvest;
pub mod merger;
pub mod normalizer;
pub mod path_filter;
pub mod walker;

pub use compiler_config::{StyleCompilerConfig, builtin_font_families, load_harvested};
pub use extractor::{FragmentExtractor, RawFragment};
pub use harvest::{Diagnostic, DiagnosticKind, HarvestError, HarvestReport, Harvester, persist};
pub use merger::merge_into;
pub use normalizer::{FragmentError, LiteralNormalizer, parse_fragment};
pub use path_filter::{CandidateKind, PathFilter};
pub use walker::{CandidatePath, WalkOutcome, walk};
