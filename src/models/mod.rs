//! Data models for the harvester.
//!
//! - [`HarvestSettings`]: Paths, exclusion rules and logging options for one run
//! - [`ThemeAccumulator`]: The merged theme extension written to `harvested-config.json`
//! - [`ParsedFragmentConfig`]: The merge-relevant view of one parsed fragment
//!
//! All persisted structs derive `Serialize`/`Deserialize`; maps are [`indexmap::IndexMap`]
//! so the written document keeps the order in which keys were first seen.

pub mod settings;
pub mod theme;

pub use settings::HarvestSettings;
pub use theme::{ParsedFragmentConfig, ThemeAccumulator, ThemeExtension};
