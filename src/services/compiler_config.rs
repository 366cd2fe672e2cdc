//! The style compiler's view of the harvest.
//!
//! Mirrors what the site's `tailwind.config.js` does with `harvested-config.json`: read
//! it if possible, then spread its `fontFamily` and `colors` over a few built-in font
//! families. Harvested keys equal to a built-in key replace the built-in stack.

use crate::models::{ThemeAccumulator, ThemeExtension};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fs;

/// Content globs the compiler scans for class names, relative to the site root.
pub const CONTENT_GLOBS: [&str; 2] = ["./wp-content/**/*.{php,html,js}", "./*.{php,html,js}"];

/// Font families every site gets before harvested entries are applied.
pub fn builtin_font_families() -> IndexMap<String, Vec<String>> {
    let stacks: [(&str, &[&str]); 3] = [
        (
            "vazir",
            &["Vazirmatn", "ui-sans-serif", "system-ui", "sans-serif"],
        ),
        ("lalezar", &["Lalezar", "cursive"]),
        ("yekan", &["YekanBakh", "sans-serif"]),
    ];

    stacks
        .iter()
        .map(|(name, fonts)| {
            (
                name.to_string(),
                fonts.iter().map(|font| font.to_string()).collect(),
            )
        })
        .collect()
}

/// Read a harvested document, substituting an empty one if it is absent or unreadable.
pub fn load_harvested(path: &Utf8Path) -> ThemeAccumulator {
    if !path.exists() {
        tracing::debug!("No harvested config at {}", path);
        return ThemeAccumulator::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            serde_json::from_str::<ThemeAccumulator>(&text).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(harvested) => harvested,
        Err(err) => {
            tracing::warn!("Ignoring unreadable harvested config {}: {}", path, err);
            ThemeAccumulator::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilerTheme {
    pub extend: ThemeExtension,
}

/// Effective style compiler configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleCompilerConfig {
    pub content: Vec<String>,
    pub theme: CompilerTheme,
    pub plugins: Vec<Value>,
}

impl StyleCompilerConfig {
    /// Layer `harvested` over the built-in defaults.
    pub fn from_harvested(harvested: ThemeAccumulator) -> Self {
        let mut font_family = builtin_font_families();
        font_family.extend(harvested.extend.font_family);

        Self {
            content: CONTENT_GLOBS.iter().map(|glob| glob.to_string()).collect(),
            theme: CompilerTheme {
                extend: ThemeExtension {
                    colors: harvested.extend.colors,
                    font_family,
                },
            },
            plugins: Vec::new(),
        }
    }

    /// Load the harvested document at `path` and layer it over the defaults.
    pub fn load(path: &Utf8Path) -> Self {
        Self::from_harvested(load_harvested(path))
    }
}
