//! Near-JSON to JSON rewriting and the strict parse that follows it.
//!
//! Fragments are written as JavaScript object literals: bare keys, single-quoted
//! strings and trailing commas. [`LiteralNormalizer`] applies four blind, global rewrites
//! that turn the common subset of that syntax into JSON. It is not a parser. Inputs
//! outside the subset (apostrophes inside strings, hyphenated bare keys, `:` inside
//! values) come out as invalid JSON, and [`parse_fragment`] rejects them.

use crate::models::ParsedFragmentConfig;
use regex::Regex;
use thiserror::Error;

/// Why a fragment contributed nothing to the harvest.
#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Fragment is not valid JSON after normalization: {0}")]
    Parse(#[from] serde_json::Error),
}

pub struct LiteralNormalizer {
    /// Optionally quoted `[A-Za-z0-9_]+` token directly before a colon.
    key_pattern: Regex,

    /// Comma followed by optional whitespace and `}`.
    trailing_comma_object: Regex,

    /// Comma followed by optional whitespace and `]`.
    trailing_comma_array: Regex,
}

impl LiteralNormalizer {
    pub fn new() -> Self {
        Self {
            key_pattern: Regex::new(r#"(['"])?([a-zA-Z0-9_]+)(['"])?:"#)
                .expect("Invalid key regex"),
            trailing_comma_object: Regex::new(r",\s*\}").expect("Invalid object comma regex"),
            trailing_comma_array: Regex::new(r",\s*\]").expect("Invalid array comma regex"),
        }
    }

    /// Rewrite `raw` towards strict JSON. Never fails; invalid output surfaces at parse.
    pub fn normalize(&self, raw: &str) -> String {
        let quoted_keys = self.key_pattern.replace_all(raw, r#""${2}":"#);
        let double_quoted = quoted_keys.replace('\'', "\"");
        let objects = self.trailing_comma_object.replace_all(&double_quoted, "}");
        self.trailing_comma_array
            .replace_all(&objects, "]")
            .into_owned()
    }
}

impl Default for LiteralNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly parse normalized text and keep only its theme-extension maps.
pub fn parse_fragment(normalized: &str) -> Result<ParsedFragmentConfig, FragmentError> {
    let value: serde_json::Value = serde_json::from_str(normalized)?;
    Ok(ParsedFragmentConfig::from_value(&value))
}
