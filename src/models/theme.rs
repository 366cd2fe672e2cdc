use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The harvested document: `{"extend": {"colors": {..}, "fontFamily": {..}}}`.
///
/// This is the run's single result. It is created empty, mutated once per accepted
/// fragment by [`crate::services::merge_into`] and written once at the end of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeAccumulator {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// The two theme-extension maps the harvester understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeExtension {
    /// Color token name to value (a CSS color string or a nested shade map).
    #[serde(default)]
    pub colors: IndexMap<String, Value>,

    /// Font family token name to an ordered font stack.
    ///
    /// Narrower than what Tailwind accepts: a bare string is stored as a one-font stack and
    /// non-string members (the `[stack, { fontFeatureSettings }]` form) are dropped, so such
    /// entries are not written back exactly as authored.
    #[serde(rename = "fontFamily", default)]
    pub font_family: IndexMap<String, Vec<String>>,
}

impl ThemeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.extend.colors.is_empty() && self.extend.font_family.is_empty()
    }
}

/// The parts of one parsed fragment that matter to the merge.
///
/// `extend` is `None` when the fragment has no `theme.extend` object; everything else
/// in the fragment is dropped during conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFragmentConfig {
    pub extend: Option<ThemeExtension>,
}

impl ParsedFragmentConfig {
    /// Pick `theme.extend.colors` and `theme.extend.fontFamily` out of an arbitrary
    /// JSON value. Shapes outside those two maps are ignored, never rejected.
    pub fn from_value(value: &Value) -> Self {
        let Some(extend) = value
            .get("theme")
            .and_then(|theme| theme.get("extend"))
            .and_then(Value::as_object)
        else {
            return Self { extend: None };
        };

        let mut extension = ThemeExtension::default();

        if let Some(colors) = extend.get("colors").and_then(Value::as_object) {
            for (name, color) in colors {
                extension.colors.insert(name.clone(), color.clone());
            }
        }

        if let Some(families) = extend.get("fontFamily").and_then(Value::as_object) {
            for (name, stack) in families {
                match font_stack(stack) {
                    Some(fonts) => {
                        extension.font_family.insert(name.clone(), fonts);
                    }
                    None => {
                        tracing::debug!("Ignoring fontFamily.{} with unsupported value", name);
                    }
                }
            }
        }

        Self {
            extend: Some(extension),
        }
    }
}

// An array keeps its string members in order; a bare string is a one-font stack.
fn font_stack(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(font) => Some(vec![font.clone()]),
        Value::Array(items) => {
            let fonts: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            if fonts.is_empty() { None } else { Some(fonts) }
        }
        _ => None,
    }
}
