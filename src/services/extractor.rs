use super::path_filter::CandidateKind;
use regex::Regex;

/// One object-literal (or whole-document) slice of a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFragment<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the file content.
    pub offset: usize,
}

/// Finds `tailwind.config = { ... }` assignments in source text.
///
/// The object literal is delimited with a brace-depth counter starting at the opening
/// `{`. Braces inside string values are counted like any other, so a value such as
/// `'}'` ends the capture early; such fragments simply fail to parse later.
pub struct FragmentExtractor {
    /// `tailwind.config`, optional whitespace, `=`, optional whitespace, then `{`.
    marker_pattern: Regex,
}

impl FragmentExtractor {
    pub fn new() -> Self {
        Self {
            marker_pattern: Regex::new(r"tailwind\.config\s*=\s*\{")
                .expect("Invalid marker regex"),
        }
    }

    /// Extract every fragment from `content`, in file order.
    pub fn extract<'a>(&self, kind: CandidateKind, content: &'a str) -> Vec<RawFragment<'a>> {
        match kind {
            CandidateKind::StandaloneConfig => vec![RawFragment {
                text: content,
                offset: 0,
            }],
            CandidateKind::Source => self.extract_assignments(content),
        }
    }

    fn extract_assignments<'a>(&self, content: &'a str) -> Vec<RawFragment<'a>> {
        let mut fragments = Vec::new();
        let mut cursor = 0;

        while let Some(marker) = self.marker_pattern.find_at(content, cursor) {
            // The match ends just past the opening brace.
            let start = marker.end() - 1;
            match balanced_object_len(&content[start..]) {
                Some(len) => {
                    fragments.push(RawFragment {
                        text: &content[start..start + len],
                        offset: start,
                    });
                    cursor = start + len;
                }
                None => {
                    tracing::trace!("Unbalanced tailwind.config literal at byte {}", start);
                    cursor = marker.end();
                }
            }
        }

        fragments
    }
}

impl Default for FragmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Length in bytes of the brace-balanced prefix of `text`, which must start with `{`.
/// Returns `None` if the text ends before depth returns to zero.
fn balanced_object_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}
