use crate::models::{ParsedFragmentConfig, ThemeAccumulator};

/// Fold one parsed fragment into the accumulator.
///
/// Shallow, last-write-wins per key: a later fragment's `colors.brand` or
/// `fontFamily.heading` replaces the earlier value wholesale. A key that is overwritten
/// keeps its original position in the output. Returns how many keys were written;
/// zero when the fragment has no `theme.extend`.
pub fn merge_into(accumulator: &mut ThemeAccumulator, fragment: ParsedFragmentConfig) -> usize {
    let Some(extension) = fragment.extend else {
        return 0;
    };

    let mut written = 0;

    for (name, color) in extension.colors {
        if let Some(previous) = accumulator.extend.colors.insert(name.clone(), color) {
            tracing::debug!("colors.{} overrides earlier value {}", name, previous);
        }
        written += 1;
    }

    for (name, fonts) in extension.font_family {
        if let Some(previous) = accumulator.extend.font_family.insert(name.clone(), fonts) {
            tracing::debug!("fontFamily.{} overrides earlier stack {:?}", name, previous);
        }
        written += 1;
    }

    written
}
