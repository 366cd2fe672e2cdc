//! Name-only traversal and scan decisions.
//!
//! Nothing here touches the filesystem: directories are pruned by exact base name and
//! files are admitted by suffix.

use crate::models::HarvestSettings;
use std::collections::HashSet;

/// How a candidate file is searched for fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Markup or script source; searched for `tailwind.config = {...}` assignments.
    Source,
    /// Standalone JSON theme file; the whole content is one fragment.
    StandaloneConfig,
}

#[derive(Debug, Clone)]
pub struct PathFilter {
    excluded_dirs: HashSet<String>,
    scan_extensions: Vec<String>,
    standalone_suffix: String,
}

impl PathFilter {
    pub fn new<I, E>(excluded_dirs: I, scan_extensions: E, standalone_suffix: &str) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            excluded_dirs: excluded_dirs.into_iter().map(Into::into).collect(),
            scan_extensions: scan_extensions.into_iter().map(Into::into).collect(),
            standalone_suffix: standalone_suffix.to_string(),
        }
    }

    pub fn from_settings(settings: &HarvestSettings) -> Self {
        Self::new(
            settings.excluded_dirs.iter().cloned(),
            settings.scan_extensions.iter().cloned(),
            &settings.standalone_suffix,
        )
    }

    /// Whether a directory with this base name should be descended into.
    pub fn should_traverse(&self, dir_name: &str) -> bool {
        !self.excluded_dirs.contains(dir_name)
    }

    /// Classify a file by name, or `None` if it should not be scanned.
    ///
    /// The standalone suffix is checked first so `theme.tailwind.json` is never mistaken
    /// for source even if `.json` were ever added to the scan extensions.
    pub fn classify(&self, file_name: &str) -> Option<CandidateKind> {
        if !self.standalone_suffix.is_empty() && file_name.ends_with(&self.standalone_suffix) {
            return Some(CandidateKind::StandaloneConfig);
        }

        if self
            .scan_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
        {
            Some(CandidateKind::Source)
        } else {
            None
        }
    }

    pub fn should_scan(&self, file_name: &str) -> bool {
        self.classify(file_name).is_some()
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::from_settings(&HarvestSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_denylist() {
        let filter = PathFilter::default();
        assert!(!filter.should_traverse("node_modules"));
        assert!(!filter.should_traverse("wp-admin"));
        assert!(!filter.should_traverse("wp-includes"));
        assert!(!filter.should_traverse(".git"));
        assert!(filter.should_traverse("wp-content"));
        assert!(filter.should_traverse("themes"));
    }

    #[test]
    fn test_denylist_is_exact_match() {
        let filter = PathFilter::default();
        assert!(filter.should_traverse("node_modules_old"));
        assert!(filter.should_traverse("Node_Modules"));
        assert!(filter.should_traverse(".github"));
    }

    #[test]
    fn test_classify_sources() {
        let filter = PathFilter::default();
        assert_eq!(filter.classify("index.php"), Some(CandidateKind::Source));
        assert_eq!(filter.classify("page.html"), Some(CandidateKind::Source));
        assert_eq!(filter.classify("app.js"), Some(CandidateKind::Source));
        assert_eq!(filter.classify("style.css"), None);
        assert_eq!(filter.classify("data.json"), None);
        assert_eq!(filter.classify("module.mjs"), None);
    }

    #[test]
    fn test_classify_standalone() {
        let filter = PathFilter::default();
        assert_eq!(
            filter.classify("theme.tailwind.json"),
            Some(CandidateKind::StandaloneConfig)
        );
        assert_eq!(filter.classify("tailwind.json"), None);
    }

    #[test]
    fn test_custom_rules() {
        let filter = PathFilter::new(["vendor"], [".twig"], "");
        assert!(!filter.should_traverse("vendor"));
        assert!(filter.should_traverse("node_modules"));
        assert!(filter.should_scan("base.twig"));
        assert!(!filter.should_scan("index.php"));
        assert!(!filter.should_scan("theme.tailwind.json"));
    }

    proptest! {
        #[test]
        fn prop_denylisted_names_never_traversed(idx in 0usize..4) {
            let settings = HarvestSettings::default();
            let filter = PathFilter::from_settings(&settings);
            prop_assert!(!filter.should_traverse(&settings.excluded_dirs[idx]));
        }

        #[test]
        fn prop_scan_requires_allowed_suffix(stem in "[a-z0-9_.-]{0,12}", ext in "[a-z]{1,5}") {
            let filter = PathFilter::default();
            let name = format!("{}.{}", stem, ext);
            let allowed = [".php", ".html", ".js", ".tailwind.json"]
                .iter()
                .any(|suffix| name.ends_with(suffix));
            prop_assert_eq!(filter.should_scan(&name), allowed);
        }
    }
}
