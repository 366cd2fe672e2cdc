use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Harvester settings, optionally loaded from `harvester.yaml`.
///
/// Every field has a default matching the standard WordPress container layout, so an
/// absent or partial settings file is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestSettings {
    /// Root of the served document tree.
    pub site_root: Utf8PathBuf,

    /// Subtree scanned in preference to the whole site root when it exists.
    /// An empty string always scans the site root.
    pub preferred_subdir: String,

    /// Output document, relative to `site_root`.
    pub output_file: Utf8PathBuf,

    /// Directory names whose subtrees are never visited.
    pub excluded_dirs: Vec<String>,

    /// File suffixes that may carry an inline `tailwind.config` assignment.
    pub scan_extensions: Vec<String>,

    /// Compound suffix of standalone JSON theme files.
    pub standalone_suffix: String,

    /// Directory for rotating log files; console only when unset.
    pub log_dir: Option<Utf8PathBuf>,

    pub debug_mode: bool,
}

impl Default for HarvestSettings {
    fn default() -> Self {
        Self {
            site_root: Utf8PathBuf::from("/var/www/html"),
            preferred_subdir: "wp-content".to_string(),
            output_file: Utf8PathBuf::from("harvested-config.json"),
            excluded_dirs: vec![
                "node_modules".to_string(),
                "wp-admin".to_string(),
                "wp-includes".to_string(),
                ".git".to_string(),
            ],
            scan_extensions: vec![".php".to_string(), ".html".to_string(), ".js".to_string()],
            standalone_suffix: ".tailwind.json".to_string(),
            log_dir: None,
            debug_mode: false,
        }
    }
}

impl HarvestSettings {
    /// Settings rooted at `site_root`, everything else default.
    pub fn for_site<P: AsRef<Utf8Path>>(site_root: P) -> Self {
        Self {
            site_root: site_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Absolute location of the harvested document.
    pub fn output_path(&self) -> Utf8PathBuf {
        self.site_root.join(&self.output_file)
    }

    /// Preferred subtree, if one is configured. Existence is not checked here.
    pub fn preferred_root(&self) -> Option<Utf8PathBuf> {
        if self.preferred_subdir.is_empty() {
            None
        } else {
            Some(self.site_root.join(&self.preferred_subdir))
        }
    }
}
