//! Integration tests for SettingsManager and settings-driven harvests
//!
//! These tests verify:
//! - Loading defaults when no settings file exists
//! - Overriding individual keys from YAML
//! - Rejecting malformed settings files
//! - Custom exclusion and suffix rules reaching the harvest

use camino::Utf8PathBuf;
use std::fs;
use tailwind_harvester::{HarvestSettings, Harvester, SettingsManager};
use tempfile::TempDir;

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, path)
}

#[test]
fn test_default_manager_points_at_working_directory() {
    let manager = SettingsManager::default();
    assert_eq!(manager.settings_path().as_str(), "harvester.yaml");
}

#[test]
fn test_overrides_from_yaml() {
    let (_temp_dir, dir) = create_test_dir();
    let settings_path = dir.join("harvester.yaml");
    fs::write(
        &settings_path,
        "site_root: /srv/www\n\
         preferred_subdir: ''\n\
         excluded_dirs: [vendor]\n\
         scan_extensions: ['.twig']\n\
         debug_mode: true\n",
    )
    .unwrap();

    let settings = SettingsManager::new(&settings_path).load_settings().unwrap();

    assert_eq!(settings.site_root, "/srv/www");
    assert_eq!(settings.preferred_root(), None);
    assert_eq!(settings.excluded_dirs, vec!["vendor".to_string()]);
    assert_eq!(settings.scan_extensions, vec![".twig".to_string()]);
    assert!(settings.debug_mode);
    assert_eq!(settings.standalone_suffix, ".tailwind.json");
}

#[test]
fn test_malformed_settings_file_is_an_error() {
    let (_temp_dir, dir) = create_test_dir();
    let settings_path = dir.join("harvester.yaml");
    fs::write(&settings_path, "excluded_dirs: 12\ndebug_mode: [nope]\n").unwrap();

    assert!(SettingsManager::new(&settings_path).load_settings().is_err());
}

#[test]
fn test_save_creates_parent_directory() {
    let (_temp_dir, dir) = create_test_dir();
    let settings_path = dir.join("conf").join("harvester.yaml");
    let manager = SettingsManager::new(&settings_path);

    manager.save_settings(&HarvestSettings::default()).unwrap();

    assert!(settings_path.exists());
    assert_eq!(manager.load_settings().unwrap(), HarvestSettings::default());
}

#[test]
fn test_custom_rules_reach_the_harvest() {
    let (_temp_dir, root) = create_test_dir();
    fs::create_dir_all(root.join("vendor")).unwrap();
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::write(
        root.join("vendor/base.twig"),
        "tailwind.config = {theme:{extend:{colors:{vendor:'#1'}}}}",
    )
    .unwrap();
    fs::write(
        root.join("node_modules/page.twig"),
        "tailwind.config = {theme:{extend:{colors:{modules:'#2'}}}}",
    )
    .unwrap();
    fs::write(
        root.join("index.php"),
        "tailwind.config = {theme:{extend:{colors:{php:'#3'}}}}",
    )
    .unwrap();

    let mut settings = HarvestSettings::for_site(&root);
    settings.excluded_dirs = vec!["vendor".to_string()];
    settings.scan_extensions = vec![".twig".to_string()];

    let (acc, _report) = Harvester::new(settings).collect().unwrap();
    let keys: Vec<&str> = acc.extend.colors.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["modules"]);
}
