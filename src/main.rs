//! tailwind-harvester - collects Tailwind theme extensions from a WordPress site tree.
//!
//! Main entry point for the build-time harvest.
//!
//! # Execution Flow
//!
//! 1. Load `harvester.yaml` from the working directory (defaults if absent)
//! 2. Initialize logging (console, plus rotating files if `log_dir` is set)
//! 3. Walk the site (`<site_root>/wp-content`, or `<site_root>` if that is missing)
//! 4. Merge every `tailwind.config = {...}` and `*.tailwind.json` theme extension
//! 5. Write `<site_root>/harvested-config.json` for the style compiler
//!
//! # Exit status
//!
//! A failed harvest is logged and the previous `harvested-config.json` is left in place;
//! the process still exits 0 so the surrounding build continues with the last good
//! document. Only an unreadable settings file or a logging setup failure exits non-zero.

use anyhow::Result;
use tailwind_harvester::services::StyleCompilerConfig;
use tailwind_harvester::{APP_NAME, Harvester, SettingsManager, VERSION};

fn main() -> Result<()> {
    let settings = SettingsManager::default().load_settings()?;

    let _guard = tailwind_harvester::logging::setup_logging(
        settings.log_dir.as_deref(),
        APP_NAME,
        settings.debug_mode,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let harvester = Harvester::new(settings);
    match harvester.run() {
        Ok(report) => {
            let compiler = StyleCompilerConfig::load(&report.output_path);
            tracing::info!(
                "Style compiler will see {} font families and {} colors",
                compiler.theme.extend.font_family.len(),
                compiler.theme.extend.colors.len()
            );
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
        }
    }

    Ok(())
}
