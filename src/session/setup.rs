//! Session setup and initialization

use crate::config::Config;
use crate::dataset::FeatherSource;
use crate::locale::DisplayLocale;
use crate::logging::{init_file_logging, resolve_log_level};
use crate::print_cmd_warn;
use crate::ui::UIConfig;
use log::{debug, info};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Session data shared by the TUI and summary modes
#[derive(Debug)]
pub struct SessionData {
    /// Resolved configuration, command-line overrides applied
    pub config: Config,
    /// Where both Feather files are read from
    pub source: FeatherSource,
    /// Display settings for the dashboard
    pub ui_config: UIConfig,
}

/// Prepares a session
///
/// This function handles:
/// 1. Loading the configuration file, or the defaults when it is absent
/// 2. Applying the `--data-dir` override
/// 3. Starting file logging (a failure only prints a warning)
/// 4. Resolving the display locale
///
/// # Arguments
/// * `config_path` - Location of `config.json`
/// * `data_dir` - Optional data directory override
/// * `with_background` - Whether to paint the dashboard background
pub fn setup_session(
    config_path: &Path,
    data_dir: Option<PathBuf>,
    with_background: bool,
) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::load_or_default(config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?
        .with_data_dir(data_dir);

    let app_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let log_path = config.log_path(app_dir);
    match init_file_logging(&log_path, resolve_log_level(&config.log_level)) {
        Ok(()) => info!(
            "Weather dashboard {} started, logging to {}",
            env!("CARGO_PKG_VERSION"),
            log_path.display()
        ),
        Err(e) => print_cmd_warn!("Logging disabled", "{}", e),
    }

    let locale = DisplayLocale::resolve(Some(&config.locale));
    info!("Display locale {} (configured {})", locale, config.locale);

    let source = FeatherSource::new(config.hourly_path(), config.daily_path());
    debug!(
        "Hourly data at {}, daily data at {}",
        source.hourly_path().display(),
        source.daily_path().display()
    );
    let ui_config = UIConfig::new(with_background, config.city.clone(), locale);

    Ok(SessionData {
        config,
        source,
        ui_config,
    })
}
