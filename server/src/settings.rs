use std::env;
use std::path::PathBuf;

use app::types::{SettingsError, SiteSettings};
use tracing::{error, info, warn};

/// Settings file used when `SITE_SETTINGS_PATH` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "site_settings.json";

pub fn settings_path() -> PathBuf {
    env::var("SITE_SETTINGS_PATH")
        .ok()
        .filter(|s| !s.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from)
}

/// Loads the navigation settings, falling back to defaults.
///
/// A missing file is expected on fresh checkouts and only warns; a file that
/// exists but cannot be parsed is logged as an error.
pub fn load_site_settings() -> SiteSettings {
    let path = settings_path();
    match SiteSettings::from_path(&path) {
        Ok(settings) => {
            info!(
                path = %path.display(),
                social_links = settings.social_links.len(),
                "Loaded site settings"
            );
            settings
        }
        Err(err @ SettingsError::Read { .. }) => {
            warn!(%err, "Site settings unavailable; using defaults");
            SiteSettings::default()
        }
        Err(err) => {
            error!(%err, path = %path.display(), "Malformed site settings; using defaults");
            SiteSettings::default()
        }
    }
}
