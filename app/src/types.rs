use serde::{Deserialize, Serialize};

use crate::nav::{SettingData, SocialLink};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;
#[cfg(feature = "ssr")]
use std::{path::Path, sync::Arc};
#[cfg(feature = "ssr")]
use thiserror::Error;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub settings: Arc<SiteSettings>,
    pub leptos_options: LeptosOptions,
}

/// Externally supplied inputs of the navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SiteSettings {
    /// Malformed entries are dropped so one bad link cannot hide the rest of
    /// the document.
    #[serde(default, deserialize_with = "crate::nav::deserialize_social_links")]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub setting_data: Option<SettingData>,
}

#[cfg(feature = "ssr")]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(feature = "ssr")]
impl SiteSettings {
    /// Parses a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the JSON does not match the schema.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] if the file cannot be read and
    /// [`SettingsError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod site_settings_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_default() {
        let settings: SiteSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert!(settings.social_links.is_empty());
        assert_eq!(settings.setting_data, None);
    }

    #[test]
    fn test_full_document() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "social_links": [
                {"id": 1, "platform": "Facebook", "url": "https://facebook.com/srl", "position": 2},
                {"id": 2, "platform": "instagram", "url": "https://instagram.com/srl", "position": 1}
            ],
            "setting_data": {"data": [{"primary_phone": "0123"}]}
        }))
        .unwrap();

        assert_eq!(settings.social_links.len(), 2);
        assert_eq!(settings.social_links[1].platform.as_deref(), Some("instagram"));
        assert_eq!(
            crate::nav::resolve_phone(settings.setting_data.as_ref()),
            "0123"
        );
    }

    #[cfg(feature = "ssr")]
    mod loading {
        use super::*;
        use assert_matches::assert_matches;

        #[test]
        fn test_from_json_rejects_malformed_input() {
            assert_matches!(
                SiteSettings::from_json("{\"setting_data\": {\"data\": 3}}"),
                Err(SettingsError::Parse(_))
            );
            assert_matches!(
                SiteSettings::from_json("not json"),
                Err(SettingsError::Parse(_))
            );
        }

        #[test]
        fn test_bad_social_link_keeps_phone_number() {
            let settings = SiteSettings::from_json(
                r#"{
                    "social_links": [
                        {"id": 1, "platform": "facebook"},
                        {"id": 2, "url": "https://example.com/2", "position": 1.5},
                        {"id": 3, "url": "https://example.com/3", "position": 1}
                    ],
                    "setting_data": {"data": [{"primary_phone": "0123"}]}
                }"#,
            )
            .unwrap();

            assert_eq!(settings.social_links.len(), 1);
            assert_eq!(settings.social_links[0].id, 3);
            assert_eq!(
                crate::nav::resolve_phone(settings.setting_data.as_ref()),
                "0123"
            );
        }

        #[test]
        fn test_from_path_reports_missing_file() {
            let missing = std::env::temp_dir().join("site-settings-does-not-exist.json");
            assert_matches!(
                SiteSettings::from_path(&missing),
                Err(SettingsError::Read { .. })
            );
        }

        #[test]
        fn test_from_path_reads_file() {
            let path = std::env::temp_dir().join(format!(
                "site-settings-{}.json",
                std::process::id()
            ));
            std::fs::write(&path, r#"{"setting_data": {"data": [{"primary_phone": "0777"}]}}"#)
                .unwrap();

            let settings = SiteSettings::from_path(&path).unwrap();
            std::fs::remove_file(&path).unwrap();

            assert_eq!(
                crate::nav::resolve_phone(settings.setting_data.as_ref()),
                "0777"
            );
        }
    }
}
