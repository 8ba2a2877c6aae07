use serde::{Deserialize, Serialize};

/// Shown in the support modal when no phone number is configured.
pub const DEFAULT_SUPPORT_PHONE: &str = "01872175065";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingEntry {
    #[serde(default)]
    pub primary_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingData {
    #[serde(default)]
    pub data: Vec<SettingEntry>,
}

/// Phone number handed to the support modal: the first entry's primary phone
/// when it is set and non-empty, the default number otherwise.
pub fn resolve_phone(setting_data: Option<&SettingData>) -> String {
    setting_data
        .and_then(|settings| settings.data.first())
        .and_then(|entry| entry.primary_phone.as_deref())
        .filter(|phone| !phone.is_empty())
        .unwrap_or(DEFAULT_SUPPORT_PHONE)
        .to_owned()
}
