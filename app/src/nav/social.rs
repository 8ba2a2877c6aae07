//! Social links shown at the bottom of the side panel.

use core::str::FromStr;

use icondata::{FiExternalLink, FiFacebook, FiInstagram, FiLinkedin, FiPhone, FiTwitter, FiYoutube};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SocialLink {
    pub id: i64,
    #[serde(default)]
    pub platform: Option<String>,
    pub url: String,
    #[serde(default)]
    pub position: i64,
}

/// Platforms that have a dedicated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Youtube,
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported social platform")]
pub struct UnknownPlatform;

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "youtube" => Ok(Self::Youtube),
            "whatsapp" => Ok(Self::Whatsapp),
            _ => Err(UnknownPlatform),
        }
    }
}

/// Glyph rendered for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Platform(Platform),
    ExternalLink,
}

impl Icon {
    pub fn glyph(self) -> icondata::Icon {
        match self {
            Self::Platform(Platform::Instagram) => FiInstagram,
            Self::Platform(Platform::Facebook) => FiFacebook,
            Self::Platform(Platform::Twitter) => FiTwitter,
            Self::Platform(Platform::Linkedin) => FiLinkedin,
            Self::Platform(Platform::Youtube) => FiYoutube,
            Self::Platform(Platform::Whatsapp) => FiPhone,
            Self::ExternalLink => FiExternalLink,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Platform(Platform::Instagram) => "Instagram",
            Self::Platform(Platform::Facebook) => "Facebook",
            Self::Platform(Platform::Twitter) => "Twitter",
            Self::Platform(Platform::Linkedin) => "LinkedIn",
            Self::Platform(Platform::Youtube) => "YouTube",
            Self::Platform(Platform::Whatsapp) => "WhatsApp",
            Self::ExternalLink => "External link",
        }
    }
}

/// Case-insensitive platform lookup; anything unknown or missing falls back
/// to the generic external link glyph.
pub fn resolve_icon(platform: Option<&str>) -> Icon {
    platform
        .and_then(|name| name.parse().ok())
        .map_or(Icon::ExternalLink, Icon::Platform)
}

/// Orders links by `position`, keeping input order for equal positions.
pub fn sort_social_links(links: &[SocialLink]) -> Vec<SocialLink> {
    let mut sorted = links.to_vec();
    sorted.sort_by_key(|link| link.position);
    sorted
}

/// Reads a list of social links, dropping entries that do not fit the
/// [`SocialLink`] shape instead of failing the whole document.
///
/// A missing, `null` or non-array value yields an empty list.
pub fn deserialize_social_links<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(%other, "social_links is not a list; ignoring it");
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(link) => Some(link),
            Err(err) => {
                tracing::warn!(index, %err, "skipping malformed social link");
                None
            }
        })
        .collect())
}
