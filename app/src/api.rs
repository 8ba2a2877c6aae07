//! Server functions backing the site layout.

use leptos::prelude::{ServerFnError, server};

use crate::types::SiteSettings;

/// Returns the site settings the server loaded at startup.
///
/// The navigation bar reads its social links and support phone number from
/// here; callers fall back to [`SiteSettings::default`] on error.
#[server(name = FetchSiteSettings, endpoint = "/site_settings")]
pub async fn site_settings() -> Result<SiteSettings, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;

    let Some(AppState { settings, .. }) = use_context::<AppState>() else {
        tracing::warn!("AppState missing from context; serving default site settings");
        return Ok(SiteSettings::default());
    };
    Ok(settings.as_ref().clone())
}
