// Core application modules and components
use crate::components::{error_template, footer, navbar};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

use crate::api::site_settings;
use crate::nav::{BodyScroll, ScrollLock};

pub mod api;
mod components;
pub mod nav;
mod pages;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/site.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("SRL Group").build()),
        )),
        body().class("text-black bg-white font-poppins").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

/// Root view: router, navigation bar, routed pages and footer.
///
/// The navigation bar waits for the site settings; if they cannot be loaded
/// it renders with [`types::SiteSettings::default`].
#[must_use]
pub fn component() -> impl IntoView {
    // One document, one scroll lock shared by every panel.
    provide_context(ScrollLock::new(BodyScroll));

    let settings = Resource::new_blocking(
        || (),
        move |()| async move {
            site_settings().await.unwrap_or_else(|err| {
                tracing::warn!(%err, "failed to load site settings; using defaults");
                types::SiteSettings::default()
            })
        },
    );

    view! {
        <Router>
            <div class="min-h-screen">
                <Suspense fallback=|| ()>
                    {move || settings.get().map(navbar::component)}
                </Suspense>
                <main>
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <Route path=StaticSegment("") view=pages::home/>
                        <Route path=StaticSegment("about") view=pages::about/>
                        <Route path=StaticSegment("projects") view=pages::projects/>
                        <Route path=(StaticSegment("project"), ParamSegment("slug")) view=pages::project/>
                        <Route path=StaticSegment("gallery") view=pages::gallery/>
                        <Route path=StaticSegment("testimonial") view=pages::testimonial/>
                        <Route path=StaticSegment("contact") view=pages::contact/>
                    </FlatRoutes>
                </main>
                {footer::component()}
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("site").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;
    }

    #[test]
    fn test_every_nav_item_has_a_distinct_route() {
        let mut paths: Vec<_> = nav::NAV_ITEMS.iter().map(|item| item.path).collect();
        assert!(paths.iter().all(|path| path.starts_with('/')));
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), nav::NAV_ITEMS.len());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_function_signature() {
        use leptos::server_fn::ServerFn;

        let _settings_fn: fn() -> _ = site_settings;
        assert!(<api::FetchSiteSettings as ServerFn>::PATH.ends_with("/site_settings"));
    }
}
