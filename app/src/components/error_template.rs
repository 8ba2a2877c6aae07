//! Error page rendered for unknown routes.
//!
//! On the server it also sets the HTTP status code of the response from the
//! first [`AppError`] found.

use http::status::StatusCode;
use icondata::FiArrowLeft;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use super::icons::glyph;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders every [`AppError`] contained in `errors`.
///
/// An empty error set renders a generic "Error" heading; a missing
/// `ResponseOptions` context leaves the status code untouched.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center py-40 px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                div().class("flex flex-col gap-1 justify-center items-center").child(
                    h1().class("text-xl tracking-widest text-gray-400 uppercase")
                        .child(format!("{}| {error}", error.status_code())),
                )
            })
            .collect_view(),
        div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-primary").child(
            A(AProps::builder()
                .href("/")
                .children(ToChildren::to_children(|| {
                    vec![glyph(FiArrowLeft, "size-4").into_any(), "Go back home".into_any()]
                }))
                .build()),
        ),
    ))
}
