//! Route targets for the navigation links.
//!
//! Page content is owned by the marketing team; each route renders a titled
//! section so the navigation and its active highlighting can be exercised.

use leptos::{
    html::{h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_params_map;

fn page(title: &'static str, blurb: &'static str) -> impl IntoView {
    section().class("py-32 px-6 mx-auto max-w-5xl").child((
        Title(TitleProps::builder().text(title).build()),
        h1().class("mb-6 text-5xl font-light").child(title),
        p().class("text-lg text-black/60").child(blurb),
    ))
}

pub fn home() -> impl IntoView {
    page("Home", "Trading, health care, energy and digital services under one group.")
}

pub fn about() -> impl IntoView {
    page("SRL - Trading", "Import, export and distribution.")
}

pub fn projects() -> impl IntoView {
    page("Health Care", "Our health care projects.")
}

/// Detail page for one project, addressed by `/project/:slug`.
pub fn project() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|params| params.get("slug").unwrap_or_default());

    section().class("py-32 px-6 mx-auto max-w-5xl").child((
        h1().class("mb-6 text-5xl font-light").child(move || slug()),
        p().class("text-lg text-black/60").child("Project details."),
    ))
}

pub fn gallery() -> impl IntoView {
    page("Ever Power", "Energy and power solutions.")
}

pub fn testimonial() -> impl IntoView {
    page("Dbox Digital", "Digital services and what our clients say.")
}

pub fn contact() -> impl IntoView {
    page("Contact", "Reach us through the support button in the menu.")
}
