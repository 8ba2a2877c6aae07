use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::nav::{SocialLink, resolve_icon, sort_social_links};

/// Inline SVG for an `icondata` glyph, sized by `class`.
pub fn glyph(icon: icondata::Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill.unwrap_or("currentColor"))
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}

/// Row of social links ordered by position. Renders an empty grid when there
/// are no links.
pub fn component(links: Vec<SocialLink>) -> impl IntoView {
    let links = sort_social_links(&links);

    div().class("grid grid-cols-5 gap-3 mb-8").child(
        links
            .into_iter()
            .map(|social| {
                let icon = resolve_icon(social.platform.as_deref());
                a().href(social.url)
                    .rel("noopener noreferrer")
                    .target("_blank")
                    .aria_label(icon.label())
                    .class("flex justify-center items-center w-10 h-10 bg-gray-100 rounded-lg transition-colors duration-300 hover:text-white hover:bg-primary")
                    .child(glyph(icon.glyph(), "size-5"))
            })
            .collect_view(),
    )
}
