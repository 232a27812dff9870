use leptos::{
    html::{a, div},
    prelude::*,
    svg::svg,
};

use crate::navigation::{EXTERNAL_REL, EXTERNAL_TARGET, SOCIAL_LINKS, SocialLink};

fn social_link(link: SocialLink) -> impl IntoView {
    let glyph = link.icon.glyph();
    a().href(link.url)
        .rel(EXTERNAL_REL)
        .target(EXTERNAL_TARGET)
        .aria_label(link.icon.label())
        .class("text-white transition-all duration-500 size-6 hover:text-purple-300")
        .child(
            svg()
                .attr("viewBox", glyph.view_box)
                .inner_html(glyph.data)
                .attr("fill", "currentColor")
                .class("size-6"),
        )
}

pub fn component() -> impl IntoView {
    div()
        .class("flex flex-row gap-4 items-center h-10")
        .child(SOCIAL_LINKS.into_iter().map(social_link).collect_view())
}
