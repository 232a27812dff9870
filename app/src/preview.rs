//! This module defines the `preview` page, a host page for the navigation header.
//!
//! The header parameters are read from the query string, validated, and the
//! header is rendered above some filler content. The page also plays the host's
//! part of the scroll-lock contract: it mirrors the header's scroll-lock output
//! in a signal and applies it to the document body.

use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_query_map;

use crate::{
    components::{error_template, header},
    navigation::HeaderInput,
    scroll_lock,
};

fn filler() -> impl IntoView {
    div().class("flex flex-col gap-6 px-6 pt-28 pb-14 mx-auto max-w-4xl").child((
        h1().class("text-4xl font-bold").child("Header preview"),
        (0..12)
            .map(|i| {
                p().class("text-gray-600").child(format!(
                    "Section {}: scroll to check that the page stays put while the mobile menu is open.",
                    i + 1
                ))
            })
            .collect_view(),
    ))
}

/// Renders the preview page for the current query string.
pub fn component() -> impl IntoView {
    let query = use_query_map();
    let scroll_locked = RwSignal::new(false);
    let on_scroll_lock = Callback::new(move |locked: bool| scroll_locked.set(locked));

    // Effects only run in the browser.
    Effect::new(move |_| scroll_lock::apply(scroll_locked.get()));

    let page = move || {
        let input = query.with(|query| HeaderInput::from_query(|key| query.get(key)));
        match input.validate() {
            Ok(config) => {
                scroll_locked.set(false);
                div()
                    .child((header::component(config, Some(on_scroll_lock)), filler()))
                    .into_any()
            }
            Err(err) => {
                let mut errors = Errors::default();
                errors.insert_with_default_key(error_template::AppError::from(err));
                error_template::component(Some(errors), None).into_any()
            }
        }
    };

    div().child((
        Title(TitleProps::builder().text("Designs.ai \u{2013} Header preview").build()),
        page,
    ))
}
