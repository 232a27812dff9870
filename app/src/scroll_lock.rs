//! Document-level scroll lock owned by the host page.
//!
//! The header only reports whether its mobile panel is open. Host pages
//! feed that value through [`apply`] so the page body stops scrolling while
//! the panel covers it.

use leptos::prelude::*;

#[must_use]
pub const fn overflow(locked: bool) -> &'static str {
    if locked { "hidden" } else { "auto" }
}

/// Sets `overflow` on `document.body`. Browser only.
pub fn apply(locked: bool) {
    let Some(body) = document().body() else {
        tracing::warn!("document has no body; scroll lock not applied");
        return;
    };
    if let Err(err) = body.style().set_property("overflow", overflow(locked)) {
        tracing::error!(?err, locked, "failed to apply scroll lock");
    }
}
