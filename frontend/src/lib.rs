//! WebAssembly entry point for the header preview page.
//!
//! It hydrates the server-rendered HTML so the burger menu, the login button
//! and the host scroll lock become interactive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the preview page on the client.
///
/// Initializes `console_log` and `console_error_panic_hook`, then mounts
/// `app::component` over the server-rendered DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating navigation header preview");
    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// `console_log` initialization may fail if a logger is already installed;
    /// it must not panic.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
