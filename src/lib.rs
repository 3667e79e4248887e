#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod page;

/// Browser console verbosity: debug builds show navigation and reveal traces.
pub fn client_log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(client_log_level(cfg!(debug_assertions))) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_log_level() {
        assert_eq!(client_log_level(true), log::Level::Debug);
        assert_eq!(client_log_level(false), log::Level::Info);
    }
}
