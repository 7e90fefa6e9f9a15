/// Funnelback Switcher - browser extension popup for Funnelback search pages
/// Built with Rust + WASM + Yew

mod controls;
mod search_url;
mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the URL rewriting functions for JavaScript access
#[wasm_bindgen]
pub fn switch_view_url(url: &str, view: &str) -> Option<String> {
    search_url::View::from_token(view).map(|view| search_url::switch_view(url, view))
}

#[wasm_bindgen]
pub fn switch_profile_url(url: &str, profile: &str) -> String {
    search_url::switch_profile(url, profile)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
