//! Style Advisor Web App (Leptos + WASM)

mod app;
mod components;
pub mod api;
mod notify;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
