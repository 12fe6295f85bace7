//! Smash Infinity promo site crate.
//!
//! Drives the fighter move-list modal of the promotional page: a fixed catalog
//! of fighter movesets, a two-state modal renderer and the DOM glue that wires
//! card clicks, the close control, backdrop clicks and `Escape` into it. The
//! page's purely decorative effects (particles, fade-ins, glitch text) stay in
//! CSS and are not handled here.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod modal;
pub mod moves;

pub use config::SiteConfig;
pub use error::SiteError;
pub use events::{PageEvent, dispatch};
pub use modal::{Action, ModalBody, ModalContent, ModalRenderer, ModalState, Presenter};
pub use moves::{Catalog, CharacterMoveset, MoveEntry};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}

// -----------------------------------------------------------------------------
// JS entrypoints. The page's inline handlers call these; the delegated
// listeners installed by `start_site` end up in the same renderer.
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    dom::start(SiteConfig::default())?;
    Ok(())
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_site_with_config(json: &str) -> Result<(), JsValue> {
    dom::start(SiteConfig::from_json(json)?)?;
    Ok(())
}

#[wasm_bindgen]
pub fn show_character_moves(character: &str) -> Result<(), JsValue> {
    dom::with_site(|site| site.renderer.apply(Action::ShowMoveset(character)))?;
    Ok(())
}

#[wasm_bindgen]
pub fn show_all_fighters() -> Result<(), JsValue> {
    dom::with_site(|site| site.renderer.apply(Action::ShowRoster))?;
    Ok(())
}

#[wasm_bindgen]
pub fn close_modal() -> Result<(), JsValue> {
    dom::with_site(|site| site.renderer.apply(Action::Close))?;
    Ok(())
}

#[wasm_bindgen]
pub fn is_modal_open() -> Result<bool, JsValue> {
    Ok(dom::with_site(|site| Ok(site.renderer.is_visible()))?)
}

/// Visible modal payload as JSON, or `null` while hidden.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn current_modal_json() -> Result<String, JsValue> {
    let content = dom::with_site(|site| Ok(site.renderer.state().content().cloned()))?;
    serde_json::to_string(&content).map_err(|e| JsValue::from_str(&e.to_string()))
}
