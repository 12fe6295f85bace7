// Browser tests for the DOM glue. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use smash_infinity_site::dom::DomPresenter;
use smash_infinity_site::{Catalog, ModalRenderer, SiteConfig, SiteError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

// Recreate the page's modal markup and fighter cards, replacing any left over
// from a previous test.
fn mount_modal_markup(doc: &Document) {
    for id in ["movesModal", "test-cards"] {
        if let Some(old) = doc.get_element_by_id(id) {
            old.remove();
        }
    }
    let cards = doc.create_element("div").unwrap();
    cards.set_id("test-cards");
    cards.set_inner_html(
        "<div data-character='sonic'><span id='sonic-name'>Sonic</span></div>\
         <div data-character='kirby'><span id='kirby-roster' data-show-roster>All</span></div>\
         <div data-character='mario'><button id='mario-close' data-modal-close>x</button></div>\
         <div data-character><span id='blank-card'>?</span></div>\
         <button id='roster-button' data-show-roster>All Fighters</button>",
    );
    doc.body().unwrap().append_child(&cards).unwrap();

    let overlay = doc.create_element("div").unwrap();
    overlay.set_id("movesModal");
    overlay.set_inner_html(
        "<div class='modal-content'><span id='close-x' data-modal-close>×</span>\
         <h2 id='modalCharacterName'></h2><div id='characterMoves'></div></div>",
    );
    doc.body().unwrap().append_child(&overlay).unwrap();
}

fn click(doc: &Document, id: &str) {
    let el: HtmlElement = doc.get_element_by_id(id).unwrap().dyn_into().unwrap();
    el.click();
}

fn press(doc: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let evt = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&evt).unwrap();
}

fn title(doc: &Document) -> String {
    doc.get_element_by_id("modalCharacterName").unwrap().text_content().unwrap()
}

fn body_overflow(doc: &Document) -> String {
    doc.body().unwrap().style().get_property_value("overflow").unwrap()
}

fn overlay_display(doc: &Document) -> String {
    let el: HtmlElement = doc.get_element_by_id("movesModal").unwrap().dyn_into().unwrap();
    el.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
fn attach_fails_without_markup() {
    let doc = document();
    if let Some(old) = doc.get_element_by_id("movesModal") {
        old.remove();
    }
    let err = DomPresenter::attach(&doc, &SiteConfig::default()).err().unwrap();
    assert_eq!(err, SiteError::MissingElement { id: "movesModal".into() });
}

#[wasm_bindgen_test]
fn moveset_is_projected_into_the_page() {
    let doc = document();
    mount_modal_markup(&doc);
    let presenter = DomPresenter::attach(&doc, &SiteConfig::default()).unwrap();
    let mut renderer = ModalRenderer::new(Catalog::builtin(), presenter);

    renderer.show_moveset("sonic").unwrap();
    let title = doc.get_element_by_id("modalCharacterName").unwrap();
    assert_eq!(title.text_content().unwrap(), "Sonic - Move List");
    let moves = doc.query_selector("#characterMoves .moves-list").unwrap().unwrap();
    assert_eq!(moves.child_element_count(), 5);
    assert_eq!(overlay_display(&doc), "block");
    assert_eq!(doc.body().unwrap().style().get_property_value("overflow").unwrap(), "hidden");

    renderer.close().unwrap();
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(doc.body().unwrap().style().get_property_value("overflow").unwrap(), "auto");
}

#[wasm_bindgen_test]
fn catalog_text_is_not_parsed_as_html() {
    let doc = document();
    mount_modal_markup(&doc);
    let presenter = DomPresenter::attach(&doc, &SiteConfig::default()).unwrap();
    let mut renderer = ModalRenderer::new(Catalog::builtin(), presenter);

    renderer.show_moveset("cuphead").unwrap();
    renderer.show_moveset("<img src=x>").unwrap();
    let body = doc.get_element_by_id("characterMoves").unwrap();
    assert!(body.query_selector("img").unwrap().is_none());
    // previous content is replaced, not appended to
    assert!(body.query_selector(".moves-list").unwrap().is_none());
    assert!(body.text_content().unwrap().contains("Complete move lists available in-game!"));
}

#[wasm_bindgen_test]
fn exported_entrypoints_drive_the_live_site() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();

    smash_infinity_site::show_all_fighters().unwrap();
    assert!(smash_infinity_site::is_modal_open().unwrap());
    let title = doc.get_element_by_id("modalCharacterName").unwrap();
    assert_eq!(title.text_content().unwrap(), "All 22 Fighters");

    smash_infinity_site::close_modal().unwrap();
    smash_infinity_site::close_modal().unwrap();
    assert!(!smash_infinity_site::is_modal_open().unwrap());
    assert_eq!(overlay_display(&doc), "none");
}

#[wasm_bindgen_test]
fn restarting_closes_an_open_modal() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();
    smash_infinity_site::show_all_fighters().unwrap();
    assert_eq!(overlay_display(&doc), "block");

    smash_infinity_site::start_site().unwrap();
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(body_overflow(&doc), "auto");
    assert!(!smash_infinity_site::is_modal_open().unwrap());

    // dismiss paths still work against the rebound renderer
    smash_infinity_site::show_character_moves("sora").unwrap();
    press(&doc, "Escape");
    assert_eq!(overlay_display(&doc), "none");
}

#[wasm_bindgen_test]
fn card_click_opens_moves_and_inner_click_keeps_them_open() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();

    click(&doc, "sonic-name");
    assert_eq!(title(&doc), "Sonic - Move List");
    assert_eq!(overlay_display(&doc), "block");

    click(&doc, "modalCharacterName");
    assert_eq!(overlay_display(&doc), "block");
    assert_eq!(title(&doc), "Sonic - Move List");

    smash_infinity_site::close_modal().unwrap();
}

#[wasm_bindgen_test]
fn card_without_id_shows_fallback() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();

    click(&doc, "blank-card");
    assert_eq!(title(&doc), "Character Moves");
    assert_eq!(overlay_display(&doc), "block");
    smash_infinity_site::close_modal().unwrap();
}

#[wasm_bindgen_test]
fn close_control_beats_roster_trigger_beats_card() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();

    click(&doc, "kirby-roster");
    assert_eq!(title(&doc), "All 22 Fighters");
    assert_eq!(overlay_display(&doc), "block");

    // close control nested in the mario card closes instead of opening mario
    click(&doc, "mario-close");
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(title(&doc), "All 22 Fighters");

    click(&doc, "roster-button");
    assert_eq!(overlay_display(&doc), "block");
    smash_infinity_site::close_modal().unwrap();
}

#[wasm_bindgen_test]
fn close_button_backdrop_and_escape_all_dismiss() {
    let doc = document();
    mount_modal_markup(&doc);
    smash_infinity_site::start_site().unwrap();

    click(&doc, "sonic-name");
    click(&doc, "close-x");
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(body_overflow(&doc), "auto");

    click(&doc, "sonic-name");
    click(&doc, "movesModal");
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(body_overflow(&doc), "auto");

    click(&doc, "sonic-name");
    press(&doc, "Enter");
    assert_eq!(overlay_display(&doc), "block");
    press(&doc, "Escape");
    assert_eq!(overlay_display(&doc), "none");
    assert_eq!(body_overflow(&doc), "auto");
    assert!(!smash_infinity_site::is_modal_open().unwrap());
}
