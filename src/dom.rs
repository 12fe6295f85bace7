//! Browser glue: projects [`ModalContent`] into the page and turns DOM events
//! into modal actions.
//!
//! The live renderer sits in a thread-local slot; the wasm main thread is the
//! only task that ever touches it.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node, window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::events::{self, PageEvent};
use crate::modal::{ModalBody, ModalContent, ModalRenderer, Presenter, RosterSummary};
use crate::moves::Catalog;

/// Presenter backed by the page's modal markup. Builds content with
/// `textContent` only, so catalog strings never reach the HTML parser.
pub struct DomPresenter {
    document: Document,
    overlay: HtmlElement,
    title: Element,
    body: Element,
    page: HtmlElement,
}

impl DomPresenter {
    /// Bind to the elements named in `config`. Every one must already exist.
    pub fn attach(document: &Document, config: &SiteConfig) -> Result<Self, SiteError> {
        let overlay = require(document, &config.overlay_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::MissingElement { id: config.overlay_id.clone() })?;
        let title = require(document, &config.title_id)?;
        let body = require(document, &config.body_id)?;
        let page = document
            .body()
            .ok_or_else(|| SiteError::MissingElement { id: "body".into() })?;
        Ok(Self { document: document.clone(), overlay, title, body, page })
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, SiteError> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn text(&self, tag: &str, class: &str, text: &str) -> Result<Element, SiteError> {
        let el = self.element(tag, class)?;
        el.set_text_content(Some(text));
        Ok(el)
    }

    fn list<I, S>(&self, class: &str, items: I) -> Result<Element, SiteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ul = self.element("ul", class)?;
        for item in items {
            let child = self.text("li", "", item.as_ref())?;
            ul.append_child(&child)?;
        }
        Ok(ul)
    }

    // <p>{icon} <strong>{label}</strong> {text}</p>
    fn labelled(&self, icon: &str, label: &str, text: &str) -> Result<Element, SiteError> {
        let p = self.element("p", "")?;
        p.append_with_str_1(&format!("{icon} "))?;
        let child = self.text("strong", "", label)?;
        p.append_with_node_1(&child)?;
        p.append_with_str_1(&format!(" {text}"))?;
        Ok(p)
    }

    fn render_roster(&self, roster: &RosterSummary) -> Result<Element, SiteError> {
        let root = self.element("div", "all-fighters-info")?;
        let child = self.text("h3", "", roster.heading)?;
        root.append_child(&child)?;
        let child = self.text("p", "", roster.intro)?;
        root.append_child(&child)?;

        let featured = self.element("div", "fighters-list")?;
        let child = self.text("h4", "", roster.featured_heading)?;
        featured.append_child(&child)?;
        let child = self.list("", roster.featured.iter())?;
        featured.append_child(&child)?;
        root.append_child(&featured)?;

        let secret = self.element("div", "unlock-info")?;
        let child = self.text("h4", "", roster.secret_heading)?;
        secret.append_child(&child)?;
        let child = self.text("p", "", roster.secret_note)?;
        secret.append_child(&child)?;
        root.append_child(&secret)?;

        let tip = self.element("div", "moves-reminder")?;
        let child = self.labelled("💡", "Pro Tip:", roster.pro_tip)?;
        tip.append_child(&child)?;
        root.append_child(&tip)?;
        Ok(root)
    }
}

impl Presenter for DomPresenter {
    fn render(&mut self, content: &ModalContent) -> Result<(), SiteError> {
        self.title.set_text_content(Some(&content.title));
        // drop whatever the previous opening left behind
        self.body.set_text_content(None);
        match &content.body {
            ModalBody::Moveset { description, special_moves, combo_suggestions, bot_note } => {
                let info = self.element("div", "character-info")?;
                let child = self.text("p", "character-desc", description)?;
                info.append_child(&child)?;
                self.body.append_child(&info)?;

                let moves = self.element("div", "moves-section")?;
                let child = self.text("h3", "", "🎮 Special Moves")?;
                moves.append_child(&child)?;
                let child = self.list("moves-list", special_moves.iter().map(|m| m.to_string()))?;
                moves.append_child(&child)?;
                self.body.append_child(&moves)?;

                let combos = self.element("div", "combos-section")?;
                let child = self.text("h3", "", "⚔️ Combo Ideas")?;
                combos.append_child(&child)?;
                let child = self.list("combos-list", combo_suggestions.iter())?;
                combos.append_child(&child)?;
                self.body.append_child(&combos)?;

                let bot = self.element("div", "bot-info")?;
                let child = self.labelled("🤖", "Bot Battle:", bot_note)?;
                bot.append_child(&child)?;
                self.body.append_child(&bot)?;
            }
            ModalBody::Fallback { lines } => {
                let info = self.element("div", "character-info")?;
                for line in lines.iter() {
                    let child = self.text("p", "", line)?;
                    info.append_child(&child)?;
                }
                self.body.append_child(&info)?;
            }
            ModalBody::Roster(roster) => {
                let child = self.render_roster(roster)?;
                self.body.append_child(&child)?;
            }
        }
        Ok(())
    }

    fn set_overlay_visible(&mut self, visible: bool) -> Result<(), SiteError> {
        let display = if visible { "block" } else { "none" };
        self.overlay.style().set_property("display", display)?;
        Ok(())
    }

    fn set_background_scroll_locked(&mut self, locked: bool) -> Result<(), SiteError> {
        let overflow = if locked { "hidden" } else { "auto" };
        self.page.style().set_property("overflow", overflow)?;
        Ok(())
    }
}

fn require(document: &Document, id: &str) -> Result<Element, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement { id: id.to_string() })
}

// --- Site slot ---------------------------------------------------------------

pub(crate) struct Site {
    pub renderer: ModalRenderer<DomPresenter>,
    pub config: SiteConfig,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Run `f` against the started site, or fail with [`SiteError::NotStarted`].
pub(crate) fn with_site<R>(f: impl FnOnce(&mut Site) -> Result<R, SiteError>) -> Result<R, SiteError> {
    SITE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(site) => f(site),
        None => Err(SiteError::NotStarted),
    })
}

/// Bind the modal markup and install page listeners. Calling again closes any
/// open modal, then rebinds the presenter (and config) without stacking a
/// second set of listeners.
pub fn start(config: SiteConfig) -> Result<(), SiteError> {
    let win = window().ok_or(SiteError::NoWindow)?;
    let doc = win.document().ok_or(SiteError::NoDocument)?;
    let presenter = DomPresenter::attach(&doc, &config)?;
    let site = Site { renderer: ModalRenderer::new(Catalog::builtin(), presenter), config };

    let previous = SITE.with(|cell| cell.replace(Some(site)));
    let first_start = previous.is_none();
    if let Some(mut old) = previous {
        // the new renderer starts hidden, so the page must not stay open or scroll-locked
        old.renderer.close()?;
    }
    if first_start {
        install_listeners(&doc)?;
    }
    tracing::info!(fighters = Catalog::builtin().len(), first_start, "site started");
    Ok(())
}

fn install_listeners(doc: &Document) -> Result<(), SiteError> {
    // Delegated click listener: cards, roster trigger, close control, backdrop.
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            let target = evt.target().and_then(|t| t.dyn_into::<Element>().ok());
            if let Err(err) = on_click(target) {
                tracing::error!(%err, "click handling failed");
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            let key = evt.key();
            let result = with_site(|site| match events::dispatch(PageEvent::KeyDown { key: &key }) {
                Some(action) => site.renderer.apply(action),
                None => Ok(()),
            });
            if let Err(err) = result {
                tracing::error!(%err, "keydown handling failed");
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_click(target: Option<Element>) -> Result<(), SiteError> {
    let Some(target) = target else {
        return Ok(());
    };
    with_site(|site| {
        let config = &site.config;
        let character;
        let event = if target.closest(&SiteConfig::attr_selector(&config.close_attr))?.is_some() {
            PageEvent::CloseClicked
        } else if target.closest(&SiteConfig::attr_selector(&config.roster_attr))?.is_some() {
            PageEvent::RosterClicked
        } else if let Some(card) = target.closest(&SiteConfig::attr_selector(&config.character_attr))? {
            character = card.get_attribute(&config.character_attr);
            PageEvent::CardClicked { character: character.as_deref() }
        } else {
            let overlay: &Node = site.renderer.presenter().overlay();
            PageEvent::Clicked { on_backdrop: target.is_same_node(Some(overlay)) }
        };
        match events::dispatch(event) {
            Some(action) => site.renderer.apply(action),
            None => Ok(()),
        }
    })
}
