//! Move-list modal: content model, view state and the renderer that drives a
//! [`Presenter`].
//!
//! The renderer owns the single [`ModalState`]. Every way of opening the modal
//! goes through [`ModalRenderer::open`] and every way of closing it (close
//! button, click on the backdrop, `Escape`) goes through [`ModalRenderer::close`].

use crate::error::SiteError;
use crate::moves::{Catalog, CharacterMoveset, MoveEntry};

pub const FALLBACK_TITLE: &str = "Character Moves";

pub const FALLBACK_LINES: &[&str] = &[
    "🎮 Complete move lists available in-game!",
    "Click the ❓ help icon in the main menu to see detailed moves for all 22 fighters.",
    "🤖 Click the black part of any character box to challenge a bot opponent!",
];

pub const ROSTER_TITLE: &str = "All 22 Fighters";

/// Static roster blurb shown by the "all fighters" trigger. Not catalog driven.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RosterSummary {
    pub heading: &'static str,
    pub intro: &'static str,
    pub featured_heading: &'static str,
    pub featured: &'static [&'static str],
    pub secret_heading: &'static str,
    pub secret_note: &'static str,
    pub pro_tip: &'static str,
}

pub static ROSTER_SUMMARY: RosterSummary = RosterSummary {
    heading: "🎮 Complete Roster",
    intro: "Super Smash Bros Infinity v0.7.0 features 22 unique fighters from across gaming and pop culture!",
    featured_heading: "🔥 Featured Fighters Include:",
    featured: &[
        "🍄 Mario - The iconic plumber",
        "💨 Sonic - The blue blur",
        "💀 Sans - The skeleton with a bad time",
        "⛏️ Steve - From the world of blocks",
        "🌟 Shaggy - Ultra Instinct activated",
        "☕ Cuphead - Run and gun hero",
        "🌸 Kirby - The pink puffball",
        "🍃 Naruto - Ninja of the Hidden Leaf",
        "🐉 Goku - Saiyan warrior",
        "⚡ Pikachu - Electric mouse",
        "🗡️ Link - Hero of Hyrule",
        "🤖 Megaman - The blue bomber",
        "And 10+ more amazing fighters!",
    ],
    secret_heading: "🔓 Secret Fighters",
    secret_note: "Some fighters are unlocked through gameplay! Discover hidden characters as you play.",
    pro_tip: "Use the ❓ help icon in-game to see complete move lists, frame data, and advanced techniques for every fighter!",
};

/// Body of the modal below the title.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ModalBody {
    Moveset {
        description: &'static str,
        special_moves: &'static [MoveEntry],
        combo_suggestions: &'static [&'static str],
        bot_note: String,
    },
    /// Unknown or missing character id.
    Fallback { lines: &'static [&'static str] },
    Roster(&'static RosterSummary),
}

/// Structured payload handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModalContent {
    pub title: String,
    pub body: ModalBody,
}

impl ModalContent {
    pub fn moveset(set: &'static CharacterMoveset) -> Self {
        Self {
            title: format!("{} - Move List", set.display_name),
            body: ModalBody::Moveset {
                description: set.description,
                special_moves: set.special_moves,
                combo_suggestions: set.combo_suggestions,
                bot_note: format!(
                    "Click the black part of {}'s character box in-game to fight against CPU!",
                    set.display_name
                ),
            },
        }
    }

    pub fn fallback() -> Self {
        Self { title: FALLBACK_TITLE.to_string(), body: ModalBody::Fallback { lines: FALLBACK_LINES } }
    }

    pub fn roster() -> Self {
        Self { title: ROSTER_TITLE.to_string(), body: ModalBody::Roster(&ROSTER_SUMMARY) }
    }
}

/// Two-state view model. Closing drops the content; nothing carries over
/// between openings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible(ModalContent),
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible(_))
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match self {
            ModalState::Visible(c) => Some(c),
            ModalState::Hidden => None,
        }
    }
}

/// Presentation seam. The DOM implementation lives in `dom.rs`; tests use a
/// recording double.
pub trait Presenter {
    /// Replace the modal's title and body.
    fn render(&mut self, content: &ModalContent) -> Result<(), SiteError>;
    fn set_overlay_visible(&mut self, visible: bool) -> Result<(), SiteError>;
    /// Suspend (`true`) or restore (`false`) page scrolling behind the modal.
    fn set_background_scroll_locked(&mut self, locked: bool) -> Result<(), SiteError>;
}

/// What the page asked the modal to do. Produced by `events::dispatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    ShowMoveset(&'a str),
    ShowRoster,
    Close,
}

pub struct ModalRenderer<P: Presenter> {
    catalog: &'static Catalog,
    presenter: P,
    state: ModalState,
}

impl<P: Presenter> ModalRenderer<P> {
    pub fn new(catalog: &'static Catalog, presenter: P) -> Self {
        Self { catalog, presenter, state: ModalState::Hidden }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Open the move list for `id`. Ids missing from the catalog (including the
    /// empty string) get the generic fallback panel.
    pub fn show_moveset(&mut self, id: &str) -> Result<(), SiteError> {
        let content = match self.catalog.get(id) {
            Some(set) => ModalContent::moveset(set),
            None => {
                tracing::debug!(id, "no moveset catalogued, showing fallback panel");
                ModalContent::fallback()
            }
        };
        self.open(content)
    }

    pub fn show_roster_summary(&mut self) -> Result<(), SiteError> {
        self.open(ModalContent::roster())
    }

    /// Hide the modal and restore page scroll. No-op when already hidden.
    pub fn close(&mut self) -> Result<(), SiteError> {
        if !self.state.is_visible() {
            tracing::trace!("close on hidden modal ignored");
            return Ok(());
        }
        self.state = ModalState::Hidden;
        self.presenter.set_overlay_visible(false)?;
        self.presenter.set_background_scroll_locked(false)?;
        tracing::debug!("modal closed");
        Ok(())
    }

    pub fn apply(&mut self, action: Action<'_>) -> Result<(), SiteError> {
        match action {
            Action::ShowMoveset(id) => self.show_moveset(id),
            Action::ShowRoster => self.show_roster_summary(),
            Action::Close => self.close(),
        }
    }

    // Shared by both show paths; re-rendering a visible modal replaces its content in place.
    fn open(&mut self, content: ModalContent) -> Result<(), SiteError> {
        self.presenter.render(&content)?;
        self.presenter.set_overlay_visible(true)?;
        self.presenter.set_background_scroll_locked(true)?;
        tracing::debug!(title = %content.title, "modal shown");
        self.state = ModalState::Visible(content);
        Ok(())
    }
}
