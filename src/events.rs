//! Page event → modal action table.
//!
//! The DOM glue classifies each raw browser event into a [`PageEvent`]; this
//! module decides what, if anything, the modal should do about it. Kept free of
//! `web_sys` so the mapping is testable natively.

use crate::modal::Action;

/// Key that dismisses the modal.
pub const CANCEL_KEY: &str = "Escape";

/// Browser events the site cares about, already classified by target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent<'a> {
    /// Click on a fighter card. `None` when the card carries no character id.
    CardClicked { character: Option<&'a str> },
    /// Click on the "all fighters" trigger.
    RosterClicked,
    /// Click on the modal's close control.
    CloseClicked,
    /// Any other click. `on_backdrop` is true when the target is the overlay
    /// itself, i.e. outside the modal content box.
    Clicked { on_backdrop: bool },
    KeyDown { key: &'a str },
}

pub fn dispatch(event: PageEvent<'_>) -> Option<Action<'_>> {
    match event {
        // A card without an id shares the unknown-id fallback panel.
        PageEvent::CardClicked { character } => Some(Action::ShowMoveset(character.unwrap_or(""))),
        PageEvent::RosterClicked => Some(Action::ShowRoster),
        PageEvent::CloseClicked => Some(Action::Close),
        PageEvent::Clicked { on_backdrop: true } => Some(Action::Close),
        PageEvent::Clicked { on_backdrop: false } => None,
        PageEvent::KeyDown { key } if key == CANCEL_KEY => Some(Action::Close),
        PageEvent::KeyDown { .. } => None,
    }
}
