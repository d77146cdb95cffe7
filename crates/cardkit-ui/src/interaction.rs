//! Event routing for interactive cards.
//!
//! A click or key press inside a card may start on the card surface or on one
//! of its nested buttons. Buttons always handle their own press; the card
//! handler only fires for events that did not start in a button. The card
//! decides this itself from the recorded origin instead of relying on the
//! button to stop propagation.

use dioxus::prelude::Key;

/// Where an event inside the card started
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EventOrigin {
    /// Anywhere outside a nested button
    #[default]
    Surface,
    /// The button at this index in the button group
    Button(usize),
}

/// Which handler an event resolves to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Activation {
    Card,
    Button(usize),
}

/// Routes a pointer click.
///
/// Button presses go to the button only. Surface clicks go to the card when it
/// has a handler and are otherwise ignored.
pub fn route_click(origin: EventOrigin, interactive: bool) -> Option<Activation> {
    match origin {
        EventOrigin::Button(index) => Some(Activation::Button(index)),
        EventOrigin::Surface => interactive.then_some(Activation::Card),
    }
}

/// Keys that activate a focused card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Enter => Some(ActivationKey::Enter),
            Key::Character(c) if c == " " => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

/// What the card should do with a key press
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct KeyOutcome {
    /// Invoke the card handler (exactly once)
    pub activate: bool,
    /// Suppress the key's default action, such as Space scrolling the page
    pub prevent_default: bool,
}

/// Routes a key press that reached the card root.
pub fn route_key(key: &Key, origin: EventOrigin, interactive: bool) -> KeyOutcome {
    if !interactive || origin != EventOrigin::Surface {
        return KeyOutcome::default();
    }
    match ActivationKey::from_key(key) {
        Some(_) => KeyOutcome {
            activate: true,
            prevent_default: true,
        },
        None => KeyOutcome::default(),
    }
}
