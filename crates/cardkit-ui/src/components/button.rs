//! Action Button Component
//!
//! Buttons rendered inside a card's button group. A button only ever runs its
//! own action; the surrounding card uses `on_origin` to learn that an event
//! started here so it does not fire its own handler as well.

use dioxus::prelude::*;

use crate::model::Emphasis;
use crate::paint::button_class;

/// Properties for the ActionButton component
#[derive(Clone, PartialEq, Props)]
pub struct ActionButtonProps {
    /// Button text
    pub label: String,
    /// Visual weight
    #[props(default = Emphasis::Primary)]
    pub variant: Emphasis,
    /// The button's own action
    #[props(default)]
    pub on_press: Option<EventHandler<()>>,
    /// Called before any click or key press leaves the button
    #[props(default)]
    pub on_origin: Option<EventHandler<()>>,
}

/// Styled card action button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ActionButton {
///         label: "Learn More".to_string(),
///         variant: Emphasis::Primary,
///         on_press: move |_| tracing::info!("learn more"),
///     }
/// }
/// ```
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let on_press = props.on_press;
    let on_origin = props.on_origin;

    rsx! {
        button {
            class: button_class(props.variant),
            r#type: "button",
            onclick: move |_| {
                if let Some(origin) = &on_origin {
                    origin.call(());
                }
                if let Some(handler) = &on_press {
                    handler.call(());
                }
            },
            onkeydown: move |_| {
                if let Some(origin) = &on_origin {
                    origin.call(());
                }
            },
            "{props.label}"
        }
    }
}
