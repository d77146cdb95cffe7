//! Story Card Component
//!
//! Renders a catalog story, wiring logging handlers into clickable stories so
//! activations can be observed in the harness.

use dioxus::prelude::*;

use super::Card;
use crate::model::CardConfig;
use crate::stories;

/// Properties for the StoryCard component
#[derive(Clone, PartialEq, Props)]
pub struct StoryCardProps {
    /// Story id from [`stories::all`]
    pub story_id: String,
    /// Receives a short description of every card or button activation
    #[props(default)]
    pub on_activity: Option<EventHandler<String>>,
}

#[component]
pub fn StoryCard(props: StoryCardProps) -> Element {
    let config = use_story_config(&props.story_id, props.on_activity);

    match config {
        Ok(config) => rsx! {
            Card { config: config }
        },
        Err(e) => rsx! {
            div { class: "story-missing", "{e}" }
        },
    }
}

/// The story's card with activity handlers attached.
///
/// Handlers are built the first time a story is shown and reused on later
/// renders, so the card's props stay equal until `story_id` changes.
pub fn use_story_config(
    story_id: &str,
    on_activity: Option<EventHandler<String>>,
) -> Result<CardConfig, String> {
    let mut cached = use_hook(|| CopyValue::new(None::<(String, Result<CardConfig, String>)>));

    let stale = cached
        .read()
        .as_ref()
        .map_or(true, |(id, _)| id != story_id);
    if stale {
        let built = stories::find(story_id)
            .map(|story| attach_activity(story.config(), story.clickable, on_activity))
            .map_err(|e| e.to_string());
        cached.set(Some((story_id.to_string(), built)));
    }

    let config = cached.read().as_ref().map(|(_, config)| config.clone());
    config.unwrap_or_else(|| Err(format!("Unknown story: {story_id}")))
}

/// Attaches logging handlers to the card and to every button that has no
/// action of its own.
pub fn attach_activity(
    mut config: CardConfig,
    clickable: bool,
    on_activity: Option<EventHandler<String>>,
) -> CardConfig {
    if clickable && config.on_click.is_none() {
        let heading = config.heading.clone();
        config.on_click = Some(EventHandler::new(move |_| {
            tracing::info!(heading = %heading, "card clicked");
            if let Some(sink) = &on_activity {
                sink.call(format!("card clicked: {heading}"));
            }
        }));
    }

    for button in config.buttons.iter_mut().filter(|b| b.action.is_none()) {
        let label = button.label.clone();
        button.action = Some(EventHandler::new(move |_| {
            tracing::info!(label = %label, "button pressed");
            if let Some(sink) = &on_activity {
                sink.call(format!("button pressed: {label}"));
            }
        }));
    }

    config
}
