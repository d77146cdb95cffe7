//! Story browser - one story per page with a sidebar and an activity log.

use dioxus::prelude::*;

use cardkit_ui::stories;
use cardkit_ui::StoryCard;

use crate::app::Route;

/// Keeps the log readable when a card is clicked repeatedly
const ACTIVITY_LIMIT: usize = 20;

/// `/stories` opens the first story in the catalog.
#[component]
pub fn StoryIndex() -> Element {
    let first = stories::all().first().map(|s| s.id).unwrap_or_default();
    rsx! {
        StoryView { id: first.to_string() }
    }
}

/// `/stories/:id`
#[component]
pub fn StoryView(id: String) -> Element {
    let mut activity = use_signal(Vec::<String>::new);

    // Start each story with an empty log
    use_effect(use_reactive((&id,), move |(_id,)| {
        activity.write().clear();
    }));

    let story = stories::find(&id).ok();
    let on_activity = move |entry: String| {
        let mut log = activity.write();
        log.insert(0, entry);
        log.truncate(ACTIVITY_LIMIT);
    };

    rsx! {
        div { class: "story-browser",
            nav { class: "story-nav",
                div { class: "story-nav__heading", "Stories" }
                Link { to: Route::StyleGuide {}, class: "story-nav__link", "\u{2190} Style guide" }
                for entry in stories::all() {
                    Link {
                        to: Route::StoryView { id: entry.id.to_string() },
                        class: if entry.id == id { "story-nav__link active" } else { "story-nav__link" },
                        {entry.title}
                    }
                }
            }

            main { class: "story-stage",
                {match story {
                    Some(story) => rsx! {
                        h1 { {story.title} }
                        p { class: "story-stage__description", {story.description} }
                        div { class: "story-stage__canvas",
                            StoryCard { story_id: story.id.to_string(), on_activity: on_activity }
                        }
                    },
                    None => rsx! {
                        h1 { "Unknown story" }
                        p { class: "story-stage__description", "No story is registered as '{id}'." }
                    },
                }}

                if !activity.read().is_empty() {
                    ol { class: "activity-log",
                        for entry in activity.read().iter() {
                            li { class: "activity-log__entry", "{entry}" }
                        }
                    }
                }
            }
        }
    }
}
