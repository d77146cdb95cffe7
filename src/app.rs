use dioxus::prelude::*;

use cardkit_ui::theme::harness_stylesheet;

use crate::pages::{StoryIndex, StoryView, StyleGuide};

/// Application routes.
///
/// - `/` - Style guide with every card variant grouped by topic
/// - `/stories` - Story browser opened on the first story
/// - `/stories/:id` - Story browser opened on a specific story
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    StyleGuide {},
    #[route("/stories")]
    StoryIndex {},
    #[route("/stories/:id")]
    StoryView { id: String },
}

/// Root application component.
///
/// Provides the stylesheet and routing.
#[component]
pub fn App() -> Element {
    let styles = use_hook(harness_stylesheet);

    rsx! {
        style { {styles} }
        Router::<Route> {}
    }
}
