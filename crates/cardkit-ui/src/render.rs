//! Static HTML rendering through `dioxus-ssr`.
//!
//! Used by the CLI to export stories and by the integration tests to inspect
//! the rendered tree without a browser.

use dioxus::prelude::*;

use crate::components::{attach_activity, Card};
use crate::model::CardConfig;
use crate::stories::Story;
use crate::theme;

#[derive(Clone, PartialEq, Props)]
struct PreviewProps {
    config: CardConfig,
    clickable: bool,
}

#[allow(non_snake_case)]
fn Preview(props: PreviewProps) -> Element {
    let config = use_hook(|| attach_activity(props.config, props.clickable, None));
    rsx! {
        Card { config: config }
    }
}

/// Renders the bare card markup for a configuration.
///
/// `clickable` attaches a logging card handler, which is what switches on
/// the interactive affordances.
pub fn card_fragment(config: CardConfig, clickable: bool) -> String {
    let mut vdom = VirtualDom::new_with_props(Preview, PreviewProps { config, clickable });
    vdom.rebuild_in_place();
    let html = dioxus_ssr::render(&vdom);
    tracing::debug!(bytes = html.len(), "rendered card fragment");
    html
}

/// Renders the bare card markup for a story.
pub fn story_fragment(story: &Story) -> String {
    card_fragment(story.config(), story.clickable)
}

/// Wraps card markup in a standalone HTML document with the stylesheet
/// inlined.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{css}</style>\n</head>\n\
         <body>\n<main class=\"story-stage\">\n<div class=\"story-stage__canvas\">\n{body}\n</div>\n</main>\n</body>\n</html>\n",
        title = escape(title),
        css = theme::harness_stylesheet(),
    )
}

/// Standalone HTML document for one story.
pub fn story_document(story: &Story) -> String {
    let body = format!(
        "<h1 class=\"style-guide__title\">{}</h1>\n<p class=\"story-stage__description\">{}</p>\n{}",
        escape(story.title),
        escape(story.description),
        story_fragment(story)
    );
    document(story.title, &body)
}

/// Index page linking every story document by `<id>.html`.
pub fn index_document(stories: &[Story]) -> String {
    let mut body = String::from("<h1 class=\"style-guide__title\">Card stories</h1>\n<nav>\n");
    for story in stories {
        body.push_str(&format!(
            "<a class=\"story-nav__link\" href=\"{id}.html\">{title}</a>\n",
            id = story.id,
            title = escape(story.title)
        ));
    }
    body.push_str("</nav>");
    document("Card stories", &body)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
