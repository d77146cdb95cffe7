//! Card Component
//!
//! Paints a [`CardConfig`] using the styling resolved by [`CardStyle`].

use dioxus::prelude::*;

use super::{ActionButton, CardBadge, GlyphIcon};
use crate::interaction::{route_click, route_key, Activation, EventOrigin};
use crate::model::{CardConfig, Media};
use crate::paint;
use crate::style::{CardStyle, MediaSize, MediaStyle};

/// Content card with optional media, badges, buttons and footer.
///
/// When `config.on_click` is set the whole card is an activation target:
/// clicks outside the nested buttons and Enter/Space while focused invoke it
/// once. Button presses only run the button's own action.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         config: CardConfig::new("Modern Design System", "A flexible card.")
///             .with_image("https://example.com/cover.jpg")
///             .with_badge("New", Emphasis::Primary)
///             .with_button(CardButton::new("Learn More", Emphasis::Primary)),
///     }
/// }
/// ```
#[component]
pub fn Card(
    config: CardConfig,
    /// Extra classes appended to the root container
    #[props(default)]
    class: Option<String>,
) -> Element {
    let style = CardStyle::of(&config);
    let mut origin = use_signal(EventOrigin::default);

    let interactive = config.is_interactive();
    let on_click = config.on_click;
    let root_class = match &class {
        Some(extra) => format!("{} {}", paint::root_class(&style), extra),
        None => paint::root_class(&style).to_string(),
    };
    let root_style = paint::root_style(&style);

    let heading_for_click = config.heading.clone();
    let handle_click = move |_: MouseEvent| {
        let from = *origin.peek();
        origin.set(EventOrigin::Surface);
        if route_click(from, interactive) == Some(Activation::Card) {
            if let Some(handler) = &on_click {
                tracing::debug!(heading = %heading_for_click, "card activated by click");
                handler.call(());
            }
        }
    };

    let heading_for_key = config.heading.clone();
    let handle_key = move |evt: KeyboardEvent| {
        let from = *origin.peek();
        origin.set(EventOrigin::Surface);
        let outcome = route_key(&evt.key(), from, interactive);
        if outcome.prevent_default {
            evt.prevent_default();
        }
        if outcome.activate {
            if let Some(handler) = &on_click {
                tracing::debug!(heading = %heading_for_key, "card activated by key");
                handler.call(());
            }
        }
    };

    let media = config.visible_media().clone();
    let badges = config.visible_badges().to_vec();
    let buttons = config.visible_buttons().to_vec();
    let footer = config.visible_footer().cloned();
    let content_class = paint::content_class(&style.content).to_string();
    let content_style = paint::content_style(&style.content);
    let badge_row = style
        .badges
        .map(|justify| (paint::badges_class(justify).to_string(), paint::badges_style(justify)));
    let buttons_class = if style.centered {
        "card__buttons card__buttons--centered"
    } else {
        "card__buttons"
    };

    rsx! {
        div {
            "data-testid": "card-container",
            role: "article",
            class: "{root_class}",
            style: "{root_style}",
            tabindex: style.affordance.tab_index(),
            onclick: handle_click,
            onkeydown: handle_key,

            if let Some(media_style) = style.media {
                CardMedia {
                    media: media,
                    media_style: media_style,
                    alt: config.heading.clone(),
                }
            }

            div {
                class: "{content_class}",
                style: "{content_style}",

                if let Some((badges_class, badges_style)) = badge_row {
                    div {
                        class: "{badges_class}",
                        style: "{badges_style}",
                        for badge in badges.iter() {
                            CardBadge { label: badge.label.clone(), variant: badge.variant }
                        }
                    }
                }

                div { class: "card__titles",
                    if let Some(eyebrow) = &config.eyebrow {
                        span { class: "card__eyebrow", "{eyebrow}" }
                    }
                    h3 { class: "card__heading", "{config.heading}" }
                    if let Some(subheading) = &config.subheading {
                        h4 { class: "card__subheading", "{subheading}" }
                    }
                }

                p { class: "card__body", "{config.body}" }

                if !buttons.is_empty() {
                    div {
                        "data-testid": "button-container",
                        class: buttons_class,
                        for (index, button) in buttons.iter().enumerate() {
                            {
                                let action = button.action;
                                rsx! {
                                    ActionButton {
                                        label: button.label.clone(),
                                        variant: button.variant,
                                        on_press: move |_| {
                                            if let Some(action) = &action {
                                                action.call(());
                                            }
                                        },
                                        on_origin: move |_| origin.set(EventOrigin::Button(index)),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(footer) = footer {
                div { class: "card__footer",
                    if let Some(icon) = footer.icon {
                        GlyphIcon { glyph: icon, size: 20, class: Some("card__footer-icon".to_string()) }
                    }
                    span { class: "card__footer-text", "{footer.text}" }
                }
            }
        }
    }
}

/// The media block: a lazily loaded image or a fixed-size glyph.
#[component]
fn CardMedia(media: Media, media_style: MediaStyle, alt: String) -> Element {
    let class = paint::media_class(&media_style).to_string();
    let style = paint::media_style(&media_style);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {match media {
                Media::Glyph(glyph) => {
                    let side = match media_style.size {
                        MediaSize::Glyph { side } => u32::from(side),
                        MediaSize::Image(_) => 60,
                    };
                    rsx! { GlyphIcon { glyph: glyph, size: side } }
                }
                Media::Image(src) => rsx! {
                    img {
                        src: "{src}",
                        alt: "{alt}",
                        role: "img",
                        "loading": "lazy",
                        "decoding": "async",
                    }
                },
                Media::None => rsx! {},
            }}
        }
    }
}
