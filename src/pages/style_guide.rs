//! Style guide page - every card variant grouped by topic.
//!
//! If a story was requested on the command line, redirects to it on mount.

use dioxus::prelude::*;

use cardkit_ui::stories::COVER_IMAGE;
use cardkit_ui::{
    Alignment, Card, CardButton, CardConfig, Emphasis, Footer, Glyph, IconSize, ImagePosition,
    ImageSize, Layout,
};

use crate::app::Route;
use crate::startup::STARTUP_STORY;

/// One titled group of cards
struct Section {
    title: &'static str,
    /// Rendered in a quieter heading, used for counter-examples
    muted: bool,
    cards: Vec<CardConfig>,
}

const ALIGNMENT_BODY: &str = "Stay ahead of the curve with our comprehensive guide to modern \
    design principles. Learn about emerging trends and timeless practices that shape great user \
    experiences.";

fn primary(label: &str) -> CardButton {
    CardButton::new(label, Emphasis::Primary)
}

fn secondary(label: &str) -> CardButton {
    CardButton::new(label, Emphasis::Secondary)
}

fn fullbleed_section() -> Section {
    Section {
        title: "Fullbleed Images",
        muted: false,
        cards: vec![
            CardConfig::new(
                "Vertical Fullbleed",
                "This card demonstrates a fullbleed image in a vertical layout. The large image \
                 extends to the edges of the card, creating a dramatic visual effect perfect for \
                 showcasing photography.",
            )
            .with_subheading("Edge-to-Edge Visual Impact")
            .with_image(COVER_IMAGE)
            .with_image_size(ImageSize::Large)
            .with_fullbleed(true)
            .with_button(primary("View Gallery")),
            CardConfig::new(
                "Horizontal Fullbleed",
                "In this horizontal layout, the fullbleed image creates a seamless edge-to-edge \
                 effect on the left side of the card. This design is particularly effective for \
                 wide-format photography or when you want to create a strong visual hierarchy.",
            )
            .with_subheading("Side-to-Edge Impact")
            .with_image(COVER_IMAGE)
            .with_image_size(ImageSize::Large)
            .with_fullbleed(true)
            .with_layout(Layout::Horizontal)
            .with_image_position(ImagePosition::Left)
            .with_button(primary("Explore More")),
        ],
    }
}

fn footer_section() -> Section {
    Section {
        title: "Footer Variations",
        muted: false,
        cards: vec![
            CardConfig::new(
                "Simple Footer",
                "This card demonstrates a simple footer with just text. Footers are perfect for \
                 displaying metadata, timestamps, or additional context about the content.",
            )
            .with_subheading("Basic Information Display")
            .with_button(primary("Learn More"))
            .with_footer(Footer::new("Last updated 2 days ago")),
            CardConfig::new(
                "Footer with Icon",
                "Adding an icon to the footer helps provide visual context and makes the \
                 information more scannable. This pattern works well for status updates or \
                 time-sensitive information.",
            )
            .with_subheading("Enhanced Visual Context")
            .with_alignment(Alignment::Center)
            .with_button(primary("View Details"))
            .with_footer(Footer::new("Updated 5 minutes ago").with_icon(Glyph::Clock)),
        ],
    }
}

fn badge_section() -> Section {
    Section {
        title: "Badge Variations",
        muted: false,
        cards: vec![
            CardConfig::new(
                "Single Badge",
                "A single badge is perfect for highlighting the most important status or \
                 category of content. It's clean and doesn't compete for attention with other \
                 elements.",
            )
            .with_subheading("Focused Status")
            .with_image(COVER_IMAGE)
            .with_badge("Featured", Emphasis::Primary)
            .with_button(primary("Learn More")),
            CardConfig::new(
                "Multiple Badges",
                "Using two badges allows for multiple classifications or statuses. The primary \
                 badge draws immediate attention while the secondary provides additional \
                 context.",
            )
            .with_subheading("Dual Classification")
            .with_image(COVER_IMAGE)
            .with_badge("New", Emphasis::Primary)
            .with_badge("Premium", Emphasis::Secondary)
            .with_button(primary("Get Started")),
        ],
    }
}

fn image_options_section() -> Section {
    let large = |layout: Layout| {
        CardConfig::new(
            "Large Image Size",
            "The large image size option provides maximum visual impact, perfect for showcasing \
             high-quality photography or detailed illustrations. This setting is ideal for hero \
             sections or featured content.",
        )
        .with_subheading("Maximum Visual Impact")
        .with_image(COVER_IMAGE)
        .with_image_size(ImageSize::Large)
        .with_layout(layout)
        .with_button(primary("View Example"))
    };
    let medium = |layout: Layout| {
        CardConfig::new(
            "Medium Image Size",
            "Medium image size offers a balanced approach, providing enough visual interest \
             while maintaining focus on the content. This is our most versatile option, \
             suitable for most use cases.",
        )
        .with_subheading("Balanced Presentation")
        .with_image(COVER_IMAGE)
        .with_image_size(ImageSize::Medium)
        .with_layout(layout)
        .with_button(primary("Learn More"))
    };

    Section {
        title: "Image Options",
        muted: false,
        cards: vec![
            large(Layout::Vertical),
            large(Layout::Horizontal),
            medium(Layout::Vertical),
            medium(Layout::Horizontal),
            CardConfig::new(
                "Large Primary Icon Size",
                "Large icons make a strong visual statement and work well as the primary visual \
                 element. They're perfect for feature highlights or when you want to emphasize a \
                 specific concept or action.",
            )
            .with_subheading("Bold Icon Display")
            .with_glyph(Glyph::Palette)
            .with_icon_size(IconSize::Large)
            .with_button(primary("Explore Icons")),
            CardConfig::new(
                "Small Utility Icon Size",
                "Small icons provide a subtle visual accent without overwhelming the content. \
                 They're ideal for supporting information or when you want to maintain focus on \
                 the text content.",
            )
            .with_subheading("Subtle Visual Element")
            .with_glyph(Glyph::Minimize)
            .with_icon_size(IconSize::Small)
            .with_button(primary("See Details")),
        ],
    }
}

fn image_position_section() -> Section {
    let positioned = |heading: &str, subheading: &str, body: &str, layout, position, button| {
        CardConfig::new(heading, body)
            .with_subheading(subheading)
            .with_image(COVER_IMAGE)
            .with_image_size(ImageSize::Large)
            .with_layout(layout)
            .with_image_position(position)
            .with_button(primary(button))
    };

    Section {
        title: "Image Position",
        muted: false,
        cards: vec![
            positioned(
                "Top Image Position",
                "Default Vertical Layout",
                "This card demonstrates the default top image position in a vertical layout. \
                 The image spans the full width of the card above the content.",
                Layout::Vertical,
                ImagePosition::Top,
                "Learn More",
            ),
            positioned(
                "Left Image Position",
                "Horizontal Layout",
                "This card shows the image positioned on the left side in a horizontal layout, \
                 creating a balanced side-by-side arrangement with the content.",
                Layout::Horizontal,
                ImagePosition::Left,
                "Explore",
            ),
            positioned(
                "Right Image Position",
                "Horizontal Layout",
                "Here the image is positioned on the right side in a horizontal layout, offering \
                 an alternative composition that can help direct attention to the content first.",
                Layout::Horizontal,
                ImagePosition::Right,
                "View Details",
            ),
        ],
    }
}

fn aligned(heading: &str, alignment: Alignment, layout: Layout) -> CardConfig {
    CardConfig::new(heading, ALIGNMENT_BODY)
        .with_subheading("New Trends and Best Practices")
        .with_image(COVER_IMAGE)
        .with_image_size(ImageSize::Medium)
        .with_alignment(alignment)
        .with_layout(layout)
        .with_button(primary("Explore"))
        .with_button(secondary("Learn More"))
}

fn alignment_sections() -> [Section; 2] {
    [
        Section {
            title: "Alignment",
            muted: false,
            cards: vec![
                aligned("Left Alignment", Alignment::Left, Layout::Vertical),
                aligned("Center Alignment", Alignment::Center, Layout::Vertical),
            ],
        },
        Section {
            title: "Alignment Don'ts",
            muted: true,
            cards: vec![aligned(
                "Design Principles 2024",
                Alignment::Center,
                Layout::Horizontal,
            )],
        },
    ]
}

fn interaction_section() -> Section {
    let clickable = CardConfig::new(
        "Clickable Card",
        "This card is clickable and will respond to user interaction. Click anywhere on the card \
         to trigger an action. The cursor will change to indicate interactivity.",
    )
    .with_subheading("Interactive Experience")
    .with_image(COVER_IMAGE)
    .with_button(primary("Explore").with_action(EventHandler::new(|_| {
        tracing::info!("Explore pressed")
    })))
    .with_on_click(EventHandler::new(|_| tracing::info!("Card clicked")));

    let passive = CardConfig::new(
        "Non-Clickable Card",
        "This card is non-clickable and serves as a static display element. While the buttons \
         remain interactive, the card itself doesn't respond to clicks. Notice the absence of \
         hover effects and cursor changes.",
    )
    .with_subheading("Static Display")
    .with_image(COVER_IMAGE)
    .with_button(primary("Explore").with_action(EventHandler::new(|_| {
        tracing::info!("Explore pressed on static card")
    })));

    Section {
        title: "Card Interaction",
        muted: false,
        cards: vec![clickable, passive],
    }
}

fn sections() -> Vec<Section> {
    let [alignment, alignment_donts] = alignment_sections();
    vec![
        fullbleed_section(),
        footer_section(),
        badge_section(),
        image_options_section(),
        image_position_section(),
        alignment,
        alignment_donts,
        interaction_section(),
    ]
}

/// Style guide page component.
#[component]
pub fn StyleGuide() -> Element {
    let navigator = use_navigator();

    // Open the story requested on the command line, once per session
    use_effect(move || {
        if let Some(id) = STARTUP_STORY.take() {
            tracing::info!("Opening requested story '{}'", id);
            navigator.replace(Route::StoryView { id: id.to_string() });
        }
    });

    let sections = use_hook(|| std::rc::Rc::new(sections()));

    rsx! {
        main { class: "style-guide",
            div { class: "style-guide__inner",
                nav { class: "style-guide__nav",
                    Link { class: "story-nav__link", to: Route::StoryIndex {}, "Browse stories \u{2192}" }
                }
                for group in sections.iter() {
                    section { class: "style-guide__section",
                        h2 {
                            class: if group.muted { "style-guide__title style-guide__title--muted" } else { "style-guide__title" },
                            {group.title}
                        }
                        div { class: "style-guide__cards",
                            for card in group.cards.iter() {
                                Card { config: card.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
