//! Story catalog.
//!
//! Named, documented card configurations. The desktop harness browses them,
//! the CLI renders them to HTML and the integration tests assert on them.
//! Stories hold no handlers; hosts attach their own to clickable stories.

use crate::error::{CardError, Result};
use crate::model::{
    Alignment, CardButton, CardConfig, Emphasis, Footer, Glyph, IconSize, ImagePosition,
    ImageSize, Layout,
};

pub const COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2064&auto=format&fit=crop";
pub const RESPONSIVE_IMAGE: &str =
    "https://images.unsplash.com/photo-1593720219276-0b1eacd0aef4?q=80&w=2061&auto=format&fit=crop";

/// A named card configuration
pub struct Story {
    /// Kebab-case identifier used in routes, CLI arguments and file names
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Whether hosts should attach a card-level click handler
    pub clickable: bool,
    build: fn() -> CardConfig,
}

impl Story {
    /// Builds a fresh configuration for this story.
    pub fn config(&self) -> CardConfig {
        (self.build)()
    }
}

impl std::fmt::Debug for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Story")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("clickable", &self.clickable)
            .finish()
    }
}

static STORIES: &[Story] = &[
    Story {
        id: "default",
        title: "Default Card",
        description: "Image, two badges, two buttons and a footer with an icon.",
        clickable: true,
        build: default_card,
    },
    Story {
        id: "large-image",
        title: "Large Image",
        description: "Large fullbleed image reaching the card edges.",
        clickable: true,
        build: || default_card().with_image_size(ImageSize::Large).with_fullbleed(true),
    },
    Story {
        id: "with-icon",
        title: "With Icon",
        description: "A large glyph replaces the image.",
        clickable: true,
        build: with_icon,
    },
    Story {
        id: "small-icon",
        title: "Small Icon",
        description: "A small utility glyph as a subtle visual accent.",
        clickable: true,
        build: || {
            default_card()
                .with_glyph(Glyph::Star)
                .with_icon_size(IconSize::Small)
                .show_icon(true)
        },
    },
    Story {
        id: "horizontal-image-left",
        title: "Horizontal, Image Left",
        description: "Media beside the content on the left at wide viewports.",
        clickable: true,
        build: || {
            default_card()
                .with_layout(Layout::Horizontal)
                .with_image_position(ImagePosition::Left)
        },
    },
    Story {
        id: "horizontal-image-right",
        title: "Horizontal, Image Right",
        description: "Media first on narrow viewports, right of the content on wide ones.",
        clickable: true,
        build: || {
            default_card()
                .with_layout(Layout::Horizontal)
                .with_image_position(ImagePosition::Right)
        },
    },
    Story {
        id: "vertical-centered",
        title: "Vertical, Centered",
        description: "Centered text, badges, media and buttons.",
        clickable: true,
        build: || {
            default_card()
                .with_layout(Layout::Vertical)
                .with_alignment(Alignment::Center)
        },
    },
    Story {
        id: "minimal",
        title: "Minimal Card",
        description: "No media, a single badge, one button and a plain footer.",
        clickable: true,
        build: || {
            CardConfig::new(
                "Simple Card",
                "A minimal card design without images or additional elements.",
            )
            .with_button(CardButton::new("Get Started", Emphasis::Primary))
            .with_badge("Simple", Emphasis::Secondary)
            .with_footer(Footer::new("No additional information needed"))
            .show_image(false)
            .show_icon(false)
        },
    },
    Story {
        id: "no-footer",
        title: "No Footer",
        description: "Default card with the footer toggled off.",
        clickable: true,
        build: || default_card().show_footer(false),
    },
    Story {
        id: "no-buttons",
        title: "No Buttons",
        description: "Default card with the buttons toggled off.",
        clickable: true,
        build: || default_card().show_buttons(false),
    },
    Story {
        id: "no-badges",
        title: "No Badges",
        description: "Default card with the badges toggled off.",
        clickable: true,
        build: || default_card().show_badges(false),
    },
    Story {
        id: "no-image",
        title: "No Image",
        description: "Default card with the image toggled off; nothing takes its place.",
        clickable: true,
        build: || default_card().show_image(false),
    },
    Story {
        id: "no-icon",
        title: "No Icon",
        description: "Icon card with the icon toggled off.",
        clickable: true,
        build: || with_icon().show_icon(false),
    },
    Story {
        id: "responsive-breakpoints",
        title: "Responsive Breakpoints",
        description: "Stacked with the image on top below 768px; a row with the image on \
                      the left from 768px up.",
        clickable: true,
        build: responsive_card,
    },
];

/// Every story, in catalog order.
pub fn all() -> &'static [Story] {
    STORIES
}

/// Looks a story up by id.
pub fn find(id: &str) -> Result<&'static Story> {
    STORIES.iter().find(|story| story.id == id).ok_or_else(|| {
        tracing::warn!(id, "unknown story requested");
        CardError::UnknownStory(id.to_string())
    })
}

/// The reference card most other stories derive from.
pub fn default_card() -> CardConfig {
    CardConfig::new(
        "Modern Design System",
        "A flexible and extensible card component that adapts to various layouts and content \
         types. Perfect for displaying featured content, products, or articles.",
    )
    .with_eyebrow("Eyebrow")
    .with_subheading("Built for scale")
    .with_image(COVER_IMAGE)
    .with_button(CardButton::new("Learn More", Emphasis::Primary))
    .with_button(CardButton::new("View Demo", Emphasis::Secondary))
    .with_badge("New", Emphasis::Primary)
    .with_badge("Featured", Emphasis::Secondary)
    .with_image_size(ImageSize::Medium)
    .with_footer(Footer::new("Last updated 2 days ago").with_icon(Glyph::Info))
    .show_icon(false)
}

fn with_icon() -> CardConfig {
    default_card()
        .with_glyph(Glyph::Zap)
        .with_icon_size(IconSize::Large)
        .show_icon(true)
}

fn responsive_card() -> CardConfig {
    CardConfig::new(
        "Adaptive Layout",
        "This card demonstrates responsive behavior across different viewport sizes. On mobile \
         devices (< 768px), it uses a vertical layout with the image on top. On larger screens \
         (>= 768px), it switches to a horizontal layout with the image on the left.",
    )
    .with_eyebrow("Responsive Design")
    .with_subheading("Mobile-first approach")
    .with_image(RESPONSIVE_IMAGE)
    .with_layout(Layout::Horizontal)
    .with_image_position(ImagePosition::Left)
    .with_badge("Responsive", Emphasis::Primary)
    .with_badge("Adaptive", Emphasis::Secondary)
    .with_button(CardButton::new("Explore Features", Emphasis::Primary))
    .with_button(CardButton::new("Documentation", Emphasis::Secondary))
    .with_footer(Footer::new("Optimized for all screen sizes").with_icon(Glyph::Info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Media;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_kebab_case() {
        let mut seen = HashSet::new();
        for story in all() {
            assert!(seen.insert(story.id), "duplicate story id {}", story.id);
            assert!(story
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
        assert_eq!(all().len(), 14);
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("with-icon").unwrap().title, "With Icon");
        assert!(matches!(find("nope"), Err(CardError::UnknownStory(id)) if id == "nope"));
    }

    #[test]
    fn icon_story_drops_the_image() {
        let config = find("with-icon").unwrap().config();
        assert_eq!(config.media, Media::Glyph(Glyph::Zap));
        assert_eq!(config.icon_size, IconSize::Large);
        assert!(config.show_icon);
    }

    #[test]
    fn no_icon_story_shows_no_media() {
        let config = find("no-icon").unwrap().config();
        assert!(config.visible_media().is_none());
    }

    #[test]
    fn every_story_has_required_text() {
        for story in all() {
            let config = story.config();
            assert!(!config.heading.is_empty(), "{} has no heading", story.id);
            assert!(!config.body.is_empty(), "{} has no body", story.id);
        }
    }
}
