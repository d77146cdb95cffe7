//! Card configuration model.
//!
//! A [`CardConfig`] is the whole input of one card render. It is plain data
//! plus optional event handlers, and it can be decoded from JSON so the CLI
//! and tests can describe cards without writing Rust.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::EventHandler;
use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Implements `FromStr`, `Display` and `name()` for a fieldless enum using
/// lowercase names.
macro_rules! named_variants {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The lowercase name used in CLI flags and JSON.
            pub fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = CardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(CardError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: &[$($name),+],
                    }),
                }
            }
        }
    };
}

/// Direction in which media and content are stacked
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Media above content
    #[default]
    Vertical,
    /// Media beside content at wide viewports
    Horizontal,
}

named_variants!(Layout, "layout", { Vertical => "vertical", Horizontal => "horizontal" });

/// Text and item alignment inside the card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

named_variants!(Alignment, "alignment", { Left => "left", Center => "center" });

/// Requested media position. Only honoured by horizontal cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Top,
    Left,
    Right,
}

named_variants!(ImagePosition, "image position", { Top => "top", Left => "left", Right => "right" });

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    #[default]
    Medium,
    Large,
}

named_variants!(ImageSize, "image size", { Medium => "medium", Large => "large" });

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Large,
}

named_variants!(IconSize, "icon size", { Small => "small", Large => "large" });

/// Visual weight shared by badges and buttons
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Filled with the brand color
    Primary,
    /// Neutral fill or outline
    #[default]
    Secondary,
}

named_variants!(Emphasis, "variant", { Primary => "primary", Secondary => "secondary" });

/// Symbolic reference to a vector glyph.
///
/// The set is closed; each glyph maps to one Bootstrap icon shape in
/// [`crate::components::GlyphIcon`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Zap,
    Star,
    Info,
    Palette,
    Image,
    Maximize,
    Minimize,
    Clock,
    Bell,
    Shield,
}

named_variants!(Glyph, "glyph", {
    Zap => "zap",
    Star => "star",
    Info => "info",
    Palette => "palette",
    Image => "image",
    Maximize => "maximize",
    Minimize => "minimize",
    Clock => "clock",
    Bell => "bell",
    Shield => "shield",
});

/// The card's media slot: an image, a glyph, or nothing.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    #[default]
    None,
    /// Image source URI
    Image(String),
    Glyph(Glyph),
}

impl Media {
    /// Builds the media slot from independently optional parts.
    ///
    /// A glyph takes precedence over an image source when both are given.
    pub fn from_parts(image_src: Option<String>, glyph: Option<Glyph>) -> Self {
        match (glyph, image_src) {
            (Some(glyph), _) => Media::Glyph(glyph),
            (None, Some(src)) => Media::Image(src),
            (None, None) => Media::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Media::None)
    }
}

/// Small labeled status/category indicator
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    #[serde(default)]
    pub variant: Emphasis,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: Emphasis) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

/// An action button rendered in the card's button group
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CardButton {
    pub label: String,
    #[serde(default = "primary")]
    pub variant: Emphasis,
    /// Invoked when this button is pressed. Never triggers the card handler.
    #[serde(skip)]
    pub action: Option<EventHandler<()>>,
}

impl CardButton {
    pub fn new(label: impl Into<String>, variant: Emphasis) -> Self {
        Self {
            label: label.into(),
            variant,
            action: None,
        }
    }

    pub fn with_action(mut self, action: EventHandler<()>) -> Self {
        self.action = Some(action);
        self
    }
}

impl fmt::Debug for CardButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardButton")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Bottom strip with text and an optional glyph
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    #[serde(default)]
    pub icon: Option<Glyph>,
}

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Glyph) -> Self {
        self.icon = Some(icon);
        self
    }
}

fn default_true() -> bool {
    true
}

fn primary() -> Emphasis {
    Emphasis::Primary
}

/// Complete input for one card render.
///
/// Every field except `heading` and `body` has a default, so a JSON config
/// only needs those two keys.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub image_position: ImagePosition,
    #[serde(default)]
    pub image_size: ImageSize,
    #[serde(default)]
    pub icon_size: IconSize,
    #[serde(default)]
    pub fullbleed: bool,
    /// Accepted in configs but ignored: the card's thin border is always
    /// drawn, and `false` renders identically to `true`.
    #[serde(default = "default_true")]
    pub bordered: bool,
    #[serde(default)]
    pub media: Media,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub buttons: Vec<CardButton>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    pub body: String,
    #[serde(default = "default_true")]
    pub show_image: bool,
    #[serde(default = "default_true")]
    pub show_icon: bool,
    #[serde(default = "default_true")]
    pub show_badges: bool,
    #[serde(default = "default_true")]
    pub show_buttons: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
    /// Card-level activation handler. Its presence makes the card interactive.
    #[serde(skip)]
    pub on_click: Option<EventHandler<()>>,
}

impl CardConfig {
    /// Creates a config with the two required text fields and defaults elsewhere.
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            layout: Layout::default(),
            alignment: Alignment::default(),
            image_position: ImagePosition::default(),
            image_size: ImageSize::default(),
            icon_size: IconSize::default(),
            fullbleed: false,
            bordered: true,
            media: Media::None,
            badges: Vec::new(),
            buttons: Vec::new(),
            footer: None,
            eyebrow: None,
            heading: heading.into(),
            subheading: None,
            body: body.into(),
            show_image: true,
            show_icon: true,
            show_badges: true,
            show_buttons: true,
            show_footer: true,
            on_click: None,
        }
    }

    /// Decodes a config from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // === Builder ===

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_image_position(mut self, position: ImagePosition) -> Self {
        self.image_position = position;
        self
    }

    pub fn with_image_size(mut self, size: ImageSize) -> Self {
        self.image_size = size;
        self
    }

    pub fn with_icon_size(mut self, size: IconSize) -> Self {
        self.icon_size = size;
        self
    }

    pub fn with_fullbleed(mut self, fullbleed: bool) -> Self {
        self.fullbleed = fullbleed;
        self
    }

    pub fn with_bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Sets an image source unless a glyph is already present.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        if !matches!(self.media, Media::Glyph(_)) {
            self.media = Media::Image(src.into());
        }
        self
    }

    /// Sets a glyph, replacing any image source.
    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.media = Media::Glyph(glyph);
        self
    }

    pub fn without_media(mut self) -> Self {
        self.media = Media::None;
        self
    }

    pub fn with_badge(mut self, label: impl Into<String>, variant: Emphasis) -> Self {
        self.badges.push(Badge::new(label, variant));
        self
    }

    pub fn with_button(mut self, button: CardButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }

    pub fn with_on_click(mut self, handler: EventHandler<()>) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn show_image(mut self, show: bool) -> Self {
        self.show_image = show;
        self
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    pub fn show_badges(mut self, show: bool) -> Self {
        self.show_badges = show;
        self
    }

    pub fn show_buttons(mut self, show: bool) -> Self {
        self.show_buttons = show;
        self
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    // === Visibility-gated views ===

    /// Media that will actually be rendered after the visibility gates.
    pub fn visible_media(&self) -> &Media {
        match &self.media {
            Media::Image(_) if self.show_image => &self.media,
            Media::Glyph(_) if self.show_icon => &self.media,
            _ => &Media::None,
        }
    }

    pub fn visible_badges(&self) -> &[Badge] {
        if self.show_badges {
            &self.badges
        } else {
            &[]
        }
    }

    pub fn visible_buttons(&self) -> &[CardButton] {
        if self.show_buttons {
            &self.buttons
        } else {
            &[]
        }
    }

    pub fn visible_footer(&self) -> Option<&Footer> {
        self.footer.as_ref().filter(|_| self.show_footer)
    }

    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some()
    }
}

impl fmt::Debug for CardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardConfig")
            .field("layout", &self.layout)
            .field("alignment", &self.alignment)
            .field("image_position", &self.image_position)
            .field("image_size", &self.image_size)
            .field("icon_size", &self.icon_size)
            .field("fullbleed", &self.fullbleed)
            .field("media", &self.media)
            .field("badges", &self.badges)
            .field("buttons", &self.buttons)
            .field("footer", &self.footer)
            .field("heading", &self.heading)
            .field("interactive", &self.is_interactive())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_contract() {
        let config = CardConfig::new("Heading", "Body");
        assert_eq!(config.layout, Layout::Vertical);
        assert_eq!(config.alignment, Alignment::Left);
        assert_eq!(config.image_position, ImagePosition::Top);
        assert_eq!(config.image_size, ImageSize::Medium);
        assert_eq!(config.icon_size, IconSize::Large);
        assert!(!config.fullbleed);
        assert!(config.bordered);
        assert!(config.show_image && config.show_icon && config.show_badges);
        assert!(config.show_buttons && config.show_footer);
        assert!(!config.is_interactive());
    }

    #[test]
    fn glyph_takes_precedence_over_image() {
        assert_eq!(
            Media::from_parts(Some("a.png".into()), Some(Glyph::Zap)),
            Media::Glyph(Glyph::Zap)
        );
        assert_eq!(
            Media::from_parts(Some("a.png".into()), None),
            Media::Image("a.png".into())
        );
        assert_eq!(Media::from_parts(None, None), Media::None);

        // Order of builder calls does not matter
        let a = CardConfig::new("h", "b").with_image("a.png").with_glyph(Glyph::Star);
        let b = CardConfig::new("h", "b").with_glyph(Glyph::Star).with_image("a.png");
        assert_eq!(a.media, Media::Glyph(Glyph::Star));
        assert_eq!(b.media, Media::Glyph(Glyph::Star));
    }

    #[test]
    fn visibility_gates_hide_present_data() {
        let config = CardConfig::new("h", "b")
            .with_image("a.png")
            .with_badge("New", Emphasis::Primary)
            .with_button(CardButton::new("Go", Emphasis::Primary))
            .with_footer(Footer::new("later"))
            .show_image(false)
            .show_badges(false)
            .show_buttons(false)
            .show_footer(false);

        assert!(config.visible_media().is_none());
        assert!(config.visible_badges().is_empty());
        assert!(config.visible_buttons().is_empty());
        assert!(config.visible_footer().is_none());
    }

    #[test]
    fn show_icon_does_not_gate_images() {
        let config = CardConfig::new("h", "b").with_image("a.png").show_icon(false);
        assert_eq!(config.visible_media(), &Media::Image("a.png".into()));

        let config = CardConfig::new("h", "b").with_glyph(Glyph::Bell).show_image(false);
        assert_eq!(config.visible_media(), &Media::Glyph(Glyph::Bell));
    }

    #[test]
    fn parse_variant_names() {
        assert_eq!("horizontal".parse::<Layout>().unwrap(), Layout::Horizontal);
        assert_eq!(" Center ".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("right".parse::<ImagePosition>().unwrap(), ImagePosition::Right);
        assert_eq!("large".parse::<ImageSize>().unwrap(), ImageSize::Large);
        assert_eq!("small".parse::<IconSize>().unwrap(), IconSize::Small);
        assert_eq!("primary".parse::<Emphasis>().unwrap(), Emphasis::Primary);
        assert_eq!("clock".parse::<Glyph>().unwrap(), Glyph::Clock);

        let err = "diagonal".parse::<Layout>().unwrap_err();
        assert!(matches!(err, CardError::UnknownVariant { kind: "layout", .. }));
    }

    #[test]
    fn names_round_trip_through_display() {
        for glyph in Glyph::ALL {
            assert_eq!(glyph.to_string().parse::<Glyph>().unwrap(), *glyph);
        }
    }

    #[test]
    fn json_requires_heading_and_body_only() {
        let config = CardConfig::from_json(r#"{"heading": "Hi", "body": "There"}"#).unwrap();
        assert_eq!(config.heading, "Hi");
        assert_eq!(config.body, "There");
        assert!(config.show_footer);
        assert!(config.bordered);

        assert!(CardConfig::from_json(r#"{"heading": "Hi"}"#).is_err());
    }

    #[test]
    fn json_media_is_tagged() {
        let config = CardConfig::from_json(
            r#"{
                "heading": "Hi",
                "body": "There",
                "layout": "horizontal",
                "media": {"glyph": "zap"},
                "badges": [{"label": "New", "variant": "primary"}, {"label": "Old"}],
                "buttons": [{"label": "Go"}],
                "footer": {"text": "soon", "icon": "clock"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.layout, Layout::Horizontal);
        assert_eq!(config.media, Media::Glyph(Glyph::Zap));
        assert_eq!(config.badges[1].variant, Emphasis::Secondary);
        assert_eq!(config.buttons[0].variant, Emphasis::Primary);
        assert!(config.buttons[0].action.is_none());
        assert_eq!(config.footer.unwrap().icon, Some(Glyph::Clock));
    }
}
