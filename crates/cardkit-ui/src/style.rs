//! Variant resolution.
//!
//! Decides, for a given card configuration, which regions are shown, in what
//! order and with what sizing. Everything here is plain data: no Dioxus
//! runtime is needed, and painting the result into CSS lives in
//! [`crate::paint`].

use crate::model::{Alignment, CardConfig, IconSize, ImagePosition, ImageSize, Layout, Media};

/// Outer card padding, in CSS pixels
pub const CARD_PADDING: u16 = 24;
/// Space between media and content when the media is not fullbleed
pub const MEDIA_GAP: u16 = 24;
/// Bottom clearance reserved for the pinned footer
pub const FOOTER_CLEARANCE: u16 = 80;
/// Gap between badges when they flow naturally
pub const BADGE_GAP: u16 = 8;
/// Viewport width at which horizontal cards switch to a row
pub const WIDE_BREAKPOINT: u16 = 768;

/// Which kind of media survives the visibility gates
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MediaKind {
    None,
    Image,
    Glyph,
}

/// The subset of a [`CardConfig`] that influences styling.
///
/// Text, labels and handlers are dropped; only what the resolution rules
/// look at remains.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct CardVariant {
    pub layout: Layout,
    pub alignment: Alignment,
    pub image_position: ImagePosition,
    pub image_size: ImageSize,
    pub icon_size: IconSize,
    pub fullbleed: bool,
    pub media: MediaKind,
    pub badge_count: usize,
    pub has_footer: bool,
    pub interactive: bool,
}

impl CardVariant {
    pub fn of(config: &CardConfig) -> Self {
        let media = match config.visible_media() {
            Media::None => MediaKind::None,
            Media::Image(_) => MediaKind::Image,
            Media::Glyph(_) => MediaKind::Glyph,
        };

        Self {
            layout: config.layout,
            alignment: config.alignment,
            image_position: config.image_position,
            image_size: config.image_size,
            icon_size: config.icon_size,
            fullbleed: config.fullbleed,
            media,
            badge_count: config.visible_badges().len(),
            has_footer: config.visible_footer().is_some(),
            interactive: config.is_interactive(),
        }
    }

    /// Image position after the layout override: vertical cards always put
    /// media on top.
    pub fn effective_position(&self) -> ImagePosition {
        match self.layout {
            Layout::Horizontal => self.image_position,
            Layout::Vertical => ImagePosition::Top,
        }
    }
}

/// How media and content are stacked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Always a column
    Column,
    /// Column at narrow widths, stretched row at wide widths
    ResponsiveRow,
}

/// Flex order of a block at narrow and wide viewports
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Order {
    pub narrow: u8,
    pub wide: u8,
}

impl Order {
    const fn fixed(order: u8) -> Self {
        Self {
            narrow: order,
            wide: order,
        }
    }

    /// `true` when the block moves between the two breakpoints
    pub fn reflows(&self) -> bool {
        self.narrow != self.wide
    }
}

/// Side of the media block that carries the gap towards the content
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Bottom,
    Left,
    Right,
}

/// Gap between media and content, per breakpoint
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MediaGap {
    pub narrow: Side,
    pub wide: Side,
    pub size: u16,
}

/// Aspect ratio as width:height
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AspectRatio(pub u8, pub u8);

pub const WIDESCREEN: AspectRatio = AspectRatio(16, 9);

/// Resolved image sizing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ImageSizing {
    /// Height cap. Dropped at wide widths when `wide_width_pct` is set.
    pub max_height: u16,
    /// Aspect ratio while stacked (always at narrow widths)
    pub aspect: AspectRatio,
    /// Share of the card width taken at wide widths in a row layout
    pub wide_width_pct: Option<u8>,
}

impl ImageSizing {
    /// Beside the content the image fills the row height instead of being
    /// capped.
    pub fn uncapped_when_wide(&self) -> bool {
        self.wide_width_pct.is_some()
    }
}

/// Resolved media sizing. Glyph and image rules never mix.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaSize {
    /// Fixed square
    Glyph { side: u16 },
    Image(ImageSizing),
}

/// Resolved media block
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MediaStyle {
    pub kind: MediaKind,
    pub position: ImagePosition,
    pub order: Order,
    pub size: MediaSize,
    pub rounded: bool,
    pub gap: Option<MediaGap>,
    pub centered: bool,
}

/// Resolved content block (badges, text, buttons)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContentStyle {
    pub order: Order,
    pub padding: u16,
    pub centered: bool,
}

/// Badge row justification
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeJustify {
    /// Two badges pushed to opposite edges
    SpaceBetween,
    Center,
    Start,
    /// Natural flow with a fixed gap
    Gap(u16),
}

/// Interactive affordances of the card root
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Affordance {
    pub focusable: bool,
    pub pointer: bool,
    /// Thicker highlighted outline on hover and focus
    pub hover_outline: bool,
}

impl Affordance {
    pub fn tab_index(&self) -> Option<i64> {
        self.focusable.then_some(0)
    }
}

/// Fully resolved card styling, ready to be painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CardStyle {
    pub direction: Direction,
    pub centered: bool,
    pub padding: u16,
    pub footer_clearance: u16,
    pub affordance: Affordance,
    pub media: Option<MediaStyle>,
    pub content: ContentStyle,
    pub badges: Option<BadgeJustify>,
}

impl CardStyle {
    /// Resolves a configuration directly.
    pub fn of(config: &CardConfig) -> Self {
        Self::resolve(&CardVariant::of(config))
    }

    pub fn resolve(variant: &CardVariant) -> Self {
        let centered = variant.alignment == Alignment::Center;
        let position = variant.effective_position();

        let (media_order, content_order) = match position {
            ImagePosition::Right => (Order { narrow: 1, wide: 2 }, Order { narrow: 2, wide: 1 }),
            ImagePosition::Left | ImagePosition::Top => (Order::fixed(1), Order::fixed(2)),
        };

        let media = resolve_media_size(variant).map(|size| MediaStyle {
            kind: variant.media,
            position,
            order: media_order,
            size,
            rounded: !variant.fullbleed,
            gap: resolve_media_gap(variant.layout, position, variant.fullbleed),
            centered: centered && !variant.fullbleed,
        });

        let interactive = variant.interactive;

        Self {
            direction: match variant.layout {
                Layout::Vertical => Direction::Column,
                Layout::Horizontal => Direction::ResponsiveRow,
            },
            centered,
            padding: if variant.fullbleed { 0 } else { CARD_PADDING },
            footer_clearance: if variant.has_footer { FOOTER_CLEARANCE } else { 0 },
            affordance: Affordance {
                focusable: interactive,
                pointer: interactive,
                hover_outline: interactive,
            },
            media,
            content: ContentStyle {
                order: content_order,
                padding: if variant.fullbleed { CARD_PADDING } else { 0 },
                centered,
            },
            badges: resolve_badges(variant.badge_count, variant.alignment),
        }
    }
}

/// Sizing for the visible media, or `None` when no media is shown.
pub fn resolve_media_size(variant: &CardVariant) -> Option<MediaSize> {
    match variant.media {
        MediaKind::None => None,
        MediaKind::Glyph => Some(MediaSize::Glyph {
            side: match variant.icon_size {
                IconSize::Large => 60,
                IconSize::Small => 28,
            },
        }),
        MediaKind::Image => {
            let max_height = match (variant.image_size, variant.fullbleed) {
                (ImageSize::Large, true) => 200,
                (ImageSize::Large, false) => 180,
                (ImageSize::Medium, true) => 160,
                (ImageSize::Medium, false) => 140,
            };
            let wide_width_pct = match variant.layout {
                Layout::Vertical => None,
                Layout::Horizontal => Some(match variant.image_size {
                    ImageSize::Large => 40,
                    ImageSize::Medium => 30,
                }),
            };
            Some(MediaSize::Image(ImageSizing {
                max_height,
                aspect: WIDESCREEN,
                wide_width_pct,
            }))
        }
    }
}

fn resolve_media_gap(layout: Layout, position: ImagePosition, fullbleed: bool) -> Option<MediaGap> {
    if fullbleed {
        return None;
    }
    // A horizontal card is a row at wide widths even when "top" was asked for.
    let wide = match (layout, position) {
        (Layout::Vertical, _) => Side::Bottom,
        (Layout::Horizontal, ImagePosition::Right) => Side::Left,
        (Layout::Horizontal, ImagePosition::Left | ImagePosition::Top) => Side::Right,
    };
    Some(MediaGap {
        narrow: Side::Bottom,
        wide,
        size: MEDIA_GAP,
    })
}

/// Badge row justification. The 1 / 2 / other split is deliberate: three or
/// more badges are not spread evenly.
pub fn resolve_badges(count: usize, alignment: Alignment) -> Option<BadgeJustify> {
    match count {
        0 => None,
        1 => Some(match alignment {
            Alignment::Center => BadgeJustify::Center,
            Alignment::Left => BadgeJustify::Start,
        }),
        2 => Some(BadgeJustify::SpaceBetween),
        _ => Some(BadgeJustify::Gap(BADGE_GAP)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant() -> CardVariant {
        CardVariant {
            layout: Layout::Vertical,
            alignment: Alignment::Left,
            image_position: ImagePosition::Top,
            image_size: ImageSize::Medium,
            icon_size: IconSize::Large,
            fullbleed: false,
            media: MediaKind::Image,
            badge_count: 0,
            has_footer: false,
            interactive: false,
        }
    }

    fn image_sizing(style: &CardStyle) -> ImageSizing {
        match style.media.map(|m| m.size) {
            Some(MediaSize::Image(sizing)) => sizing,
            other => panic!("expected image sizing, got {:?}", other),
        }
    }

    #[test]
    fn vertical_forces_top_position() {
        for position in ImagePosition::ALL {
            let v = CardVariant {
                image_position: *position,
                ..variant()
            };
            assert_eq!(v.effective_position(), ImagePosition::Top);
            let media = CardStyle::resolve(&v).media.unwrap();
            assert_eq!(media.position, ImagePosition::Top);
            assert!(!media.order.reflows());
        }
    }

    #[test]
    fn right_position_reflows_only_when_wide() {
        let v = CardVariant {
            layout: Layout::Horizontal,
            image_position: ImagePosition::Right,
            ..variant()
        };
        let style = CardStyle::resolve(&v);
        let media = style.media.unwrap();
        assert_eq!(media.order, Order { narrow: 1, wide: 2 });
        assert_eq!(style.content.order, Order { narrow: 2, wide: 1 });
        assert_eq!(
            media.gap,
            Some(MediaGap {
                narrow: Side::Bottom,
                wide: Side::Left,
                size: MEDIA_GAP
            })
        );
    }

    #[test]
    fn left_position_keeps_media_first() {
        let v = CardVariant {
            layout: Layout::Horizontal,
            image_position: ImagePosition::Left,
            ..variant()
        };
        let style = CardStyle::resolve(&v);
        let media = style.media.unwrap();
        assert_eq!(media.order, Order { narrow: 1, wide: 1 });
        assert_eq!(media.gap.unwrap().wide, Side::Right);
        assert_eq!(style.direction, Direction::ResponsiveRow);
    }

    #[test]
    fn horizontal_top_behaves_like_left_when_wide() {
        let v = CardVariant {
            layout: Layout::Horizontal,
            image_position: ImagePosition::Top,
            ..variant()
        };
        let media = CardStyle::resolve(&v).media.unwrap();
        assert_eq!(media.position, ImagePosition::Top);
        assert_eq!(media.gap.unwrap().wide, Side::Right);
        assert!(!media.order.reflows());
    }

    #[test]
    fn vertical_image_height_caps() {
        let cases = [
            (ImageSize::Large, true, 200),
            (ImageSize::Large, false, 180),
            (ImageSize::Medium, true, 160),
            (ImageSize::Medium, false, 140),
        ];
        for (image_size, fullbleed, expected) in cases {
            let v = CardVariant {
                image_size,
                fullbleed,
                ..variant()
            };
            let sizing = image_sizing(&CardStyle::resolve(&v));
            assert_eq!(sizing.max_height, expected);
            assert_eq!(sizing.aspect, WIDESCREEN);
            assert!(!sizing.uncapped_when_wide());
        }
    }

    #[test]
    fn horizontal_image_width_share() {
        let large = CardVariant {
            layout: Layout::Horizontal,
            image_size: ImageSize::Large,
            ..variant()
        };
        let medium = CardVariant {
            image_size: ImageSize::Medium,
            ..large
        };
        assert_eq!(image_sizing(&CardStyle::resolve(&large)).wide_width_pct, Some(40));
        assert_eq!(image_sizing(&CardStyle::resolve(&medium)).wide_width_pct, Some(30));
        assert!(image_sizing(&CardStyle::resolve(&medium)).uncapped_when_wide());
    }

    #[test]
    fn glyph_sizes_skip_image_rules() {
        let large = CardVariant {
            media: MediaKind::Glyph,
            image_size: ImageSize::Large,
            fullbleed: true,
            ..variant()
        };
        let small = CardVariant {
            icon_size: IconSize::Small,
            ..large
        };
        assert_eq!(
            CardStyle::resolve(&large).media.unwrap().size,
            MediaSize::Glyph { side: 60 }
        );
        assert_eq!(
            CardStyle::resolve(&small).media.unwrap().size,
            MediaSize::Glyph { side: 28 }
        );
    }

    #[test]
    fn no_media_no_media_style() {
        let v = CardVariant {
            media: MediaKind::None,
            ..variant()
        };
        assert!(CardStyle::resolve(&v).media.is_none());
    }

    #[test]
    fn fullbleed_moves_padding_to_content() {
        let padded = CardStyle::resolve(&variant());
        assert_eq!(padded.padding, CARD_PADDING);
        assert_eq!(padded.content.padding, 0);
        assert!(padded.media.unwrap().rounded);
        assert!(padded.media.unwrap().gap.is_some());

        let bleed = CardStyle::resolve(&CardVariant {
            fullbleed: true,
            ..variant()
        });
        assert_eq!(bleed.padding, 0);
        assert_eq!(bleed.content.padding, CARD_PADDING);
        assert!(!bleed.media.unwrap().rounded);
        assert!(bleed.media.unwrap().gap.is_none());
    }

    #[test]
    fn centered_media_only_when_padded() {
        let centered = CardVariant {
            alignment: Alignment::Center,
            ..variant()
        };
        assert!(CardStyle::resolve(&centered).media.unwrap().centered);
        let bleed = CardVariant {
            fullbleed: true,
            ..centered
        };
        assert!(!CardStyle::resolve(&bleed).media.unwrap().centered);
        assert!(CardStyle::resolve(&bleed).centered);
    }

    #[test]
    fn badge_case_split() {
        assert_eq!(resolve_badges(0, Alignment::Center), None);
        assert_eq!(resolve_badges(1, Alignment::Center), Some(BadgeJustify::Center));
        assert_eq!(resolve_badges(1, Alignment::Left), Some(BadgeJustify::Start));
        assert_eq!(resolve_badges(2, Alignment::Center), Some(BadgeJustify::SpaceBetween));
        assert_eq!(resolve_badges(2, Alignment::Left), Some(BadgeJustify::SpaceBetween));
        assert_eq!(resolve_badges(3, Alignment::Left), Some(BadgeJustify::Gap(BADGE_GAP)));
        assert_eq!(resolve_badges(7, Alignment::Center), Some(BadgeJustify::Gap(BADGE_GAP)));
    }

    #[test]
    fn affordances_follow_handler_presence() {
        let passive = CardStyle::resolve(&variant());
        assert_eq!(passive.affordance, Affordance::default());
        assert_eq!(passive.affordance.tab_index(), None);

        let active = CardStyle::resolve(&CardVariant {
            interactive: true,
            ..variant()
        });
        assert!(active.affordance.focusable && active.affordance.pointer);
        assert!(active.affordance.hover_outline);
        assert_eq!(active.affordance.tab_index(), Some(0));
    }

    #[test]
    fn footer_reserves_clearance() {
        assert_eq!(CardStyle::resolve(&variant()).footer_clearance, 0);
        let with_footer = CardVariant {
            has_footer: true,
            ..variant()
        };
        assert_eq!(CardStyle::resolve(&with_footer).footer_clearance, FOOTER_CLEARANCE);
    }

    #[test]
    fn variant_of_config_applies_gates() {
        use crate::model::{Emphasis, Footer, Glyph};

        let config = CardConfig::new("h", "b")
            .with_image("a.png")
            .with_glyph(Glyph::Zap)
            .with_badge("one", Emphasis::Primary)
            .with_footer(Footer::new("f"))
            .show_footer(false);
        let v = CardVariant::of(&config);
        assert_eq!(v.media, MediaKind::Glyph);
        assert_eq!(v.badge_count, 1);
        assert!(!v.has_footer);
        assert!(!v.interactive);

        let v = CardVariant::of(&config.show_icon(false));
        assert_eq!(v.media, MediaKind::None);
    }
}
