//! Paints a resolved [`CardStyle`] into CSS class lists and inline custom
//! properties understood by [`crate::theme::CARD_STYLES`].

use std::fmt;

use crate::model::Emphasis;
use crate::style::{
    BadgeJustify, CardStyle, ContentStyle, Direction, MediaKind, MediaSize, MediaStyle, Side,
};

/// Space separated list of CSS classes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    pub fn new(base: &'static str) -> Self {
        Self(vec![base])
    }

    pub fn add(&mut self, class: &'static str) -> &mut Self {
        if !class.is_empty() && !self.contains(class) {
            self.0.push(class);
        }
        self
    }

    pub fn add_if(&mut self, condition: bool, class: &'static str) -> &mut Self {
        if condition {
            self.add(class);
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| *c == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

pub fn root_class(style: &CardStyle) -> ClassList {
    let mut classes = ClassList::new("card");
    classes
        .add_if(style.direction == Direction::ResponsiveRow, "card--horizontal")
        .add_if(style.centered, "card--centered")
        .add_if(style.affordance.pointer, "card--interactive")
        .add_if(style.affordance.hover_outline, "card--outlined-hover")
        .add_if(style.footer_clearance > 0, "card--with-footer");
    classes
}

pub fn root_style(style: &CardStyle) -> String {
    let bottom = style.footer_clearance.max(style.padding);
    format!("padding: {p}px {p}px {bottom}px {p}px;", p = style.padding)
}

pub fn media_class(media: &MediaStyle) -> ClassList {
    let mut classes = ClassList::new("card__media");
    classes
        .add(match media.kind {
            MediaKind::Glyph => "card__media--glyph",
            _ => "card__media--image",
        })
        .add_if(media.rounded, "card__media--rounded")
        .add_if(media.centered, "card__media--centered");

    if let MediaSize::Image(sizing) = media.size {
        classes.add_if(sizing.wide_width_pct.is_some(), "card__media--beside");
    }

    if let Some(gap) = media.gap {
        classes.add("card__media--gap").add(match gap.wide {
            Side::Bottom => "card__media--gap-wide-bottom",
            Side::Left => "card__media--gap-wide-left",
            Side::Right => "card__media--gap-wide-right",
        });
    }
    classes
}

pub fn media_style(media: &MediaStyle) -> String {
    let mut css = format!(
        "--media-order: {}; --media-order-wide: {};",
        media.order.narrow, media.order.wide
    );
    if let Some(gap) = media.gap {
        css.push_str(&format!(" --media-gap: {}px;", gap.size));
    }
    match media.size {
        MediaSize::Glyph { side } => {
            css.push_str(&format!(" width: {side}px; height: {side}px;"));
        }
        MediaSize::Image(sizing) => {
            css.push_str(&format!(
                " --media-max-h: {}px; --media-aspect: {} / {};",
                sizing.max_height, sizing.aspect.0, sizing.aspect.1
            ));
            if let Some(pct) = sizing.wide_width_pct {
                css.push_str(&format!(" --media-wide-w: {pct}%;"));
            }
        }
    }
    css
}

pub fn content_class(content: &ContentStyle) -> ClassList {
    let mut classes = ClassList::new("card__content");
    classes.add_if(content.centered, "card__content--centered");
    classes
}

pub fn content_style(content: &ContentStyle) -> String {
    format!(
        "--content-order: {}; --content-order-wide: {}; padding: {}px;",
        content.order.narrow, content.order.wide, content.padding
    )
}

pub fn badges_class(justify: BadgeJustify) -> ClassList {
    let mut classes = ClassList::new("card__badges");
    classes.add(match justify {
        BadgeJustify::SpaceBetween => "card__badges--between",
        BadgeJustify::Center => "card__badges--center",
        BadgeJustify::Start => "card__badges--start",
        BadgeJustify::Gap(_) => "card__badges--flow",
    });
    classes
}

pub fn badges_style(justify: BadgeJustify) -> String {
    match justify {
        BadgeJustify::Gap(gap) => format!("gap: {gap}px;"),
        BadgeJustify::SpaceBetween | BadgeJustify::Center | BadgeJustify::Start => String::new(),
    }
}

/// Returns the CSS class for a badge of this emphasis
pub fn badge_class(variant: Emphasis) -> &'static str {
    match variant {
        Emphasis::Primary => "card__badge card__badge--primary",
        Emphasis::Secondary => "card__badge card__badge--secondary",
    }
}

/// Returns the CSS class for a card button of this emphasis
pub fn button_class(variant: Emphasis) -> &'static str {
    match variant {
        Emphasis::Primary => "card__button card__button--primary",
        Emphasis::Secondary => "card__button card__button--secondary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, IconSize, ImagePosition, ImageSize, Layout};
    use crate::style::CardVariant;

    fn resolve(edit: impl FnOnce(&mut CardVariant)) -> CardStyle {
        let mut variant = CardVariant {
            layout: Layout::Vertical,
            alignment: Alignment::Left,
            image_position: ImagePosition::Top,
            image_size: ImageSize::Medium,
            icon_size: IconSize::Large,
            fullbleed: false,
            media: MediaKind::Image,
            badge_count: 2,
            has_footer: false,
            interactive: false,
        };
        edit(&mut variant);
        CardStyle::resolve(&variant)
    }

    #[test]
    fn class_list_skips_duplicates() {
        let mut classes = ClassList::new("a");
        classes.add("b").add("a").add_if(false, "c").add("");
        assert_eq!(classes.to_string(), "a b");
    }

    #[test]
    fn passive_root_has_no_interactive_hooks() {
        let root = root_class(&resolve(|_| {}));
        assert_eq!(root.to_string(), "card");
    }

    #[test]
    fn interactive_root_classes() {
        let root = root_class(&resolve(|v| {
            v.interactive = true;
            v.layout = Layout::Horizontal;
            v.alignment = Alignment::Center;
        }));
        assert!(root.contains("card--interactive"));
        assert!(root.contains("card--outlined-hover"));
        assert!(root.contains("card--horizontal"));
        assert!(root.contains("card--centered"));
    }

    #[test]
    fn root_padding_and_footer_clearance() {
        assert_eq!(root_style(&resolve(|_| {})), "padding: 24px 24px 24px 24px;");
        assert_eq!(
            root_style(&resolve(|v| v.has_footer = true)),
            "padding: 24px 24px 80px 24px;"
        );
        assert_eq!(
            root_style(&resolve(|v| {
                v.fullbleed = true;
                v.has_footer = true;
            })),
            "padding: 0px 0px 80px 0px;"
        );
    }

    #[test]
    fn image_media_properties() {
        let style = resolve(|v| {
            v.layout = Layout::Horizontal;
            v.image_position = ImagePosition::Right;
            v.image_size = ImageSize::Large;
        });
        let media = style.media.unwrap();
        let classes = media_class(&media);
        assert!(classes.contains("card__media--image"));
        assert!(classes.contains("card__media--beside"));
        assert!(classes.contains("card__media--gap-wide-left"));
        let css = media_style(&media);
        assert!(css.contains("--media-order: 1; --media-order-wide: 2;"));
        assert!(css.contains("--media-max-h: 180px;"));
        assert!(css.contains("--media-aspect: 16 / 9;"));
        assert!(css.contains("--media-wide-w: 40%;"));
    }

    #[test]
    fn glyph_media_is_a_fixed_square() {
        let style = resolve(|v| {
            v.media = MediaKind::Glyph;
            v.icon_size = IconSize::Small;
        });
        let media = style.media.unwrap();
        assert!(media_class(&media).contains("card__media--glyph"));
        let css = media_style(&media);
        assert!(css.contains("width: 28px; height: 28px;"));
        assert!(!css.contains("--media-max-h"));
    }

    #[test]
    fn fullbleed_media_is_square_cornered() {
        let media = resolve(|v| v.fullbleed = true).media.unwrap();
        let classes = media_class(&media);
        assert!(!classes.contains("card__media--rounded"));
        assert!(!classes.contains("card__media--gap"));
    }

    #[test]
    fn badge_classes() {
        assert_eq!(
            badges_class(BadgeJustify::SpaceBetween).to_string(),
            "card__badges card__badges--between"
        );
        assert_eq!(badges_style(BadgeJustify::Gap(8)), "gap: 8px;");
        assert_eq!(badges_style(BadgeJustify::Start), "");
        assert_eq!(badge_class(Emphasis::Primary), "card__badge card__badge--primary");
        assert_eq!(button_class(Emphasis::Secondary), "card__button card__button--secondary");
    }
}
