//! Glyph Icon Component
//!
//! Renders a symbolic [`Glyph`] as an inline SVG from the Bootstrap icon set.

use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::{
    BsArrowsAngleContract, BsArrowsAngleExpand, BsBell, BsClock, BsImage, BsInfoCircle,
    BsLightningFill, BsPalette, BsShield, BsStarFill,
};
use dioxus_free_icons::Icon;

use crate::model::Glyph;

/// Decorative glyph. Hidden from assistive technology; glyphs never carry a
/// text alternative.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GlyphIcon { glyph: Glyph::Clock, size: 20 }
/// }
/// ```
#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    /// Edge length of the square SVG in pixels
    #[props(default = 20)]
    size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_else(|| "glyph".to_string());

    rsx! {
        span {
            class: "{class}",
            "aria-hidden": "true",
            "data-glyph": glyph.name(),
            {glyph_svg(glyph, size)}
        }
    }
}

fn glyph_svg(glyph: Glyph, size: u32) -> Element {
    match glyph {
        Glyph::Zap => rsx! { Icon { icon: BsLightningFill, width: size, height: size } },
        Glyph::Star => rsx! { Icon { icon: BsStarFill, width: size, height: size } },
        Glyph::Info => rsx! { Icon { icon: BsInfoCircle, width: size, height: size } },
        Glyph::Palette => rsx! { Icon { icon: BsPalette, width: size, height: size } },
        Glyph::Image => rsx! { Icon { icon: BsImage, width: size, height: size } },
        Glyph::Maximize => rsx! { Icon { icon: BsArrowsAngleExpand, width: size, height: size } },
        Glyph::Minimize => rsx! { Icon { icon: BsArrowsAngleContract, width: size, height: size } },
        Glyph::Clock => rsx! { Icon { icon: BsClock, width: size, height: size } },
        Glyph::Bell => rsx! { Icon { icon: BsBell, width: size, height: size } },
        Glyph::Shield => rsx! { Icon { icon: BsShield, width: size, height: size } },
    }
}
