//! Color palette and stylesheets for cards and the demo harness.

mod colors;
mod styles;

pub use colors::*;
pub use styles::{CARD_STYLES, HARNESS_STYLES};

/// `:root` block declaring the `--ck-*` custom properties used by the
/// stylesheets.
pub fn root_variables() -> String {
    let vars = [
        ("primary", PRIMARY),
        ("primary-hover", PRIMARY_HOVER),
        ("text-primary", TEXT_PRIMARY),
        ("text-secondary", TEXT_SECONDARY),
        ("surface", SURFACE),
        ("page-background", PAGE_BACKGROUND),
        ("footer-background", FOOTER_BACKGROUND),
        ("neutral-fill", NEUTRAL_FILL),
        ("neutral-hover", NEUTRAL_HOVER),
        ("border", BORDER),
        ("border-strong", BORDER_STRONG),
        ("border-hover", BORDER_HOVER),
        ("font-sans", FONT_SANS),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str(&format!("  --ck-{name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}

/// Everything a page needs to display cards.
pub fn card_stylesheet() -> String {
    format!("{}{}", root_variables(), CARD_STYLES)
}

/// Card styles plus the harness page styles.
pub fn harness_stylesheet() -> String {
    format!("{}{}{}", root_variables(), CARD_STYLES, HARNESS_STYLES)
}
