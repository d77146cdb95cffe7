//! Color constants shared by the stylesheet and the harness.

// === BRAND ===
pub const PRIMARY: &str = "#205ea3";
pub const PRIMARY_HOVER: &str = "rgba(32, 94, 163, 0.9)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#21262a";
pub const TEXT_SECONDARY: &str = "#5d686f";

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const PAGE_BACKGROUND: &str = "#f3f4f6";
pub const FOOTER_BACKGROUND: &str = "#f0f4f6";
pub const NEUTRAL_FILL: &str = "#f3f4f6";
pub const NEUTRAL_HOVER: &str = "#f9fafb";

// === BORDERS ===
pub const BORDER: &str = "#e5e7eb";
pub const BORDER_STRONG: &str = "#d1d5db";
pub const BORDER_HOVER: &str = "#9ca3af";

// === TYPOGRAPHY ===
pub const FONT_SANS: &str =
    "ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";
