//! Dioxus components for rendering cards.

mod badge;
mod button;
mod card;
mod glyph;
mod story_card;

pub use badge::CardBadge;
pub use button::{ActionButton, ActionButtonProps};
pub use card::{Card, CardProps};
pub use glyph::{GlyphIcon, GlyphIconProps};
pub use story_card::{attach_activity, use_story_config, StoryCard, StoryCardProps};
