//! Cardkit UI
//!
//! A configurable content card for Dioxus: optional image or glyph, badges,
//! action buttons and a pinned footer, in vertical or horizontal layouts.
//!
//! ## Layers
//!
//! - [`model`]: the [`CardConfig`] input and its variant enums
//! - [`style`]: pure variant resolution into a [`CardStyle`] descriptor
//! - [`paint`]: descriptor to CSS classes and custom properties
//! - [`interaction`]: click and key routing between card and nested buttons
//! - [`components`]: the Dioxus components
//! - [`stories`] and [`render`]: the documented story catalog and static HTML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cardkit_ui::prelude::*;
//!
//! rsx! {
//!     Card {
//!         config: CardConfig::new("Modern Design System", "Built for scale.")
//!             .with_image("https://example.com/cover.jpg")
//!             .with_badge("New", Emphasis::Primary),
//!     }
//! }
//! ```

pub mod components;
pub mod error;
pub mod interaction;
pub mod model;
pub mod paint;
pub mod render;
pub mod stories;
pub mod style;
pub mod theme;

pub use components::*;
pub use error::{CardError, Result};
pub use model::{
    Alignment, Badge, CardButton, CardConfig, Emphasis, Footer, Glyph, IconSize, ImagePosition,
    ImageSize, Layout, Media,
};
pub use style::{CardStyle, CardVariant};

pub mod prelude {
    pub use crate::components::{Card, StoryCard};
    pub use crate::model::*;
}
