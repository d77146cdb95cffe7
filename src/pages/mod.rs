//! Pages of the desktop harness.

mod story_browser;
mod style_guide;

pub use story_browser::{StoryIndex, StoryView};
pub use style_guide::StyleGuide;
