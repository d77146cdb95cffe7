//! Story requested on the command line, handed to the router exactly once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

pub struct StartupStory {
    id: OnceLock<String>,
    consumed: AtomicBool,
}

impl StartupStory {
    pub const fn new() -> Self {
        Self {
            id: OnceLock::new(),
            consumed: AtomicBool::new(false),
        }
    }

    /// Records the story to open. Later calls are ignored.
    pub fn set(&self, id: impl Into<String>) {
        let _ = self.id.set(id.into());
    }

    /// The requested story, without consuming it
    pub fn peek(&self) -> Option<&str> {
        self.id.get().map(String::as_str)
    }

    /// Returns the requested story the first time only, so returning to the
    /// style guide later does not redirect again.
    pub fn take(&self) -> Option<&str> {
        let id = self.peek()?;
        if self.consumed.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(id)
        }
    }
}

pub static STARTUP_STORY: StartupStory = StartupStory::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_yields_story_once() {
        let startup = StartupStory::new();
        startup.set("with-icon");

        assert_eq!(startup.take(), Some("with-icon"));
        assert_eq!(startup.take(), None);
        assert_eq!(startup.take(), None);
        assert_eq!(startup.peek(), Some("with-icon"));
    }

    #[test]
    fn nothing_requested() {
        let startup = StartupStory::new();
        assert_eq!(startup.take(), None);

        // A story set afterwards is still delivered
        startup.set("default");
        assert_eq!(startup.take(), Some("default"));
    }

    #[test]
    fn first_request_wins() {
        let startup = StartupStory::new();
        startup.set("default");
        startup.set("no-icon");
        assert_eq!(startup.take(), Some("default"));
    }
}
