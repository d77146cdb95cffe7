//! Badge Component
//!
//! Small uppercase status/category indicator announced as a status region.

use dioxus::prelude::*;

use crate::model::Emphasis;
use crate::paint::badge_class;

#[component]
pub fn CardBadge(label: String, #[props(default)] variant: Emphasis) -> Element {
    rsx! {
        span {
            class: badge_class(variant),
            role: "status",
            "{label}"
        }
    }
}
