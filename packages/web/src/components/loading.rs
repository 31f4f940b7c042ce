//! Loading indicator

use dioxus::prelude::*;

/// Shown while a scrape request is in flight
#[component]
pub fn LoadingIndicator(visible: bool) -> Element {
    rsx! {
        div {
            id: "loading",
            class: "loading",
            hidden: !visible,
            div {
                class: "loading-dots",
                div { class: "dot" }
                div { class: "dot", style: "animation-delay: 0.1s" }
                div { class: "dot", style: "animation-delay: 0.2s" }
            }
            p { class: "loading-text", "Scraping..." }
        }
    }
}
