//! Error display component

use dioxus::prelude::*;

/// Error panel shown in place of content that failed to load
#[component]
pub fn ErrorDisplay(title: String, message: String) -> Element {
    rsx! {
        div { class: "error-display", role: "alert",
            p { class: "error-display-title", "{title}" }
            p { "{message}" }
        }
    }
}
