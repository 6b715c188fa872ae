//! Docs layout view component

use dioxus::prelude::*;

/// Two-column page layout: prose on the left, sidebar on the right.
/// `overlay` renders after the columns so it stacks above them.
#[component]
pub fn DocsLayoutView(
    /// Main prose content
    children: Element,
    /// Sidebar (table of contents, gallery, disclaimer)
    #[props(default)]
    sidebar: Option<Element>,
    /// Optional overlay (the lightbox)
    #[props(default)]
    overlay: Option<Element>,
) -> Element {
    rsx! {
        div { class: "app",
            main { class: "container",
                div { class: "layout",
                    section { class: "content", {children} }
                    if let Some(sb) = sidebar {
                        aside { class: "sidebar", {sb} }
                    }
                }
            }
            if let Some(ov) = overlay {
                {ov}
            }
        }
    }
}
