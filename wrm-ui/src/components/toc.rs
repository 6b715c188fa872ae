//! Table of contents

use dioxus::prelude::*;
use wrm_common::TocEntry;

#[component]
pub fn TableOfContentsView(
    entries: Vec<TocEntry>,
    #[props(default = "Table of Contents".to_string())] title: String,
) -> Element {
    rsx! {
        h2 { class: "subtitle", "{title}" }
        nav { TocList { entries } }
    }
}

/// Nested list of in-page anchor links
#[component]
fn TocList(entries: Vec<TocEntry>) -> Element {
    rsx! {
        ul { class: "toc-list",
            for entry in entries.iter() {
                li { key: "{entry.anchor}",
                    a { href: "#{entry.anchor}", "{entry.label}" }
                    if !entry.children.is_empty() {
                        TocList { entries: entry.children.clone() }
                    }
                }
            }
        }
    }
}
