//! Screenshot gallery components

use dioxus::prelude::*;
use wrm_common::ImageRef;

/// A thumbnail in the gallery, already resolved to a lightbox image
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub label: String,
    pub image: ImageRef,
}

/// Collapsible screenshot gallery
#[component]
pub fn GalleryView(
    /// Gallery heading
    #[props(default = "Gallery".to_string())]
    title: String,
    /// Text of the `<summary>` toggle
    summary: String,
    items: Vec<GalleryItem>,
    /// Called with the clicked thumbnail's image
    on_open: EventHandler<ImageRef>,
) -> Element {
    rsx! {
        h2 { class: "subtitle", "{title}" }
        details { class: "details",
            summary { class: "details-summary", "{summary}" }
            for (i , item) in items.iter().enumerate() {
                ThumbnailView {
                    key: "{item.label}-{i}",
                    item: item.clone(),
                    on_open,
                }
            }
        }
    }
}

/// Labelled, clickable screenshot thumbnail
#[component]
pub fn ThumbnailView(item: GalleryItem, on_open: EventHandler<ImageRef>) -> Element {
    let image = item.image.clone();

    rsx! {
        div { class: "screenshot",
            p { class: "screenshot-label", "{item.label}" }
            img {
                src: "{item.image.source}",
                alt: "{item.image.caption}",
                class: "screenshot-img",
                onclick: move |_| on_open.call(image.clone()),
            }
        }
    }
}
