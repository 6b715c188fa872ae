use dioxus::prelude::*;
use tracing::error;
use wrm_common::{ImageRef, Lightbox, OverlayZone, SiteConfig, SiteContent};
use wrm_ui::{
    CodeStructure, Disclaimer, DocsLayoutView, ErrorDisplay, GalleryItem, GalleryView, HowToUse,
    LightboxView, Overview, Prerequisites, TableOfContentsView,
};

/// The documentation page. Owns the lightbox state for its lifetime.
#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    let mut lightbox = use_signal(Lightbox::new);

    let content = use_hook(|| {
        SiteContent::embedded().map_err(|e| {
            error!("Failed to load site content: {}", e);
            e.to_string()
        })
    });

    let content = match content {
        Ok(content) => content,
        Err(message) => {
            return rsx! {
                DocsLayoutView {
                    ErrorDisplay { title: "Could not load this page".to_string(), message }
                }
            };
        }
    };

    let items: Vec<GalleryItem> = content
        .gallery
        .entries
        .iter()
        .map(|entry| GalleryItem {
            label: entry.label.clone(),
            image: entry.image(&config),
        })
        .collect();

    let selected = lightbox.read().selected().cloned();

    rsx! {
        DocsLayoutView {
            sidebar: rsx! {
                TableOfContentsView { entries: content.toc.clone() }
                GalleryView {
                    summary: content.gallery.summary.clone(),
                    items,
                    on_open: move |image: ImageRef| lightbox.write().open(image.source, image.caption),
                }
                Disclaimer {}
            },
            overlay: rsx! {
                LightboxView {
                    image: selected,
                    on_zone: move |zone: OverlayZone| {
                        lightbox.write().activate(zone);
                    },
                }
            },
            Overview { title: content.title.clone() }
            hr { class: "divider" }
            Prerequisites {}
            hr { class: "divider" }
            HowToUse {}
            hr { class: "divider" }
            CodeStructure {}
        }
    }
}
