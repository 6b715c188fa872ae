//! Image lightbox view component

use crate::components::icons::XIcon;
use dioxus::prelude::*;
use wrm_common::{ImageRef, OverlayZone};

/// Enlarged image overlay.
///
/// Renders nothing when `image` is None. Every click inside the overlay is
/// reported as exactly one `OverlayZone`: the close button and the image
/// region stop propagation, so their clicks never also reach the backdrop.
#[component]
pub fn LightboxView(
    /// Image to show, None when the lightbox is closed
    image: Option<ImageRef>,
    /// Called with the zone that was clicked
    on_zone: EventHandler<OverlayZone>,
) -> Element {
    let Some(image) = image else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_zone.call(OverlayZone::Backdrop),

            // Image region
            div {
                class: "modal",
                onclick: move |e| {
                    e.stop_propagation();
                    on_zone.call(OverlayZone::Image);
                },

                button {
                    class: "modal-close",
                    r#type: "button",
                    title: "Close",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_zone.call(OverlayZone::DismissControl);
                    },
                    XIcon { class: "modal-close-icon" }
                }

                img {
                    src: "{image.source}",
                    alt: "{image.caption}",
                    class: "modal-img",
                }
                if !image.caption.is_empty() {
                    p { class: "modal-caption", "{image.caption}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct LightboxHarnessProps {
        image: Option<ImageRef>,
    }

    #[allow(non_snake_case)]
    fn LightboxHarness(props: LightboxHarnessProps) -> Element {
        rsx! {
            LightboxView { image: props.image, on_zone: |_| {} }
        }
    }

    fn render(image: Option<ImageRef>) -> String {
        let mut dom = VirtualDom::new_with_props(LightboxHarness, LightboxHarnessProps { image });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_closed_renders_no_overlay() {
        let html = render(None);
        assert!(!html.contains("modal-overlay"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_open_binds_source_and_caption() {
        let html = render(Some(ImageRef::new("a.png", "Cap A")));
        assert!(html.contains("modal-overlay"));
        assert!(html.contains("modal-close"));
        assert!(html.contains(r#"src="a.png""#));
        assert!(html.contains(r#"alt="Cap A""#));
        assert!(html.contains("modal-caption"));
    }

    #[test]
    fn test_empty_caption_omits_caption_line() {
        let html = render(Some(ImageRef::new("b.png", "")));
        assert!(html.contains(r#"src="b.png""#));
        assert!(!html.contains("modal-caption"));
    }
}
