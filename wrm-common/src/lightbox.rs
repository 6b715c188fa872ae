use tracing::{debug, warn};

/// An image selected for the lightbox
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageRef {
    pub source: String,
    pub caption: String,
}

impl ImageRef {
    pub fn new(source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
        }
    }
}

/// Clickable regions of the open overlay.
///
/// Inner zones stop propagation in the view, so each click lands on exactly
/// one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayZone {
    /// Dimmed area around the enlarged image
    Backdrop,
    /// The close button
    DismissControl,
    /// The enlarged image and its caption
    Image,
}

impl OverlayZone {
    /// Whether a click on this zone closes the overlay
    pub fn dismisses(self) -> bool {
        match self {
            OverlayZone::Backdrop | OverlayZone::DismissControl => true,
            OverlayZone::Image => false,
        }
    }
}

/// Lightbox state: closed, or open on a single image.
///
/// Pure data structure with no rendering; the page owns one of these in a
/// signal and the view renders from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(ImageRef),
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on an image, replacing any current selection.
    ///
    /// An empty source is accepted; the browser just shows a broken image.
    pub fn open(&mut self, source: impl Into<String>, caption: impl Into<String>) {
        let image = ImageRef::new(source, caption);
        if image.source.is_empty() {
            warn!("Opening lightbox with an empty image source");
        }
        debug!("Opening lightbox on {}", image.source);
        *self = Lightbox::Open(image);
    }

    /// Close the overlay. No-op when already closed.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Closing lightbox");
        }
        *self = Lightbox::Closed;
    }

    /// Apply a click on an overlay zone. Returns true if it closed the overlay.
    pub fn activate(&mut self, zone: OverlayZone) -> bool {
        if !self.is_open() || !zone.dismisses() {
            return false;
        }
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn selected(&self) -> Option<&ImageRef> {
        match self {
            Lightbox::Open(image) => Some(image),
            Lightbox::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnails() -> Vec<ImageRef> {
        vec![
            ImageRef::new("a.png", "Cap A"),
            ImageRef::new("b.png", "Cap B"),
        ]
    }

    #[test]
    fn test_starts_closed() {
        let lb = Lightbox::new();
        assert!(!lb.is_open());
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn test_open_keeps_inputs_verbatim() {
        let mut lb = Lightbox::new();
        let caption = "  WoT Replay Manager showing a list of replays (ünïcode)  ";
        lb.open("/replay-manager/MainWindow.png", caption);
        assert!(lb.is_open());
        let image = lb.selected().unwrap();
        assert_eq!(image.source, "/replay-manager/MainWindow.png");
        assert_eq!(image.caption, caption);
    }

    #[test]
    fn test_open_with_empty_caption() {
        let mut lb = Lightbox::new();
        lb.open("a.png", "");
        assert_eq!(lb.selected(), Some(&ImageRef::new("a.png", "")));
    }

    #[test]
    fn test_open_accepts_empty_source() {
        let mut lb = Lightbox::new();
        lb.open("", "nothing");
        assert!(lb.is_open());
        assert_eq!(lb.selected().unwrap().source, "");
    }

    #[test]
    fn test_second_open_replaces_selection() {
        let mut lb = Lightbox::new();
        lb.open("a.png", "Cap A");
        lb.open("b.png", "Cap B");
        assert_eq!(lb, Lightbox::Open(ImageRef::new("b.png", "Cap B")));
    }

    #[test]
    fn test_close_clears_selection() {
        let mut lb = Lightbox::new();
        lb.open("a.png", "Cap A");
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut once = Lightbox::new();
        once.open("a.png", "Cap A");
        once.close();

        let mut twice = Lightbox::new();
        twice.open("a.png", "Cap A");
        twice.close();
        twice.close();

        assert_eq!(once, twice);
        assert_eq!(twice, Lightbox::Closed);
    }

    #[test]
    fn test_close_when_never_opened() {
        let mut lb = Lightbox::new();
        lb.close();
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_zone_dismissal() {
        assert!(OverlayZone::Backdrop.dismisses());
        assert!(OverlayZone::DismissControl.dismisses());
        assert!(!OverlayZone::Image.dismisses());
    }

    #[test]
    fn test_image_click_keeps_overlay_open() {
        let mut lb = Lightbox::new();
        lb.open("a.png", "Cap A");
        assert!(!lb.activate(OverlayZone::Image));
        assert_eq!(lb, Lightbox::Open(ImageRef::new("a.png", "Cap A")));
    }

    #[test]
    fn test_dismiss_control_closes_exactly_once() {
        let mut lb = Lightbox::new();
        lb.open("a.png", "Cap A");
        assert!(lb.activate(OverlayZone::DismissControl));
        assert!(!lb.is_open());
        // Anything reaching the backdrop afterwards must not count as a second close
        assert!(!lb.activate(OverlayZone::Backdrop));
    }

    #[test]
    fn test_backdrop_when_closed_does_nothing() {
        let mut lb = Lightbox::new();
        assert!(!lb.activate(OverlayZone::Backdrop));
        assert!(!lb.activate(OverlayZone::DismissControl));
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_thumbnail_then_backdrop() {
        let thumbs = thumbnails();
        let mut lb = Lightbox::new();

        let first = &thumbs[0];
        lb.open(first.source.clone(), first.caption.clone());
        assert!(lb.is_open());
        assert_eq!(lb.selected(), Some(&ImageRef::new("a.png", "Cap A")));

        assert!(lb.activate(OverlayZone::Backdrop));
        assert_eq!(lb, Lightbox::Closed);
    }
}
