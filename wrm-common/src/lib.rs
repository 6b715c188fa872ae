//! wrm-common - Framework-free logic for the replay manager docs site
//!
//! Lightbox state machine, site content model and site configuration.
//! Nothing in here depends on Dioxus, so it is all unit-testable on the host.

pub mod config;
pub mod content;
pub mod lightbox;

pub use config::{ConfigError, SiteConfig};
pub use content::{ContentError, GalleryEntry, GallerySection, SiteContent, TocEntry};
pub use lightbox::{ImageRef, Lightbox, OverlayZone};
