//! Shared UI components

pub mod error_display;
pub mod gallery;
pub mod icons;
pub mod layout;
pub mod lightbox;
pub mod sections;
pub mod toc;

pub use error_display::ErrorDisplay;
pub use gallery::{GalleryItem, GalleryView, ThumbnailView};
pub use icons::XIcon;
pub use layout::DocsLayoutView;
pub use lightbox::LightboxView;
pub use sections::{CodeStructure, Disclaimer, HowToUse, Overview, Prerequisites};
pub use toc::TableOfContentsView;
