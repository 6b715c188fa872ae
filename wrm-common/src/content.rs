//! Site content model
//!
//! The table of contents and screenshot gallery are data, embedded
//! at compile time from `content/site.json`. Prose sections stay in the page
//! markup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::lightbox::ImageRef;

const EMBEDDED_SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Gallery entry '{label}' has no image file")]
    EmptyImageSource { label: String },
    #[error("Table of contents entry '{label}' has no anchor")]
    EmptyAnchor { label: String },
    #[error("Duplicate table of contents anchor: #{0}")]
    DuplicateAnchor(String),
}

/// A table of contents link, optionally with nested links
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TocEntry {
    pub anchor: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<TocEntry>,
}

/// A screenshot shown as a clickable thumbnail
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryEntry {
    /// Heading shown above the thumbnail
    pub label: String,
    /// Image path, relative to the configured asset base
    pub file: String,
    /// Alt text for the thumbnail and caption in the lightbox
    pub caption: String,
}

impl GalleryEntry {
    /// The image handed to the lightbox when this thumbnail is clicked
    pub fn image(&self, config: &SiteConfig) -> ImageRef {
        ImageRef::new(config.asset_url(&self.file), self.caption.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GallerySection {
    /// Text of the collapsible summary
    pub summary: String,
    pub entries: Vec<GalleryEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub toc: Vec<TocEntry>,
    pub gallery: GallerySection,
}

impl SiteContent {
    /// Parse and validate a site content document
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    /// All TOC anchors, depth-first in document order
    pub fn anchors(&self) -> Vec<&str> {
        fn walk<'a>(entries: &'a [TocEntry], out: &mut Vec<&'a str>) {
            for entry in entries {
                out.push(entry.anchor.as_str());
                walk(&entry.children, out);
            }
        }

        let mut anchors = Vec::new();
        walk(&self.toc, &mut anchors);
        anchors
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(entry) = self
            .gallery
            .entries
            .iter()
            .find(|e| e.file.trim().is_empty())
        {
            return Err(ContentError::EmptyImageSource {
                label: entry.label.clone(),
            });
        }

        validate_toc(&self.toc, &mut HashSet::new())
    }
}

fn validate_toc<'a>(
    entries: &'a [TocEntry],
    seen: &mut HashSet<&'a str>,
) -> Result<(), ContentError> {
    for entry in entries {
        if entry.anchor.trim().is_empty() {
            return Err(ContentError::EmptyAnchor {
                label: entry.label.clone(),
            });
        }
        if !seen.insert(entry.anchor.as_str()) {
            return Err(ContentError::DuplicateAnchor(entry.anchor.clone()));
        }
        validate_toc(&entry.children, seen)?;
    }
    Ok(())
}
