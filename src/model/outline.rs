//! Outline result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading depth. Only four levels are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Largest tier
    H1,
    /// Second tier
    H2,
    /// Third tier, and the fallback when no tier exists
    H3,
    /// Everything below the third tier
    H4,
}

impl HeadingLevel {
    /// Numeric depth (1-4).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// Label as written to JSON ("H1".."H4").
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fragment promoted to a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text
    pub text: String,
    /// Assigned level
    pub level: HeadingLevel,
    /// Page number (1-indexed)
    pub page: u32,
    /// Font size of the source fragment
    pub font_size: f32,
    /// Whether the source fragment is bold
    pub is_bold: bool,
}

/// Summary values reported alongside the outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineMetadata {
    /// Wall-clock time spent in extraction
    pub processing_time_seconds: f64,
    /// Two-letter language code
    pub detected_language: String,
    /// Number of pages in the source document
    pub total_pages: u32,
    /// Number of entries in `headings`
    pub total_headings: u32,
}

/// Title plus ordered headings for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title, empty when none qualifies
    pub title: String,
    /// Headings in page, then top-to-bottom order
    pub headings: Vec<Heading>,
    /// Summary values
    pub metadata: OutlineMetadata,
}

impl Outline {
    /// Check if the outline has neither title nor headings.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.headings.is_empty()
    }

    /// Headings at the given level.
    pub fn headings_at(&self, level: HeadingLevel) -> impl Iterator<Item = &Heading> {
        self.headings.iter().filter(move |h| h.level == level)
    }

    /// Headings found on the given page.
    pub fn headings_on_page(&self, page: u32) -> impl Iterator<Item = &Heading> {
        self.headings.iter().filter(move |h| h.page == page)
    }
}
