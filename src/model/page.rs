//! Page-level types.

use super::TextFragment;
use serde::{Deserialize, Serialize};

/// A single decoded page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Fragments in decoder order
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            fragments: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0) // 210mm * 2.834, 297mm * 2.834
    }

    /// Add a fragment to the page.
    pub fn add_fragment(&mut self, fragment: TextFragment) {
        self.fragments.push(fragment);
    }

    /// Raw page text: fragment texts in decoder order, one per line.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Get the number of fragments on the page.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}

/// Sort fragments top to bottom by their top edge.
///
/// The sort is stable, so fragments sharing a top edge keep decoder order.
pub fn sort_by_top(fragments: &mut [&TextFragment]) {
    fragments.sort_by(|a, b| a.bbox.y0.total_cmp(&b.bbox.y0));
}
