//! Document-level types.

use super::{Page, TextFragment};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A decoded document: pages of positioned text fragments.
///
/// This is the shape the decoder hands over. The outline pipeline never
/// reopens the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Parse a document from decoder JSON output.
    ///
    /// # Example
    ///
    /// ```
    /// use pdfoutline::Document;
    ///
    /// let doc = Document::from_json(r#"{"pages": []}"#).unwrap();
    /// assert!(doc.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every fragment, page by page.
    pub fn fragments(&self) -> impl Iterator<Item = &TextFragment> {
        self.pages.iter().flat_map(|p| p.fragments.iter())
    }
}
