//! Text fragment types.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Check that every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(b: [f32; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

/// A run of text sharing one font, as produced by the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FragmentRecord", into = "FragmentRecord")]
pub struct TextFragment {
    /// Trimmed text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Position on the page
    pub bbox: BoundingBox,
    /// Page number (1-indexed)
    pub page: u32,
    /// Whether the font name marks the run as bold
    pub is_bold: bool,
    /// Whether the font name marks the run as italic
    pub is_italic: bool,
}

impl TextFragment {
    /// Create a new fragment, trimming the text and deriving style flags
    /// from the font name.
    pub fn new(
        text: impl AsRef<str>,
        font_size: f32,
        font_name: impl Into<String>,
        bbox: BoundingBox,
        page: u32,
    ) -> Self {
        let font_name = font_name.into();
        let lower = font_name.to_lowercase();

        Self {
            text: text.as_ref().trim().to_string(),
            font_size,
            is_bold: lower.contains("bold"),
            is_italic: lower.contains("italic"),
            font_name,
            bbox,
            page,
        }
    }

    /// Check if the fragment has no text left after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Describe why this fragment cannot be scored, if it cannot.
    pub fn defect(&self) -> Option<String> {
        if !self.font_size.is_finite() {
            return Some(format!("font size {} is not finite", self.font_size));
        }
        if self.font_size <= 0.0 {
            return Some(format!("font size {} is not positive", self.font_size));
        }
        if !self.bbox.is_finite() {
            return Some(format!("bounding box {:?} is not finite", self.bbox));
        }
        if self.page == 0 {
            return Some("page numbers are 1-based".to_string());
        }
        None
    }
}

/// Wire shape of a fragment, without the derived style flags.
#[derive(Serialize, Deserialize)]
struct FragmentRecord {
    text: String,
    font_size: f32,
    #[serde(default)]
    font_name: String,
    bbox: BoundingBox,
    page: u32,
}

impl From<FragmentRecord> for TextFragment {
    fn from(r: FragmentRecord) -> Self {
        TextFragment::new(r.text, r.font_size, r.font_name, r.bbox, r.page)
    }
}

impl From<TextFragment> for FragmentRecord {
    fn from(f: TextFragment) -> Self {
        Self {
            text: f.text,
            font_size: f.font_size,
            font_name: f.font_name,
            bbox: f.bbox,
            page: f.page,
        }
    }
}
