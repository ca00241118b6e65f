//! # pdfoutline
//!
//! Heading outline extraction for decoded PDF documents.
//!
//! This library takes the positioned text fragments a PDF decoder produces
//! and derives a document title plus an ordered list of headings tagged
//! H1 to H4, ready for navigation or table-of-contents generation.
//!
//! ## Quick Start
//!
//! ```
//! use pdfoutline::{extract_outline, BoundingBox, Document, Page, TextFragment};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let mut page = Page::letter(1);
//!     page.add_fragment(TextFragment::new(
//!         "Project Report",
//!         24.0,
//!         "Helvetica-Bold",
//!         BoundingBox::new(72.0, 60.0, 400.0, 84.0),
//!         1,
//!     ));
//!     let mut doc = Document::new();
//!     doc.add_page(page);
//!
//!     let outline = extract_outline(&doc)?;
//!     assert_eq!(outline.title, "Project Report");
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - **Font statistics**: the most frequent font size is body text; distinct
//!   sizes more than 1pt larger form the heading tiers
//! - **Title**: the best-scoring large, short fragment near the top of page 1
//! - **Headings**: fragments that are large or bold, short, set apart from
//!   the text above, and not bare numbers
//! - **Levels**: the top three tiers map to H1-H3, anything smaller to H4
//! - **CJK support**: relaxed length bounds for Chinese, Japanese and Korean

pub mod analysis;
pub mod detect;
pub mod error;
pub mod extractor;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{ErrorMode, FontStatistics, LengthBounds, OutlineOptions};
pub use detect::{LanguageIdentifier, WhatlangIdentifier};
pub use error::{Error, Result};
pub use extractor::OutlineExtractor;
pub use model::{
    BoundingBox, Document, Heading, HeadingLevel, Outline, OutlineMetadata, Page, TextFragment,
};
pub use render::{JsonFormat, TocOptions};

/// Extract the outline of a document with default options.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline, Document};
///
/// let outline = extract_outline(&Document::new()).unwrap();
/// assert!(outline.is_empty());
/// ```
pub fn extract_outline(doc: &Document) -> Result<Outline> {
    OutlineExtractor::new().extract(doc)
}

/// Extract the outline of a document with custom options.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline_with_options, Document, OutlineOptions};
///
/// let options = OutlineOptions::new().lenient().with_language_detection(false);
/// let outline = extract_outline_with_options(&Document::new(), options).unwrap();
/// assert_eq!(outline.metadata.detected_language, "en");
/// ```
pub fn extract_outline_with_options(doc: &Document, options: OutlineOptions) -> Result<Outline> {
    OutlineExtractor::with_options(options).extract(doc)
}

/// Parse decoder JSON and return the outline as JSON.
///
/// # Example
///
/// ```
/// use pdfoutline::{outline_json, JsonFormat};
///
/// let json = outline_json(r#"{"pages": []}"#, JsonFormat::Compact).unwrap();
/// assert!(json.starts_with(r#"{"title":"""#));
/// ```
pub fn outline_json(document_json: &str, format: JsonFormat) -> Result<String> {
    let doc = Document::from_json(document_json)?;
    let outline = extract_outline(&doc)?;
    render::to_json(&outline, format)
}
