//! Document model types for outline extraction.
//!
//! The input side (`Document`, `Page`, `TextFragment`) mirrors what a PDF
//! decoder produces: positioned runs of text with font information. The
//! output side (`Outline`, `Heading`) is what the extractor returns.

mod document;
mod fragment;
mod outline;
mod page;

pub use document::Document;
pub use fragment::{BoundingBox, TextFragment};
pub use outline::{Heading, HeadingLevel, Outline, OutlineMetadata};
pub use page::{sort_by_top, Page};
