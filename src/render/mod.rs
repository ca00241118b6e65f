//! Rendering module for converting outlines to output formats.

mod json;
mod toc;

pub use json::{to_json, write_json, JsonFormat};
pub use toc::{to_markdown_toc, TocOptions};
