//! JSON rendering for outlines.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::Outline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an outline to JSON.
pub fn to_json(outline: &Outline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
        JsonFormat::Compact => serde_json::to_string(outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write an outline as JSON to any writer.
pub fn write_json<W: Write>(outline: &Outline, writer: W, format: JsonFormat) -> Result<()> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(writer, outline),
        JsonFormat::Compact => serde_json::to_writer(writer, outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
