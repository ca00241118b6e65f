//! Markdown table-of-contents rendering.

use crate::model::Outline;

/// Options for table-of-contents rendering.
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Spaces of indentation per level below H1
    pub indent: usize,

    /// Character to use for list markers
    pub list_marker: char,

    /// Append the page number to each entry
    pub show_pages: bool,

    /// Render the title as a top-level Markdown heading
    pub include_title: bool,
}

impl TocOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable page numbers.
    pub fn with_pages(mut self, show: bool) -> Self {
        self.show_pages = show;
        self
    }

    /// Enable or disable the title line.
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            list_marker: '-',
            show_pages: true,
            include_title: true,
        }
    }
}

/// Render an outline as a nested Markdown list.
///
/// Indentation follows each heading's level as-is; a level deeper than its
/// predecessor's parent is not repaired.
pub fn to_markdown_toc(outline: &Outline, options: &TocOptions) -> String {
    let mut lines = Vec::with_capacity(outline.headings.len() + 2);

    if options.include_title && !outline.title.is_empty() {
        lines.push(format!("# {}", escape(&outline.title)));
        lines.push(String::new());
    }

    for heading in &outline.headings {
        let indent = " ".repeat(options.indent * (heading.level.depth() as usize - 1));
        let mut line = format!("{}{} {}", indent, options.list_marker, escape(&heading.text));
        if options.show_pages {
            line.push_str(&format!(" (p. {})", heading.page));
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Escape characters that would start Markdown formatting.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
