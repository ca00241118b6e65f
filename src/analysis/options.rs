//! Extraction options and configuration.

use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Language used when detection is skipped or fails.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Heading text length bounds for languages without an override.
pub const DEFAULT_LENGTH_BOUNDS: LengthBounds = LengthBounds::new(3, 150);

/// Languages whose headings are short in characters but dense in meaning.
const CJK_LENGTH_OVERRIDES: &[(&str, LengthBounds)] = &[
    ("zh", LengthBounds::new(2, 100)),
    ("ja", LengthBounds::new(2, 100)),
    ("ko", LengthBounds::new(2, 100)),
];

/// Options for outline extraction.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Error handling mode for malformed fragments
    pub error_mode: ErrorMode,

    /// Language code used when detection is off, too short, or fails
    pub default_language: String,

    /// Whether to consult the language identifier at all
    pub detect_language: bool,

    /// Heading length bounds per language
    pub length_bounds: LengthBoundsTable,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (drop malformed fragments).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the fallback language code.
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    /// Enable or disable language detection.
    pub fn with_language_detection(mut self, detect: bool) -> Self {
        self.detect_language = detect;
        self
    }

    /// Override heading length bounds for a language.
    pub fn with_length_bounds(mut self, code: impl Into<String>, bounds: LengthBounds) -> Self {
        self.length_bounds.insert(code, bounds);
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            default_language: DEFAULT_LANGUAGE.to_string(),
            detect_language: true,
            length_bounds: LengthBoundsTable::default(),
        }
    }
}

/// Error handling mode for fragment ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first malformed fragment
    #[default]
    Strict,
    /// Drop malformed fragments and continue
    Lenient,
}

/// Inclusive bounds on heading text length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest accepted length
    pub min: usize,
    /// Longest accepted length
    pub max: usize,
}

impl LengthBounds {
    /// Create new bounds.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check if a length falls within the bounds.
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl From<RangeInclusive<usize>> for LengthBounds {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

/// Language code to length bounds lookup.
///
/// An override replaces the default bounds for its language.
#[derive(Debug, Clone)]
pub struct LengthBoundsTable {
    default: LengthBounds,
    overrides: HashMap<String, LengthBounds>,
}

impl LengthBoundsTable {
    /// Create a table with no overrides.
    pub fn new(default: LengthBounds) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Add or replace an override.
    pub fn insert(&mut self, code: impl Into<String>, bounds: LengthBounds) {
        self.overrides.insert(code.into().to_lowercase(), bounds);
    }

    /// Bounds that apply to the given language code.
    pub fn for_language(&self, code: &str) -> LengthBounds {
        self.overrides
            .get(&code.to_lowercase())
            .copied()
            .unwrap_or(self.default)
    }
}

impl Default for LengthBoundsTable {
    fn default() -> Self {
        let mut table = Self::new(DEFAULT_LENGTH_BOUNDS);
        for (code, bounds) in CJK_LENGTH_OVERRIDES {
            table.insert(*code, *bounds);
        }
        table
    }
}
