//! Heading classification and level assignment.

use regex::Regex;

use super::{FontStatistics, LengthBounds};
use crate::model::{Heading, HeadingLevel, TextFragment};

/// Fragments must exceed the body size by more than this to count as large.
pub const LARGE_TEXT_MARGIN: f32 = 0.5;

/// Headings have at most this many words.
pub const MAX_HEADING_WORDS: usize = 15;

/// Minimum gap in points between a heading and the fragment above it.
pub const MIN_VERTICAL_GAP: f32 = 3.0;

/// A size within this fraction of a tier counts as reaching it.
pub const TIER_TOLERANCE: f32 = 0.95;

/// The individual tests a fragment must pass to become a heading.
///
/// Each field is computed independently so the combination rule in
/// [`is_heading_candidate`] can be checked on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidacySignals {
    /// Font size exceeds body size by more than the margin
    pub is_large: bool,
    /// Font name marks the fragment bold
    pub is_bold: bool,
    /// Character count is within the language's bounds
    pub has_valid_length: bool,
    /// Word count is within the limit
    pub has_few_words: bool,
    /// Enough space above the fragment
    pub has_vertical_space: bool,
    /// Text is more than digits, dots and commas
    pub is_not_numeric: bool,
    /// Text contains a letter (general category L)
    pub has_letters: bool,
    /// Font size is exactly one of the heading tiers
    pub is_heading_size: bool,
}

/// Combine the signals into a verdict.
pub fn is_heading_candidate(s: &CandidacySignals) -> bool {
    (s.is_large || s.is_bold)
        && s.has_valid_length
        && s.has_few_words
        && s.has_vertical_space
        && s.is_not_numeric
        && s.has_letters
        && (s.is_heading_size || s.is_bold)
}

/// Check the gap between a fragment and the one directly above it.
///
/// There is no column awareness: `previous` is whatever sorted just before,
/// so side-by-side columns can produce false gaps or false adjacency.
pub fn has_vertical_space(fragment: &TextFragment, previous: Option<&TextFragment>) -> bool {
    match previous {
        None => true,
        Some(prev) => fragment.bbox.y0 - prev.bbox.y1 >= MIN_VERTICAL_GAP,
    }
}

/// Check if text is only digits once dots and commas are removed.
pub fn is_numeric_only(text: &str) -> bool {
    let mut digits = text.chars().filter(|c| *c != '.' && *c != ',').peekable();
    digits.peek().is_some() && digits.all(char::is_numeric)
}

/// Map a font size onto a heading level using the tier table.
///
/// `heading_sizes` must be sorted largest first. Without any tier the
/// result is always H3.
pub fn assign_level(font_size: f32, heading_sizes: &[f32]) -> HeadingLevel {
    const LEVELS: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    if heading_sizes.is_empty() {
        return HeadingLevel::H3;
    }

    heading_sizes
        .iter()
        .zip(LEVELS)
        .find(|(tier, _)| font_size >= *tier * TIER_TOLERANCE)
        .map(|(_, level)| level)
        .unwrap_or(HeadingLevel::H4)
}

/// Classifies fragments against one document's font statistics.
#[derive(Debug, Clone)]
pub struct HeadingClassifier<'a> {
    stats: &'a FontStatistics,
    length_bounds: LengthBounds,
    letter: Regex,
}

impl<'a> HeadingClassifier<'a> {
    /// Create a classifier for a document.
    pub fn new(stats: &'a FontStatistics, length_bounds: LengthBounds) -> Self {
        Self {
            stats,
            length_bounds,
            letter: Regex::new(r"\p{L}").unwrap(),
        }
    }

    /// Check for a letter. Letter numbers (Ⅻ) and symbols (Ⓐ) do not count.
    pub fn has_letters(&self, text: &str) -> bool {
        self.letter.is_match(text)
    }

    /// Evaluate every candidacy test for a fragment.
    pub fn signals(
        &self,
        fragment: &TextFragment,
        previous: Option<&TextFragment>,
    ) -> CandidacySignals {
        CandidacySignals {
            is_large: fragment.font_size > self.stats.body_size + LARGE_TEXT_MARGIN,
            is_bold: fragment.is_bold,
            has_valid_length: self.length_bounds.contains(fragment.char_count()),
            has_few_words: fragment.word_count() <= MAX_HEADING_WORDS,
            has_vertical_space: has_vertical_space(fragment, previous),
            is_not_numeric: !is_numeric_only(&fragment.text),
            has_letters: self.has_letters(&fragment.text),
            is_heading_size: self.stats.is_heading_size(fragment.font_size),
        }
    }

    /// Classify a single fragment given the one sorted directly above it.
    pub fn classify(
        &self,
        fragment: &TextFragment,
        previous: Option<&TextFragment>,
    ) -> Option<Heading> {
        let signals = self.signals(fragment, previous);
        if !is_heading_candidate(&signals) {
            log::trace!("rejected {:?}: {:?}", fragment.text, signals);
            return None;
        }

        Some(Heading {
            text: fragment.text.clone(),
            level: assign_level(fragment.font_size, &self.stats.heading_sizes),
            page: fragment.page,
            font_size: fragment.font_size,
            is_bold: fragment.is_bold,
        })
    }

    /// Classify a page whose fragments are already sorted top to bottom.
    pub fn classify_page(&self, sorted: &[&TextFragment]) -> Vec<Heading> {
        sorted
            .iter()
            .enumerate()
            .filter_map(|(i, fragment)| {
                let previous = i.checked_sub(1).map(|p| sorted[p]);
                self.classify(fragment, previous)
            })
            .collect()
    }
}
