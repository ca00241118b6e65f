//! Title selection from the first page.

use crate::model::{Page, TextFragment};

/// Titles must be set larger than this.
pub const TITLE_MIN_FONT_SIZE: f32 = 16.0;

/// Titles must be shorter than this many characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Minimum and maximum words in a title.
pub const TITLE_WORD_RANGE: (usize, usize) = (2, 20);

/// Titles must start within this fraction of the page height.
pub const TITLE_UPPER_AREA: f64 = 0.30;

/// Fragments starting within this fraction earn a placement bonus.
pub const TITLE_TOP_AREA: f64 = 0.15;

const BOLD_BONUS: f32 = 5.0;
const TOP_BONUS: f32 = 3.0;

/// A first-page fragment that passed the title filters.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate<'a> {
    /// The fragment
    pub fragment: &'a TextFragment,
    /// Font size plus style and placement bonuses
    pub score: f32,
}

/// Whether the fragment starts above `fraction` of the page height.
///
/// Computed in `f64`: in `f32`, `800.0 * 0.30` rounds above 240.
fn starts_above(fragment: &TextFragment, page_height: f32, fraction: f64) -> bool {
    f64::from(fragment.bbox.y0) < f64::from(page_height) * fraction
}

/// Check if a fragment could be the title of a page with the given height.
pub fn is_title_eligible(fragment: &TextFragment, page_height: f32) -> bool {
    let words = fragment.word_count();

    fragment.font_size > TITLE_MIN_FONT_SIZE
        && fragment.char_count() < TITLE_MAX_CHARS
        && starts_above(fragment, page_height, TITLE_UPPER_AREA)
        && (TITLE_WORD_RANGE.0..=TITLE_WORD_RANGE.1).contains(&words)
}

/// Score an eligible fragment.
pub fn title_score(fragment: &TextFragment, page_height: f32) -> f32 {
    let mut score = fragment.font_size;
    if fragment.is_bold {
        score += BOLD_BONUS;
    }
    if starts_above(fragment, page_height, TITLE_TOP_AREA) {
        score += TOP_BONUS;
    }
    score
}

/// Every eligible fragment on the page, in the order given.
pub fn title_candidates<'a, I>(fragments: I, page_height: f32) -> Vec<TitleCandidate<'a>>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    fragments
        .into_iter()
        .filter(|f| is_title_eligible(f, page_height))
        .map(|fragment| TitleCandidate {
            fragment,
            score: title_score(fragment, page_height),
        })
        .collect()
}

/// Pick the highest-scoring candidate; the earliest wins a tie.
pub fn best_candidate<'a, 'b>(
    candidates: &'b [TitleCandidate<'a>],
) -> Option<&'b TitleCandidate<'a>> {
    let mut best: Option<&'b TitleCandidate<'a>> = None;
    for candidate in candidates {
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Select the document title from the first page's fragments.
///
/// Returns an empty string when no fragment qualifies. Titles split over
/// several fragments are not reassembled.
pub fn select_title<'a, I>(first_page: &Page, fragments: I) -> String
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let candidates = title_candidates(fragments, first_page.height);
    match best_candidate(&candidates) {
        Some(best) => {
            log::debug!(
                "title selected from {} candidates: {:?} (score {})",
                candidates.len(),
                best.fragment.text,
                best.score
            );
            best.fragment.text.clone()
        }
        None => String::new(),
    }
}
