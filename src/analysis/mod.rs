//! Classification engine: font statistics, title selection and heading
//! detection.

mod font_stats;
mod heading;
mod options;
mod title;

pub use font_stats::{FontSizeDistribution, FontStatistics, HEADING_TIER_MARGIN};
pub use heading::{
    assign_level, has_vertical_space, is_heading_candidate, is_numeric_only, CandidacySignals,
    HeadingClassifier, LARGE_TEXT_MARGIN, MAX_HEADING_WORDS, MIN_VERTICAL_GAP, TIER_TOLERANCE,
};
pub use options::{
    ErrorMode, LengthBounds, LengthBoundsTable, OutlineOptions, DEFAULT_LANGUAGE,
    DEFAULT_LENGTH_BOUNDS,
};
pub use title::{
    best_candidate, is_title_eligible, select_title, title_candidates, title_score,
    TitleCandidate, TITLE_MAX_CHARS, TITLE_MIN_FONT_SIZE, TITLE_TOP_AREA, TITLE_UPPER_AREA,
    TITLE_WORD_RANGE,
};
