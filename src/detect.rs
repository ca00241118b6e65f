//! Document language detection.
//!
//! The pipeline builds a short text sample from the first pages, cleans it,
//! and hands it to a [`LanguageIdentifier`]. Identification never fails the
//! extraction: short samples and identifier errors fall back to a default
//! code.

use regex::Regex;
use whatlang::Lang;

use crate::error::{Error, Result};
use crate::model::Document;

/// Number of leading pages sampled.
pub const SAMPLE_PAGES: usize = 3;

/// Characters taken from each sampled page.
pub const PAGE_SAMPLE_CHARS: usize = 1000;

/// Upper bound on the raw sample length.
pub const MAX_SAMPLE_CHARS: usize = 2000;

/// Cleaned samples must be longer than this to be identified.
pub const MIN_SAMPLE_CHARS: usize = 50;

/// Something that maps a text sample to a two-letter language code.
pub trait LanguageIdentifier: Send + Sync {
    /// Identify the language of `sample`.
    fn identify(&self, sample: &str) -> Result<String>;
}

impl<F> LanguageIdentifier for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn identify(&self, sample: &str) -> Result<String> {
        self(sample)
    }
}

/// Statistical identifier backed by `whatlang` trigram models.
///
/// Results are reported as ISO 639-1 codes. Languages `whatlang` knows but
/// that have no two-letter code are reported as errors, so the caller falls
/// back to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangIdentifier;

impl WhatlangIdentifier {
    /// Create a new identifier.
    pub fn new() -> Self {
        Self
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, sample: &str) -> Result<String> {
        let info = whatlang::detect(sample)
            .ok_or_else(|| Error::LanguageDetection("no language recognized".into()))?;
        let lang = info.lang();
        iso_639_1(lang).map(str::to_string).ok_or_else(|| {
            Error::LanguageDetection(format!("no two-letter code for {}", lang.code()))
        })
    }
}

/// Two-letter code for a `whatlang` language.
fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Afr => "af",
        Lang::Aka => "ak",
        Lang::Amh => "am",
        Lang::Ara => "ar",
        Lang::Aze => "az",
        Lang::Bel => "be",
        Lang::Ben => "bn",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Cmn => "zh",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Epo => "eo",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Hye => "hy",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jav => "jv",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kat => "ka",
        Lang::Khm => "km",
        Lang::Kor => "ko",
        Lang::Lat => "la",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Mkd => "mk",
        Lang::Mya => "my",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "no",
        Lang::Ori => "or",
        Lang::Pan => "pa",
        Lang::Pes => "fa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Sin => "si",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Sna => "sn",
        Lang::Spa => "es",
        Lang::Srp => "sr",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tgl => "tl",
        Lang::Tha => "th",
        Lang::Tuk => "tk",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Uzb => "uz",
        Lang::Vie => "vi",
        Lang::Yid => "yi",
        Lang::Zul => "zu",
        #[allow(unreachable_patterns)]
        _ => return None,
    };
    Some(code)
}

/// Strips punctuation and collapses whitespace in language samples.
#[derive(Debug, Clone)]
pub struct SampleCleaner {
    punctuation: Regex,
    whitespace: Regex,
}

impl SampleCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self {
            punctuation: Regex::new(r"[^\w\s]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Replace punctuation with spaces, collapse whitespace, trim.
    pub fn clean(&self, text: &str) -> String {
        let text = self.punctuation.replace_all(text, " ");
        self.whitespace.replace_all(&text, " ").trim().to_string()
    }
}

impl Default for SampleCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the raw language sample from the first pages of a document.
pub fn language_sample(doc: &Document) -> String {
    let mut sample = String::new();
    let mut len = 0;

    for page in doc.pages.iter().take(SAMPLE_PAGES) {
        let text = page.plain_text();
        let head: String = text.chars().take(PAGE_SAMPLE_CHARS).collect();
        len += head.chars().count();
        sample.push_str(&head);
        if len > MAX_SAMPLE_CHARS {
            break;
        }
    }

    if len > MAX_SAMPLE_CHARS {
        sample = sample.chars().take(MAX_SAMPLE_CHARS).collect();
    }
    sample
}

/// Detect the language of a document, falling back to `default` on short
/// samples or identifier errors.
pub fn detect_language(doc: &Document, identifier: &dyn LanguageIdentifier, default: &str) -> String {
    let cleaned = SampleCleaner::new().clean(&language_sample(doc));
    let len = cleaned.chars().count();

    if len <= MIN_SAMPLE_CHARS {
        log::debug!(
            "language sample has {} chars, using default {:?}",
            len,
            default
        );
        return default.to_string();
    }

    match identifier.identify(&cleaned) {
        Ok(code) => {
            log::debug!("detected language {:?}", code);
            code
        }
        Err(err) => {
            log::warn!("language detection failed, using {:?}: {}", default, err);
            default.to_string()
        }
    }
}
