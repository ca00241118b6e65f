//! Outline extraction pipeline.
//!
//! One call to [`OutlineExtractor::extract`] runs the whole classification for
//! a single document: fragment ingestion, language detection, title
//! selection, font statistics, heading classification and assembly. The
//! extractor holds no per-document state, so one instance can serve any
//! number of documents, including from several threads.

use std::time::{Duration, Instant};

use crate::analysis::{
    select_title, ErrorMode, FontStatistics, HeadingClassifier, OutlineOptions,
};
use crate::detect::{detect_language, LanguageIdentifier, WhatlangIdentifier};
use crate::error::{Error, Result};
use crate::model::{sort_by_top, Document, Heading, Outline, OutlineMetadata, TextFragment};

/// Extracts a title and heading outline from decoded documents.
pub struct OutlineExtractor {
    options: OutlineOptions,
    identifier: Box<dyn LanguageIdentifier>,
}

impl OutlineExtractor {
    /// Create an extractor with default options and the `whatlang` identifier.
    pub fn new() -> Self {
        Self::with_options(OutlineOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: OutlineOptions) -> Self {
        Self {
            options,
            identifier: Box::new(WhatlangIdentifier::new()),
        }
    }

    /// Replace the language identifier.
    pub fn with_identifier(mut self, identifier: impl LanguageIdentifier + 'static) -> Self {
        self.identifier = Box::new(identifier);
        self
    }

    /// Get the extraction options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Extract the outline of a document.
    ///
    /// Fails only on malformed fragments in strict mode.
    pub fn extract(&self, doc: &Document) -> Result<Outline> {
        let timer = ExtractionTimer::start(doc.page_count());

        let pages = self.ingest(doc)?;
        let language = self.language(doc);

        let title = match (doc.pages.first(), pages.first()) {
            (Some(first), Some(fragments)) => select_title(first, fragments.iter().copied()),
            _ => String::new(),
        };

        let stats = FontStatistics::from_fragments(pages.iter().flatten().copied());
        let bounds = self.options.length_bounds.for_language(&language);
        let classifier = HeadingClassifier::new(&stats, bounds);

        let mut headings = Vec::new();
        for mut fragments in pages {
            sort_by_top(&mut fragments);
            headings.extend(classifier.classify_page(&fragments));
        }

        Ok(assemble(
            title,
            headings,
            language,
            doc.page_count(),
            timer.elapsed(),
        ))
    }

    /// Collect each page's usable fragments, dropping empty ones and
    /// rejecting or skipping malformed ones per the error mode.
    fn ingest<'d>(&self, doc: &'d Document) -> Result<Vec<Vec<&'d TextFragment>>> {
        let mut pages = Vec::with_capacity(doc.pages.len());

        for page in &doc.pages {
            let mut kept = Vec::with_capacity(page.fragments.len());
            for fragment in page.fragments.iter().filter(|f| !f.is_empty()) {
                match (fragment.defect(), self.options.error_mode) {
                    (None, _) => kept.push(fragment),
                    (Some(reason), ErrorMode::Strict) => {
                        return Err(Error::malformed(page.number, reason));
                    }
                    (Some(reason), ErrorMode::Lenient) => {
                        log::warn!(
                            "skipping fragment {:?} on page {}: {}",
                            fragment.text,
                            page.number,
                            reason
                        );
                    }
                }
            }
            pages.push(kept);
        }

        Ok(pages)
    }

    fn language(&self, doc: &Document) -> String {
        if !self.options.detect_language {
            return self.options.default_language.clone();
        }
        detect_language(doc, self.identifier.as_ref(), &self.options.default_language)
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Combine the pieces of one extraction into an [`Outline`].
pub fn assemble(
    title: String,
    headings: Vec<Heading>,
    detected_language: String,
    total_pages: u32,
    elapsed: Duration,
) -> Outline {
    let total_headings = headings.len() as u32;
    Outline {
        title,
        headings,
        metadata: OutlineMetadata {
            processing_time_seconds: elapsed.as_secs_f64(),
            detected_language,
            total_pages,
            total_headings,
        },
    }
}

/// Measures one extraction. Logs on drop, so every exit path is covered.
struct ExtractionTimer {
    started: Instant,
    pages: u32,
}

impl ExtractionTimer {
    fn start(pages: u32) -> Self {
        log::debug!("outline extraction started ({} pages)", pages);
        Self {
            started: Instant::now(),
            pages,
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ExtractionTimer {
    fn drop(&mut self) {
        log::debug!(
            "outline extraction finished ({} pages) in {:.3}s",
            self.pages,
            self.started.elapsed().as_secs_f64()
        );
    }
}
