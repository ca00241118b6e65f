//! Integration tests for outline extraction.

use pdfoutline::error::Result;
use pdfoutline::{
    extract_outline, BoundingBox, Document, HeadingLevel, LengthBounds, OutlineExtractor,
    OutlineOptions, Page, TextFragment,
};

const BODY_FONT: &str = "TimesNewRomanPSMT";
const BOLD_FONT: &str = "TimesNewRomanPS-BoldMT";

fn fragment(text: &str, size: f32, font: &str, y0: f32, page: u32) -> TextFragment {
    TextFragment::new(
        text,
        size,
        font,
        BoundingBox::new(72.0, y0, 540.0, y0 + size),
        page,
    )
}

/// Add `count` tightly packed body lines starting at `y0`.
fn add_body_lines(page: &mut Page, count: usize, y0: f32) {
    for i in 0..count {
        let y = y0 + i as f32 * 11.0;
        page.add_fragment(fragment(
            "The survey covered every branch office",
            10.0,
            BODY_FONT,
            y,
            page.number,
        ));
    }
}

#[test]
fn test_scenario_a_title() {
    let mut page = Page::new(1, 612.0, 800.0);
    // 10% of the page height
    page.add_fragment(fragment("Project Report", 24.0, BOLD_FONT, 80.0, 1));
    add_body_lines(&mut page, 20, 200.0);

    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.title, "Project Report");
}

#[test]
fn test_scenario_b_heading_on_second_page() {
    let mut first = Page::letter(1);
    add_body_lines(&mut first, 60, 40.0);

    let mut second = Page::letter(2);
    add_body_lines(&mut second, 10, 40.0); // last line ends at 149
    second.add_fragment(fragment("Introduction", 14.0, BOLD_FONT, 160.0, 2));
    add_body_lines(&mut second, 430, 180.0);

    let mut doc = Document::new();
    doc.add_page(first);
    doc.add_page(second);

    let stats = pdfoutline::FontStatistics::from_fragments(doc.fragments());
    assert_eq!(stats.body_size, 10.0);
    assert_eq!(stats.heading_sizes, vec![14.0]);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.headings.len(), 1);
    let heading = &outline.headings[0];
    assert_eq!(heading.text, "Introduction");
    assert_eq!(heading.level, HeadingLevel::H1);
    assert_eq!(heading.page, 2);
    assert!(heading.is_bold);
    assert_eq!(outline.metadata.total_pages, 2);
    assert_eq!(outline.metadata.total_headings, 1);
    assert_eq!(outline.metadata.detected_language, "en");
}

#[test]
fn test_scenario_c_short_sample_defaults_language() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("Short text, only thirty chars!", 10.0, BODY_FONT, 100.0, 1));
    let mut doc = Document::new();
    doc.add_page(page);

    let extractor =
        OutlineExtractor::new().with_identifier(|_: &str| -> Result<String> { Ok("fr".into()) });
    let outline = extractor.extract(&doc).unwrap();
    assert_eq!(outline.metadata.detected_language, "en");
}

#[test]
fn test_scenario_d_numeric_fragment_rejected() {
    let mut page = Page::letter(1);
    add_body_lines(&mut page, 10, 40.0);
    page.add_fragment(fragment("12.5", 18.0, BOLD_FONT, 200.0, 1));
    add_body_lines(&mut page, 10, 240.0);
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert!(outline.headings.is_empty());
}

#[test]
fn test_uniform_size_yields_bold_h3_only() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("Plain Opening Line", 11.0, BODY_FONT, 40.0, 1));
    page.add_fragment(fragment("Bold Section Name", 11.0, BOLD_FONT, 100.0, 1));
    page.add_fragment(fragment("Another plain line", 11.0, BODY_FONT, 160.0, 1));
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.headings.len(), 1);
    assert_eq!(outline.headings[0].text, "Bold Section Name");
    assert_eq!(outline.headings[0].level, HeadingLevel::H3);
    assert!(outline.headings.iter().all(|h| h.is_bold));
}

#[test]
fn test_crowded_heading_fails_spacing() {
    let mut page = Page::letter(1);
    add_body_lines(&mut page, 10, 40.0); // last line ends at 149
    page.add_fragment(fragment("Tight Heading", 20.0, BOLD_FONT, 151.0, 1));
    add_body_lines(&mut page, 10, 300.0);
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert!(outline.headings.is_empty());
}

#[test]
fn test_levels_follow_tiers() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("Part One", 24.0, BODY_FONT, 40.0, 1));
    add_body_lines(&mut page, 5, 80.0);
    page.add_fragment(fragment("Chapter Heading", 18.0, BODY_FONT, 160.0, 1));
    add_body_lines(&mut page, 5, 200.0);
    page.add_fragment(fragment("Section Heading", 14.0, BODY_FONT, 280.0, 1));
    add_body_lines(&mut page, 5, 320.0);
    page.add_fragment(fragment("Run-in Heading", 10.0, BOLD_FONT, 400.0, 1));
    add_body_lines(&mut page, 5, 440.0);
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    let levels: Vec<(&str, HeadingLevel)> = outline
        .headings
        .iter()
        .map(|h| (h.text.as_str(), h.level))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("Part One", HeadingLevel::H1),
            ("Chapter Heading", HeadingLevel::H2),
            ("Section Heading", HeadingLevel::H3),
            ("Run-in Heading", HeadingLevel::H4),
        ]
    );
}

#[test]
fn test_headings_ordered_by_page_then_position() {
    let mut doc = Document::new();
    for n in 1..=3 {
        let mut page = Page::letter(n);
        add_body_lines(&mut page, 8, 300.0);
        page.add_fragment(fragment(&format!("Lower Heading {}", n), 16.0, BODY_FONT, 500.0, n));
        page.add_fragment(fragment(&format!("Upper Heading {}", n), 16.0, BODY_FONT, 100.0, n));
        doc.add_page(page);
    }

    let outline = extract_outline(&doc).unwrap();
    let texts: Vec<&str> = outline.headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Upper Heading 1",
            "Lower Heading 1",
            "Upper Heading 2",
            "Lower Heading 2",
            "Upper Heading 3",
            "Lower Heading 3",
        ]
    );
    assert_eq!(outline.metadata.total_headings, 6);
}

#[test]
fn test_cjk_language_relaxes_length_bounds() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("概要", 16.0, "MS-Gothic", 40.0, 1));
    for i in 0..6 {
        page.add_fragment(fragment(
            "これは本文の段落です。日本語の文書として検出されるべきです。",
            10.0,
            "MS-Mincho",
            100.0 + i as f32 * 11.0,
            1,
        ));
    }
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.metadata.detected_language, "ja");
    assert_eq!(outline.headings.len(), 1);
    assert_eq!(outline.headings[0].text, "概要");

    // Same document forced to English bounds loses the two-character heading
    let options = OutlineOptions::new().with_language_detection(false);
    let outline = OutlineExtractor::with_options(options).extract(&doc).unwrap();
    assert!(outline.headings.is_empty());
}

#[test]
fn test_custom_length_bounds() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("Ab", 16.0, BODY_FONT, 40.0, 1));
    add_body_lines(&mut page, 5, 100.0);
    let mut doc = Document::new();
    doc.add_page(page);

    let options = OutlineOptions::new()
        .with_language_detection(false)
        .with_default_language("xx")
        .with_length_bounds("xx", LengthBounds::new(2, 10));
    let outline = OutlineExtractor::with_options(options).extract(&doc).unwrap();
    assert_eq!(outline.headings.len(), 1);
    assert_eq!(outline.metadata.detected_language, "xx");
}

#[test]
fn test_extractor_is_reusable_across_documents() {
    let extractor = OutlineExtractor::new();

    let mut with_heading = Document::new();
    let mut page = Page::letter(1);
    add_body_lines(&mut page, 5, 100.0);
    page.add_fragment(fragment("Findings Overview", 16.0, BODY_FONT, 300.0, 1));
    with_heading.add_page(page);

    let mut plain = Document::new();
    let mut page = Page::letter(1);
    add_body_lines(&mut page, 5, 100.0);
    plain.add_page(page);

    assert_eq!(extractor.extract(&with_heading).unwrap().headings.len(), 1);
    assert!(extractor.extract(&plain).unwrap().headings.is_empty());
    assert_eq!(extractor.extract(&with_heading).unwrap().headings.len(), 1);
}

#[test]
fn test_latin_script_language_detected() {
    let mut page = Page::letter(1);
    page.add_fragment(fragment("Rapport Annuel", 20.0, BOLD_FONT, 40.0, 1));
    for i in 0..8 {
        page.add_fragment(fragment(
            "Le conseil a examiné les comptes de l'exercice et approuvé le budget",
            10.0,
            BODY_FONT,
            100.0 + i as f32 * 11.0,
            1,
        ));
    }
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    assert_eq!(outline.metadata.detected_language, "fr");
    assert_eq!(outline.title, "Rapport Annuel");
}
