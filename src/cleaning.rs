/*! Text normalization and markup scrubbing.

Corpus building runs every paragraph through [normalize_text]: NFKC
normalization, removal of non-printable characters and whitespace squeezing.
Cirrussearch page text additionally goes through [scrub_cirrus_text], which
strips the reference marks, template remains and navigation breadcrumbs that
the search index keeps in its plain-text rendition.
!*/
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unic_ucd::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Bracketed reference marks such as `[1]`.
    static ref REFERENCE: Regex = Regex::new(r"\[\d+?\]").unwrap();
    /// Bracketed editorial marks starting with 要, such as `[要出典]`.
    static ref EDITORIAL: Regex = Regex::new(r"\[要.+?\]").unwrap();
    /// Unexpanded template remains, `{{...}}`.
    static ref TEMPLATE: Regex = Regex::new(r"\{\{+[^{}]+?\}\}+").unwrap();
    /// Footnote blocks rendered as ` ^ ...` up to the end of the text.
    static ref FOOTNOTES: Regex = Regex::new(r" \^ .+").unwrap();
    /// Other bracketed annotations: `[要出典]`, `[リンク切れ]`, `[誰?]` and the like.
    static ref ANNOTATION: Regex = Regex::new(r"\[(要出典|リンク切れ|.+?\?)\]").unwrap();
}

/// Whether `c` survives normalization.
///
/// Characters of the Unicode `Other` and `Separator` categories are dropped,
/// with the ASCII space as the single exception.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }

    !matches!(
        GeneralCategory::of(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// NFKC-normalizes `text`, drops non-printable characters and squeezes
/// whitespace runs into single spaces.
pub fn normalize_text(text: &str) -> String {
    let normalized: String = text.nfkc().filter(|c| is_printable(*c)).collect();
    normalized.split_whitespace().join(" ")
}

/// Strips the leading navigation breadcrumb (`... > title`) if present.
///
/// The breadcrumb always precedes the first occurrence of `" > "` followed by
/// the page title, so a plain substring search is enough.
fn strip_navigation(text: &str, title: &str) -> Option<usize> {
    let marker = format!(" > {}", title);
    text.find(&marker)
        .filter(|&pos| pos >= 1)
        .map(|pos| pos + marker.len())
}

/// Cleans the plain-text rendition of a cirrussearch page.
///
/// Applies [normalize_text]'s character-level steps, then removes reference
/// marks, template remains, the navigation breadcrumb of `title` and trailing
/// footnote blocks.
pub fn scrub_cirrus_text(text: &str, title: &str) -> String {
    let text: String = text.nfkc().filter(|c| is_printable(*c)).collect();
    let text = REFERENCE.replace_all(&text, "");
    let text = EDITORIAL.replace_all(&text, "");
    let text = TEMPLATE.replace_all(&text, "");
    let text = match strip_navigation(&text, title) {
        Some(end) => &text[end..],
        None => &text[..],
    };
    let text = FOOTNOTES.replace_all(text, "");
    let text = ANNOTATION.replace_all(&text, "");

    text.split_whitespace().join(" ")
}
