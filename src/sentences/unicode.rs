//! Sentence splitting through the Unicode segmentation rules.
use unicode_segmentation::UnicodeSegmentation;

use super::splitter::SentenceSplit;

/// Splitter backed by the UAX #29 sentence boundary rules.
///
/// More conservative than [super::PunctuationSplitter] on Japanese quotation
/// patterns, but language independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSplitter;

impl SentenceSplit for UnicodeSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds().collect()
    }
}
