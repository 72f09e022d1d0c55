/*! Sentence segmentation.

Corpus building and sentence-level passage generation both cut paragraph text
into sentences. Two strategies are available behind the [SentenceSplit] trait:
a punctuation-driven splitter tuned for Japanese Wikipedia text, and a splitter
backed by the Unicode sentence boundary rules.
!*/
use std::str::FromStr;

use crate::error::Error;

mod punctuation;
mod splitter;
mod unicode;

pub use punctuation::PunctuationSplitter;
pub use splitter::SentenceSplit;
pub use unicode::UnicodeSplitter;

/// Available sentence splitters, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterKind {
    Punctuation,
    Unicode,
}

impl SplitterKind {
    pub fn build(&self) -> Box<dyn SentenceSplit> {
        match self {
            SplitterKind::Punctuation => Box::new(PunctuationSplitter),
            SplitterKind::Unicode => Box::new(UnicodeSplitter),
        }
    }
}

impl FromStr for SplitterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "punctuation" => Ok(SplitterKind::Punctuation),
            "unicode" => Ok(SplitterKind::Unicode),
            other => Err(Error::UnknownSplitter(other.to_string())),
        }
    }
}
