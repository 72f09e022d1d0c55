//! Sentence splitting trait.
use std::fmt::Debug;

/// Sentence segmentation over a single paragraph of text.
///
/// Implementations return consecutive substrings of the input:
/// concatenating the returned slices in order yields the input back,
/// so no text is ever lost to segmentation.
pub trait SentenceSplit: Debug {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<S: SentenceSplit + ?Sized> SentenceSplit for Box<S> {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).split(text)
    }
}
