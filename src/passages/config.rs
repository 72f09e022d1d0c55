//! Passage segmentation parameters.
use std::str::FromStr;

use crate::error::Error;

/// Granularity of the texts packed into passages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageUnit {
    /// Concatenation of all paragraph texts of a section.
    Section,
    /// One paragraph text.
    Paragraph,
    /// One sentence, as cut by the configured splitter.
    Sentence,
}

impl FromStr for PassageUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "section" => Ok(Self::Section),
            "paragraph" => Ok(Self::Paragraph),
            "sentence" => Ok(Self::Sentence),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// Granularity at which accumulated units are flushed into passages.
///
/// A change of page title always flushes, whatever the setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageBoundary {
    /// Flush on title change only: passages may span sections.
    Title,
    /// Flush on section (or title) change.
    Section,
    /// Flush on every paragraph.
    Paragraph,
}

impl FromStr for PassageBoundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "section" => Ok(Self::Section),
            "paragraph" => Ok(Self::Paragraph),
            other => Err(Error::UnknownBoundary(other.to_string())),
        }
    }
}

/// Parameters of a [super::PassageGenerator].
#[derive(Debug, Clone)]
pub struct PassageConfig {
    pub unit: PassageUnit,
    pub boundary: PassageBoundary,
    /// Prefix every passage text with its page title.
    pub append_title: bool,
    /// Separator between the title prefix and the passage text.
    pub title_separator: String,
    /// Maximum passage length in characters. The title prefix and its
    /// separator are not counted against the limit.
    pub max_passage_length: usize,
    /// Greedily pack consecutive units into each passage instead of
    /// emitting one passage per unit.
    pub as_long_as_possible: bool,
    /// Discard the section text still accumulating when the input ends,
    /// reproducing the historical behavior of earlier dataset releases.
    /// Only meaningful with [PassageUnit::Section].
    pub drop_trailing_section: bool,
}

impl Default for PassageConfig {
    fn default() -> Self {
        Self {
            unit: PassageUnit::Paragraph,
            boundary: PassageBoundary::Section,
            append_title: false,
            title_separator: " ".to_string(),
            max_passage_length: 1000,
            as_long_as_possible: false,
            drop_trailing_section: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!(PassageUnit::from_str("section").unwrap(), PassageUnit::Section);
        assert_eq!(
            PassageUnit::from_str("paragraph").unwrap(),
            PassageUnit::Paragraph
        );
        assert_eq!(
            PassageUnit::from_str("sentence").unwrap(),
            PassageUnit::Sentence
        );
        assert!(PassageUnit::from_str("page").is_err());
    }

    #[test]
    fn test_boundary_from_str() {
        assert_eq!(
            PassageBoundary::from_str("title").unwrap(),
            PassageBoundary::Title
        );
        assert_eq!(
            PassageBoundary::from_str("section").unwrap(),
            PassageBoundary::Section
        );
        assert_eq!(
            PassageBoundary::from_str("paragraph").unwrap(),
            PassageBoundary::Paragraph
        );
        assert!(PassageBoundary::from_str("sentence").is_err());
    }
}
