/*! Streaming passage segmentation.

[PassageGenerator] wraps an iterator of paragraph records and yields passage
records without materializing more than one group of units at a time, so
dump-sized inputs stream through in constant memory.

Units accumulate until the configured boundary is crossed, then the
accumulated group is flushed into one or more passages. A passage carries the
identity (pageid, revid, title, section) of the last paragraph consumed before
the flush, and passage ids are numbered sequentially from 1 across the whole
stream.
!*/
use std::collections::VecDeque;

use crate::error::Error;
use crate::records::{ParagraphRecord, PassageRecord};
use crate::sentences::SentenceSplit;

use super::{PassageBoundary, PassageConfig, PassageUnit};

/// Identity a passage inherits from the paragraph stream.
#[derive(Debug, Clone)]
struct Origin {
    pageid: u64,
    revid: u64,
    title: String,
    section: String,
}

impl Origin {
    fn of(paragraph: &ParagraphRecord) -> Self {
        Self {
            pageid: paragraph.pageid,
            revid: paragraph.revid,
            title: paragraph.title.clone(),
            section: paragraph.section.clone(),
        }
    }
}

/// A unit text with its character length, counted once at insertion.
#[derive(Debug)]
struct Unit {
    text: String,
    chars: usize,
}

/// The section unit lags one paragraph behind the stream: the buffer closes
/// when a paragraph of another section or title arrives.
fn closes_section(last: &Origin, paragraph: &ParagraphRecord) -> bool {
    paragraph.title != last.title || paragraph.section != last.section
}

/// Iterator adapter turning paragraph records into passage records.
pub struct PassageGenerator<I, S> {
    paragraphs: I,
    config: PassageConfig,
    splitter: S,
    /// Identity of the previous paragraph, `None` before the first one.
    last: Option<Origin>,
    /// Text accumulating for the current section, [PassageUnit::Section] only.
    section_text: String,
    /// Units accumulated since the last flush.
    units: Vec<Unit>,
    pending: VecDeque<PassageRecord>,
    passage_id: usize,
    done: bool,
}

impl<I, S> PassageGenerator<I, S>
where
    I: Iterator<Item = Result<ParagraphRecord, Error>>,
    S: SentenceSplit,
{
    /// Builds a generator over `paragraphs`.
    ///
    /// `splitter` is only consulted for [PassageUnit::Sentence].
    pub fn new(paragraphs: I, config: PassageConfig, splitter: S) -> Self {
        Self {
            paragraphs,
            config,
            splitter,
            last: None,
            section_text: String::new(),
            units: Vec::new(),
            pending: VecDeque::new(),
            passage_id: 0,
            done: false,
        }
    }

    /// Whether `paragraph` opens a new group relative to the previous one.
    ///
    /// The title is a boundary whatever the configuration says.
    fn starts_group(&self, last: &Origin, paragraph: &ParagraphRecord) -> bool {
        paragraph.title != last.title
            || self.config.boundary == PassageBoundary::Paragraph
            || (self.config.boundary == PassageBoundary::Section
                && paragraph.section != last.section)
    }

    /// Records `text` as a unit, unless it is empty or longer than the
    /// passage limit. Oversized units are dropped here so that packing can
    /// rely on every unit fitting on its own.
    fn push_unit(&mut self, text: String) {
        let chars = text.chars().count();
        if chars > 0 && chars <= self.config.max_passage_length {
            self.units.push(Unit { text, chars });
        }
    }

    /// Moves the accumulated section text into the unit list.
    fn fold_section(&mut self) {
        if !self.section_text.is_empty() {
            let text = std::mem::take(&mut self.section_text);
            self.push_unit(text);
        }
    }

    /// Turns the accumulated units into passages attributed to `origin`.
    fn flush(&mut self, origin: &Origin) {
        let units = std::mem::take(&mut self.units);

        if self.config.as_long_as_possible {
            let mut buffer = String::new();
            let mut buffer_chars = 0;
            for unit in units {
                assert!(
                    unit.chars <= self.config.max_passage_length,
                    "unit text exceeds the passage length limit"
                );
                if buffer_chars + unit.chars > self.config.max_passage_length {
                    self.emit(origin, std::mem::take(&mut buffer));
                    buffer_chars = 0;
                }
                buffer.push_str(&unit.text);
                buffer_chars += unit.chars;
            }
            if !buffer.is_empty() {
                self.emit(origin, buffer);
            }
        } else {
            for unit in units {
                self.emit(origin, unit.text);
            }
        }
    }

    fn emit(&mut self, origin: &Origin, text: String) {
        self.passage_id += 1;
        let text = if self.config.append_title {
            format!("{}{}{}", origin.title, self.config.title_separator, text)
        } else {
            text
        };

        self.pending.push_back(PassageRecord {
            id: self.passage_id,
            pageid: origin.pageid,
            revid: origin.revid,
            title: origin.title.clone(),
            section: origin.section.clone(),
            text,
        });
    }

    fn consume(&mut self, paragraph: ParagraphRecord) {
        if let Some(last) = self.last.take() {
            if self.config.unit == PassageUnit::Section && closes_section(&last, &paragraph) {
                self.fold_section();
            }
            if self.starts_group(&last, &paragraph) {
                self.flush(&last);
            }
        }

        let origin = Origin::of(&paragraph);
        match self.config.unit {
            PassageUnit::Section => self.section_text.push_str(&paragraph.text),
            PassageUnit::Paragraph => self.push_unit(paragraph.text),
            PassageUnit::Sentence => {
                for sentence in self.splitter.split(&paragraph.text) {
                    self.push_unit(sentence.to_string());
                }
            }
        }
        self.last = Some(origin);
    }

    /// Final flush once the input is exhausted. The trailing section buffer
    /// is folded in first, unless configured away.
    fn finish(&mut self) {
        if let Some(last) = self.last.take() {
            if self.config.unit == PassageUnit::Section && !self.config.drop_trailing_section {
                self.fold_section();
            }
            self.flush(&last);
        }
    }
}

impl<I, S> Iterator for PassageGenerator<I, S>
where
    I: Iterator<Item = Result<ParagraphRecord, Error>>,
    S: SentenceSplit,
{
    type Item = Result<PassageRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(passage) = self.pending.pop_front() {
                return Some(Ok(passage));
            }
            if self.done {
                return None;
            }

            match self.paragraphs.next() {
                Some(Ok(paragraph)) => self.consume(paragraph),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    self.finish();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentences::{PunctuationSplitter, SplitterKind};

    fn gen_paragraph(pageid: u64, title: &str, section: &str, text: &str) -> ParagraphRecord {
        ParagraphRecord {
            pageid,
            revid: pageid * 10,
            title: title.to_string(),
            section: section.to_string(),
            text: text.to_string(),
            html_tag: None,
        }
    }

    fn run(records: Vec<ParagraphRecord>, config: PassageConfig) -> Vec<PassageRecord> {
        PassageGenerator::new(records.into_iter().map(Ok), config, PunctuationSplitter)
            .collect::<Result<Vec<_>, Error>>()
            .unwrap()
    }

    #[test]
    fn test_one_passage_per_unit_without_packing() {
        let records = vec![
            gen_paragraph(1, "Apple", "__LEAD__", "Hello "),
            gen_paragraph(1, "Apple", "__LEAD__", "world."),
            gen_paragraph(2, "Banana", "__LEAD__", "Bye."),
        ];
        let passages = run(records, PassageConfig::default());

        assert_eq!(passages.len(), 3);
        assert_eq!(passages[0].text, "Hello ");
        assert_eq!(passages[1].text, "world.");
        assert_eq!(passages[2].text, "Bye.");
        assert_eq!(
            passages.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_packing_concatenates_units() {
        let records = vec![
            gen_paragraph(1, "Apple", "__LEAD__", "Hello "),
            gen_paragraph(1, "Apple", "__LEAD__", "world."),
            gen_paragraph(2, "Banana", "__LEAD__", "Bye."),
        ];
        let config = PassageConfig {
            as_long_as_possible: true,
            max_passage_length: 50,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "Hello world.");
        assert_eq!(passages[0].pageid, 1);
        assert_eq!(passages[1].text, "Bye.");
        assert_eq!(passages[1].pageid, 2);
    }

    #[test]
    fn test_packing_respects_length_limit() {
        let records = vec![
            gen_paragraph(1, "Apple", "__LEAD__", "aaaa"),
            gen_paragraph(1, "Apple", "__LEAD__", "bbbb"),
            gen_paragraph(1, "Apple", "__LEAD__", "cccc"),
        ];
        let config = PassageConfig {
            as_long_as_possible: true,
            max_passage_length: 9,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "aaaabbbb");
        assert_eq!(passages[1].text, "cccc");
    }

    #[test]
    fn test_section_boundary_splits_groups() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "a1. "),
            gen_paragraph(1, "Apple", "Lead", "a2."),
            gen_paragraph(1, "Apple", "History", "b1."),
            gen_paragraph(2, "Banana", "Lead", "c1."),
        ];
        let config = PassageConfig {
            as_long_as_possible: true,
            max_passage_length: 100,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 3);
        assert_eq!(passages[0].text, "a1. a2.");
        assert_eq!(passages[0].section, "Lead");
        assert_eq!(passages[1].text, "b1.");
        assert_eq!(passages[1].section, "History");
        assert_eq!(passages[2].title, "Banana");
    }

    #[test]
    fn test_paragraph_boundary_never_groups() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "a1."),
            gen_paragraph(1, "Apple", "Lead", "a2."),
        ];
        let config = PassageConfig {
            boundary: PassageBoundary::Paragraph,
            as_long_as_possible: true,
            max_passage_length: 100,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "a1.");
        assert_eq!(passages[1].text, "a2.");
    }

    #[test]
    fn test_title_boundary_groups_across_sections() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "x."),
            gen_paragraph(1, "Apple", "History", "y."),
        ];
        let config = PassageConfig {
            boundary: PassageBoundary::Title,
            as_long_as_possible: true,
            max_passage_length: 100,
            ..Default::default()
        };
        let passages = run(records, config);

        // the whole page packs into one passage attributed to the last
        // paragraph consumed before the flush
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "x.y.");
        assert_eq!(passages[0].section, "History");
    }

    #[test]
    fn test_section_unit_lags_one_paragraph() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "一。"),
            gen_paragraph(1, "Apple", "Lead", "二。"),
            gen_paragraph(1, "Apple", "History", "三。"),
        ];
        let config = PassageConfig {
            unit: PassageUnit::Section,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "一。二。");
        assert_eq!(passages[0].section, "Lead");
        assert_eq!(passages[1].text, "三。");
        assert_eq!(passages[1].section, "History");
    }

    #[test]
    fn test_section_unit_never_mixes_titles() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "a。"),
            gen_paragraph(1, "Apple", "History", "b。"),
            gen_paragraph(2, "Banana", "Lead", "c。"),
        ];
        let config = PassageConfig {
            unit: PassageUnit::Section,
            boundary: PassageBoundary::Title,
            as_long_as_possible: true,
            max_passage_length: 100,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].title, "Apple");
        assert_eq!(passages[0].text, "a。b。");
        assert_eq!(passages[1].title, "Banana");
        assert_eq!(passages[1].text, "c。");
    }

    #[test]
    fn test_trailing_section_is_folded() {
        let records = vec![gen_paragraph(1, "Apple", "Lead", "残る。")];
        let config = PassageConfig {
            unit: PassageUnit::Section,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "残る。");
    }

    #[test]
    fn test_trailing_section_dropped_with_compat_flag() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "a。"),
            gen_paragraph(1, "Apple", "History", "b。"),
        ];
        let config = PassageConfig {
            unit: PassageUnit::Section,
            drop_trailing_section: true,
            ..Default::default()
        };
        let passages = run(records, config);

        // the History buffer is still accumulating at end of input
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "a。");
    }

    #[test]
    fn test_title_prefix() {
        let records = vec![gen_paragraph(1, "りんご", "Lead", "果物である。")];
        let config = PassageConfig {
            append_title: true,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages[0].text, "りんご 果物である。");
    }

    #[test]
    fn test_title_prefix_custom_separator() {
        let records = vec![gen_paragraph(1, "りんご", "Lead", "果物である。")];
        let config = PassageConfig {
            append_title: true,
            title_separator: ": ".to_string(),
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages[0].text, "りんご: 果物である。");
    }

    #[test]
    fn test_title_prefix_not_counted_against_limit() {
        let records = vec![gen_paragraph(1, "とても長いタイトル", "Lead", "六文字です。")];
        let config = PassageConfig {
            append_title: true,
            max_passage_length: 6,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "とても長いタイトル 六文字です。");
    }

    #[test]
    fn test_title_prefix_once_per_packed_passage() {
        let records = vec![
            gen_paragraph(1, "りんご", "Lead", "一。"),
            gen_paragraph(1, "りんご", "Lead", "二。"),
        ];
        let config = PassageConfig {
            append_title: true,
            as_long_as_possible: true,
            max_passage_length: 100,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "りんご 一。二。");
    }

    #[test]
    fn test_oversized_unit_is_dropped() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", "abcdef"),
            gen_paragraph(1, "Apple", "History", "abc"),
        ];
        let config = PassageConfig {
            max_passage_length: 5,
            ..Default::default()
        };
        let passages = run(records, config);

        // the oversized unit neither appears nor consumes a passage id
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].id, 1);
        assert_eq!(passages[0].text, "abc");
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let records = vec![gen_paragraph(1, "Apple", "Lead", "あいうえお")];
        let config = PassageConfig {
            max_passage_length: 5,
            ..Default::default()
        };
        let passages = run(records, config);

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "あいうえお");
    }

    #[test]
    fn test_empty_paragraph_text_is_skipped() {
        let records = vec![
            gen_paragraph(1, "Apple", "Lead", ""),
            gen_paragraph(1, "Apple", "History", "abc."),
        ];
        let passages = run(records, PassageConfig::default());

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].id, 1);
        assert_eq!(passages[0].text, "abc.");
    }

    #[test]
    fn test_empty_input() {
        assert!(run(Vec::new(), PassageConfig::default()).is_empty());
    }

    #[test]
    fn test_sentence_unit_packs_sentences() {
        let records = vec![gen_paragraph(1, "Apple", "Lead", "短い。これは長い文です。")];
        let config = PassageConfig {
            unit: PassageUnit::Sentence,
            as_long_as_possible: true,
            max_passage_length: 10,
            ..Default::default()
        };
        let passages = PassageGenerator::new(
            records.into_iter().map(Ok),
            config,
            SplitterKind::Punctuation.build(),
        )
        .collect::<Result<Vec<_>, Error>>()
        .unwrap();

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].text, "短い。");
        assert_eq!(passages[1].text, "これは長い文です。");
    }

    #[test]
    fn test_upstream_error_terminates() {
        let records = vec![
            Ok(gen_paragraph(1, "Apple", "Lead", "a.")),
            Err(Error::Custom("malformed line".to_string())),
        ];
        let mut generator =
            PassageGenerator::new(records.into_iter(), PassageConfig::default(), PunctuationSplitter);

        assert!(matches!(generator.next(), Some(Err(_))));
        assert!(generator.next().is_none());
    }

    #[test]
    fn test_attribution_carries_pageid_and_revid() {
        let records = vec![
            gen_paragraph(7, "Apple", "Lead", "a."),
            gen_paragraph(9, "Banana", "Lead", "b."),
        ];
        let passages = run(records, PassageConfig::default());

        assert_eq!(passages[0].pageid, 7);
        assert_eq!(passages[0].revid, 70);
        assert_eq!(passages[1].pageid, 9);
        assert_eq!(passages[1].revid, 90);
    }
}
