//! Sentence corpus built from paragraph records.
//!
//! # Processing
//! 1. When a page id file is given, listed pages failing the [PageSelection]
//!    criteria are excluded. Pages absent from the file are never excluded.
//! 1. Paragraphs can be restricted to a set of source HTML tags.
//! 1. Each paragraph text is normalized, cut into sentences and
//!    length-filtered.
//! 1. Sentences are written one per line, with a blank line between pages.
use std::collections::HashSet;
use std::path::PathBuf;

use log::{info, warn};

use crate::cleaning;
use crate::error::Error;
use crate::filtering::{Filter, LengthBounds, PageSelection};
use crate::io::reader::{PageRecordReader, ParagraphReader};
use crate::io::writer::TextWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::sentences::SplitterKind;

pub struct CorpusFromParagraphs {
    src: PathBuf,
    dst: PathBuf,
    splitter: SplitterKind,
    /// Only keep paragraphs extracted from these HTML tags, `None` keeps all.
    html_tags: Option<Vec<String>>,
    bounds: LengthBounds,
    /// Page id file driving page exclusion, `None` disables it.
    pageids: Option<PathBuf>,
    selection: PageSelection,
}

impl CorpusFromParagraphs {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        splitter: SplitterKind,
        html_tags: Option<Vec<String>>,
        bounds: LengthBounds,
        pageids: Option<PathBuf>,
        selection: PageSelection,
    ) -> Self {
        Self {
            src,
            dst,
            splitter,
            html_tags,
            bounds,
            pageids,
            selection,
        }
    }

    /// Page ids barred from contributing sentences: the listed pages failing
    /// the selection criteria. Pages absent from the file are never excluded,
    /// so the set stays empty when no page id file was given.
    fn excluded_pageids(&self) -> Result<HashSet<u64>, Error> {
        let path = match &self.pageids {
            Some(path) => path,
            None => return Ok(HashSet::new()),
        };

        let mut excluded = HashSet::new();
        let mut listed = 0usize;
        for record in PageRecordReader::from_path(path)? {
            let record = record?;
            listed += 1;
            if !self.selection.detect(&record) {
                excluded.insert(record.pageid);
            }
        }
        if excluded.is_empty() {
            warn!("no listed page matches the exclusion criteria, {:?} has no effect", path);
        }
        info!("excluding {} of {} listed pages", excluded.len(), listed);

        Ok(excluded)
    }

    fn keeps_tag(&self, paragraph_tag: &Option<String>) -> bool {
        match &self.html_tags {
            Some(tags) => matches!(paragraph_tag, Some(tag) if tags.contains(tag)),
            None => true,
        }
    }
}

impl Pipeline<()> for CorpusFromParagraphs {
    fn run(&self) -> Result<(), Error> {
        let excluded = self.excluded_pageids()?;
        let splitter = self.splitter.build();
        let reader = ParagraphReader::from_path(&self.src)?;
        let mut writer = TextWriter::from_path(&self.dst)?;

        info!(
            "building corpus from {:?}, keeping sentences of {} to {} characters",
            self.src,
            self.bounds.min(),
            self.bounds.max()
        );

        let mut current_title: Option<String> = None;
        let mut page_has_sentences = false;
        let mut written = 0usize;

        for paragraph in reader {
            let paragraph = paragraph?;
            if excluded.contains(&paragraph.pageid) {
                continue;
            }
            if !self.keeps_tag(&paragraph.html_tag) {
                continue;
            }

            if current_title.as_deref() != Some(paragraph.title.as_str()) {
                // blank line between pages, only after pages that produced text
                if page_has_sentences {
                    writer.write_break()?;
                }
                current_title = Some(paragraph.title.clone());
                page_has_sentences = false;
            }

            let text = cleaning::normalize_text(&paragraph.text);
            for sentence in splitter.split(&text) {
                let sentence = sentence.trim();
                if sentence.is_empty() || !self.bounds.detect(sentence) {
                    continue;
                }
                writer.write_line(sentence)?;
                written += 1;
                page_has_sentences = true;
            }
        }

        writer.finish()?;
        info!("wrote {} sentences to {:?}", written, self.dst);

        Ok(())
    }
}
