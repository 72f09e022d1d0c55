//! Sentence corpus built from a cirrussearch dump.
//!
//! The search index stores a plain-text rendition of every page, so no
//! HTML processing is needed. The text still carries search-specific
//! artifacts (references, template remains, navigation breadcrumbs), which
//! [cleaning::scrub_cirrus_text] strips before sentence splitting.
use std::path::PathBuf;

use log::info;

use crate::cleaning;
use crate::error::Error;
use crate::filtering::{Filter, LengthBounds, MathFormula, PageSelection};
use crate::io::reader::CirrusReader;
use crate::io::writer::TextWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::sentences::SplitterKind;

pub struct CorpusFromCirrus {
    src: PathBuf,
    dst: PathBuf,
    splitter: SplitterKind,
    bounds: LengthBounds,
    selection: PageSelection,
}

impl CorpusFromCirrus {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        splitter: SplitterKind,
        bounds: LengthBounds,
        selection: PageSelection,
    ) -> Self {
        Self {
            src,
            dst,
            splitter,
            bounds,
            selection,
        }
    }
}

impl Pipeline<()> for CorpusFromCirrus {
    fn run(&self) -> Result<(), Error> {
        let splitter = self.splitter.build();
        let math = MathFormula;
        let reader = CirrusReader::from_path(&self.src)?;
        let mut writer = TextWriter::from_path(&self.dst)?;

        info!(
            "building corpus from {:?}, keeping sentences of {} to {} characters",
            self.src,
            self.bounds.min(),
            self.bounds.max()
        );

        let mut pages = 0usize;
        let mut written = 0usize;
        for entry in reader {
            let (_pageid, doc) = entry?;
            if !self.selection.detect(&doc) {
                continue;
            }

            let text = cleaning::scrub_cirrus_text(&doc.text, &doc.title);
            let mut page_has_sentences = false;
            for sentence in splitter.split(&text) {
                let sentence = sentence.trim();
                if sentence.is_empty()
                    || !self.bounds.detect(sentence)
                    || !math.detect(sentence)
                {
                    continue;
                }
                writer.write_line(sentence)?;
                written += 1;
                page_has_sentences = true;
            }
            // blank line after every page that produced text
            if page_has_sentences {
                writer.write_break()?;
                pages += 1;
            }
        }

        writer.finish()?;
        info!("wrote {} sentences from {} pages to {:?}", written, pages, self.dst);

        Ok(())
    }
}
