//! Page id extraction from a cirrussearch dump.
//!
//! Produces one [PageRecord] per page: id, revision, incoming link count and
//! the content markers derived from template membership. The resulting file
//! feeds the page exclusion of [super::CorpusFromParagraphs] and the id set
//! of [super::FilterByPageIds].
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::reader::CirrusReader;
use crate::io::writer::JsonWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::records::PageRecord;

pub struct PageIdsFromCirrus {
    src: PathBuf,
    dst: PathBuf,
}

impl PageIdsFromCirrus {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }
}

impl Pipeline<()> for PageIdsFromCirrus {
    fn run(&self) -> Result<(), Error> {
        let reader = CirrusReader::from_path(&self.src)?;
        let mut writer = JsonWriter::from_path(&self.dst)?;

        info!("collecting page ids from {:?}", self.src);

        let mut count = 0usize;
        for entry in reader {
            let (pageid, doc) = entry?;
            let revid = doc
                .version
                .ok_or_else(|| Error::Custom(format!("page {} carries no version", pageid)))?;
            let is_disambiguation_page = doc.is_disambiguation();
            let is_sexual_page = doc.is_sexual();
            let is_violent_page = doc.is_violent();

            writer.write(&PageRecord {
                title: doc.title,
                pageid,
                revid,
                num_inlinks: doc.incoming_links,
                is_disambiguation_page,
                is_sexual_page,
                is_violent_page,
            })?;
            count += 1;
        }

        writer.finish()?;
        info!("wrote {} page records to {:?}", count, self.dst);

        Ok(())
    }
}
