//! Filters a JSONL file by page id.
//!
//! Keeps the lines whose `pageid` field appears in a page id file, passing
//! them through byte-for-byte. Works on any record shape carrying a `pageid`
//! field, paragraph and passage files included.
use std::collections::HashSet;
use std::io::BufRead;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::io::reader::{self, JsonReader};
use crate::io::writer::TextWriter;
use crate::pipelines::pipeline::Pipeline;

/// The single field looked at on each line.
#[derive(Debug, Deserialize)]
struct PageIdField {
    pageid: u64,
}

pub struct FilterByPageIds {
    src: PathBuf,
    pageids: PathBuf,
    dst: PathBuf,
}

impl FilterByPageIds {
    pub fn new(src: PathBuf, pageids: PathBuf, dst: PathBuf) -> Self {
        Self { src, pageids, dst }
    }
}

impl Pipeline<()> for FilterByPageIds {
    fn run(&self) -> Result<(), Error> {
        let mut keep = HashSet::new();
        for record in JsonReader::<PageIdField, _>::from_path(&self.pageids)? {
            keep.insert(record?.pageid);
        }
        info!("loaded {} page ids from {:?}", keep.len(), self.pageids);

        let lines = reader::open_maybe_gzip(&self.src)?.lines();
        let mut writer = TextWriter::from_path(&self.dst)?;

        let mut written = 0usize;
        let mut skipped = 0usize;
        for line in lines {
            let line = line?;
            let item: PageIdField = serde_json::from_str(&line)?;
            if !keep.contains(&item.pageid) {
                skipped += 1;
                continue;
            }
            writer.write_line(&line)?;
            written += 1;
        }

        writer.finish()?;
        info!("wrote {} items, skipped {}", written, skipped);

        Ok(())
    }
}
