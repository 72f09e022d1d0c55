//! Passage generation pipeline.
//!
//! Reads paragraph records, re-chunks them through
//! [crate::passages::PassageGenerator] and writes passage records, one JSON
//! object per line. Input order is preserved and passage ids are sequential
//! from 1, so reruns over the same input are reproducible.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::reader::ParagraphReader;
use crate::io::writer::JsonWriter;
use crate::passages::{PassageConfig, PassageGenerator};
use crate::pipelines::pipeline::Pipeline;
use crate::sentences::SplitterKind;

pub struct PassagesFromParagraphs {
    src: PathBuf,
    dst: PathBuf,
    config: PassageConfig,
    splitter: SplitterKind,
}

impl PassagesFromParagraphs {
    pub fn new(src: PathBuf, dst: PathBuf, config: PassageConfig, splitter: SplitterKind) -> Self {
        Self {
            src,
            dst,
            config,
            splitter,
        }
    }
}

impl Pipeline<()> for PassagesFromParagraphs {
    fn run(&self) -> Result<(), Error> {
        let reader = ParagraphReader::from_path(&self.src)?;
        let mut writer = JsonWriter::from_path(&self.dst)?;
        let generator =
            PassageGenerator::new(reader, self.config.clone(), self.splitter.build());

        info!("generating passages from {:?}", self.src);

        let mut count = 0usize;
        for passage in generator {
            writer.write(&passage?)?;
            count += 1;
        }
        writer.finish()?;

        info!("wrote {} passages to {:?}", count, self.dst);

        Ok(())
    }
}
