//! # wikicorpus
//!
//! wikicorpus turns Wikipedia dumps into text corpora: plain-text sentence
//! files for language model training and passage files for retrieval systems.
//!
//! It consumes two kinds of dumps: paragraph files extracted from the HTML
//! dumps, and cirrussearch dumps carrying the plain-text rendition of every
//! page. All inputs and outputs are `.gz` aware.
//!
//! ## Getting started
//!
//! ```sh
//! wikicorpus 1.0.0
//! corpus and passage generation for Wikipedia dumps.
//!
//! USAGE:
//!     wikicorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     corpus-from-cirrus        Build a sentence corpus from a cirrussearch dump
//!     corpus-from-paragraphs    Build a sentence corpus from a paragraphs file
//!     filter-by-pageids         Keep the lines of a JSONL file whose pageid is listed
//!     help                      Prints this message or the help of the given subcommand(s)
//!     pageids-from-cirrus       Extract page ids and content markers from a cirrussearch dump
//!     passages                  Generate passages from a paragraphs file
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use wikicorpus::cli;
use wikicorpus::error::Error;
use wikicorpus::filtering::{LengthBounds, PageSelection};
use wikicorpus::passages::PassageConfig;
use wikicorpus::pipelines::{
    CorpusFromCirrus, CorpusFromParagraphs, FilterByPageIds, PageIdsFromCirrus,
    PassagesFromParagraphs, Pipeline,
};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::WikiCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::WikiCorpus::Passages(p) => {
            let config = PassageConfig {
                unit: p.unit,
                boundary: p.boundary,
                append_title: p.append_title,
                title_separator: p.title_separator,
                max_passage_length: p.max_passage_length,
                as_long_as_possible: p.as_long_as_possible,
                drop_trailing_section: p.drop_trailing_section,
            };
            let pipeline = PassagesFromParagraphs::new(p.src, p.dst, config, p.splitter);
            pipeline.run()?;
        }

        cli::WikiCorpus::CorpusFromParagraphs(c) => {
            let selection = PageSelection::new(
                c.min_inlinks,
                c.exclude_disambiguation_pages,
                c.exclude_sexual_pages,
                c.exclude_violent_pages,
            );
            let pipeline = CorpusFromParagraphs::new(
                c.src,
                c.dst,
                c.splitter,
                c.html_tags,
                LengthBounds::with_bounds(c.min_sentence_length, c.max_sentence_length),
                c.pageids_file,
                selection,
            );
            pipeline.run()?;
        }

        cli::WikiCorpus::CorpusFromCirrus(c) => {
            let selection = PageSelection::new(
                c.min_inlinks,
                c.exclude_disambiguation_pages,
                c.exclude_sexual_pages,
                c.exclude_violent_pages,
            );
            let pipeline = CorpusFromCirrus::new(
                c.src,
                c.dst,
                c.splitter,
                LengthBounds::with_bounds(c.min_sentence_length, c.max_sentence_length),
                selection,
            );
            pipeline.run()?;
        }

        cli::WikiCorpus::PageidsFromCirrus(c) => {
            let pipeline = PageIdsFromCirrus::new(c.src, c.dst);
            pipeline.run()?;
        }

        cli::WikiCorpus::FilterByPageids(f) => {
            let pipeline = FilterByPageIds::new(f.src, f.pageids, f.dst);
            pipeline.run()?;
        }
    };
    Ok(())
}
