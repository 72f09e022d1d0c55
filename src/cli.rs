//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::passages::{PassageBoundary, PassageUnit};
use crate::sentences::SplitterKind;

#[derive(Debug, StructOpt)]
#[structopt(name = "wikicorpus", about = "corpus and passage generation for Wikipedia dumps.")]
/// Holds every command callable by the `wikicorpus` command.
pub enum WikiCorpus {
    #[structopt(about = "Generate passages from a paragraphs file")]
    Passages(Passages),
    #[structopt(about = "Build a sentence corpus from a paragraphs file")]
    CorpusFromParagraphs(ParagraphCorpus),
    #[structopt(about = "Build a sentence corpus from a cirrussearch dump")]
    CorpusFromCirrus(CirrusCorpus),
    #[structopt(about = "Extract page ids and content markers from a cirrussearch dump")]
    PageidsFromCirrus(CirrusPageIds),
    #[structopt(about = "Keep the lines of a JSONL file whose pageid is listed")]
    FilterByPageids(FilterPageIds),
}

#[derive(Debug, StructOpt)]
/// Passages command and parameters.
///
/// ```sh
/// wikicorpus-passages 1.0.0
/// Generate passages from a paragraphs file
///
/// USAGE:
///     wikicorpus passages [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///         --append-title             prefix each passage text with the page title
///         --as-long-as-possible      pack as many units as fit into each passage
///         --drop-trailing-section    discard the section still accumulating at end of input
///     -h, --help                     Prints help information
///     -V, --version                  Prints version information
///
/// OPTIONS:
///         --boundary <boundary>                    [default: section]
///         --max-passage-length <max-passage-length> [default: 1000]
///         --splitter <splitter>                    [default: punctuation]
///         --title-separator <title-separator>      [default:  ]
///         --unit <unit>                            [default: paragraph]
///
/// ARGS:
///     <src>    paragraphs file location
///     <dst>    passages file destination
/// ```
pub struct Passages {
    #[structopt(parse(from_os_str), help = "paragraphs file location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "passages file destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "unit",
        default_value = "paragraph",
        help = "passage unit: section, paragraph or sentence"
    )]
    pub unit: PassageUnit,
    #[structopt(
        long = "boundary",
        default_value = "section",
        help = "passage boundary: title, section or paragraph"
    )]
    pub boundary: PassageBoundary,
    #[structopt(long = "append-title", help = "prefix each passage text with the page title")]
    pub append_title: bool,
    #[structopt(
        long = "title-separator",
        default_value = " ",
        help = "separator between the title prefix and the passage text"
    )]
    pub title_separator: String,
    #[structopt(
        long = "max-passage-length",
        default_value = "1000",
        help = "maximum passage length in characters, title prefix not counted"
    )]
    pub max_passage_length: usize,
    #[structopt(
        long = "as-long-as-possible",
        help = "pack as many units as fit into each passage"
    )]
    pub as_long_as_possible: bool,
    #[structopt(
        long = "drop-trailing-section",
        help = "discard the section still accumulating at end of input"
    )]
    pub drop_trailing_section: bool,
    #[structopt(
        long = "splitter",
        default_value = "punctuation",
        help = "sentence splitter: punctuation or unicode"
    )]
    pub splitter: SplitterKind,
}

#[derive(Debug, StructOpt)]
/// Corpus-from-paragraphs command and parameters.
pub struct ParagraphCorpus {
    #[structopt(parse(from_os_str), help = "paragraphs file location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus file destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "splitter",
        default_value = "punctuation",
        help = "sentence splitter: punctuation or unicode"
    )]
    pub splitter: SplitterKind,
    #[structopt(
        long = "html-tags",
        help = "only keep paragraphs extracted from these HTML tags"
    )]
    pub html_tags: Option<Vec<String>>,
    #[structopt(
        long = "min-sentence-length",
        default_value = "10",
        help = "minimum sentence length in characters"
    )]
    pub min_sentence_length: usize,
    #[structopt(
        long = "max-sentence-length",
        default_value = "1000",
        help = "maximum sentence length in characters"
    )]
    pub max_sentence_length: usize,
    #[structopt(
        parse(from_os_str),
        long = "pageids-file",
        help = "page id file; listed pages failing the criteria are dropped"
    )]
    pub pageids_file: Option<PathBuf>,
    #[structopt(
        long = "min-inlinks",
        help = "drop listed pages with fewer incoming links"
    )]
    pub min_inlinks: Option<u64>,
    #[structopt(long = "exclude-disambiguation-pages", help = "drop disambiguation pages")]
    pub exclude_disambiguation_pages: bool,
    #[structopt(long = "exclude-sexual-pages", help = "drop pages marked as sexual")]
    pub exclude_sexual_pages: bool,
    #[structopt(long = "exclude-violent-pages", help = "drop pages marked as violent")]
    pub exclude_violent_pages: bool,
}

#[derive(Debug, StructOpt)]
/// Corpus-from-cirrussearch command and parameters.
pub struct CirrusCorpus {
    #[structopt(parse(from_os_str), help = "cirrussearch dump location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus file destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "splitter",
        default_value = "punctuation",
        help = "sentence splitter: punctuation or unicode"
    )]
    pub splitter: SplitterKind,
    #[structopt(
        long = "min-sentence-length",
        default_value = "20",
        help = "minimum sentence length in characters"
    )]
    pub min_sentence_length: usize,
    #[structopt(
        long = "max-sentence-length",
        default_value = "1000",
        help = "maximum sentence length in characters"
    )]
    pub max_sentence_length: usize,
    #[structopt(
        long = "min-inlinks",
        help = "drop pages with fewer incoming links"
    )]
    pub min_inlinks: Option<u64>,
    #[structopt(long = "exclude-disambiguation-pages", help = "drop disambiguation pages")]
    pub exclude_disambiguation_pages: bool,
    #[structopt(long = "exclude-sexual-pages", help = "drop pages marked as sexual")]
    pub exclude_sexual_pages: bool,
    #[structopt(long = "exclude-violent-pages", help = "drop pages marked as violent")]
    pub exclude_violent_pages: bool,
}

#[derive(Debug, StructOpt)]
/// Pageids-from-cirrussearch command and parameters.
pub struct CirrusPageIds {
    #[structopt(parse(from_os_str), help = "cirrussearch dump location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "page id file destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Filter-by-pageids command and parameters.
pub struct FilterPageIds {
    #[structopt(parse(from_os_str), help = "JSONL file location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "page id file location")]
    pub pageids: PathBuf,
    #[structopt(parse(from_os_str), help = "filtered file destination")]
    pub dst: PathBuf,
}
