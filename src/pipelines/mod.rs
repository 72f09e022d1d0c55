//! Pipelines.
//!
//! One pipeline per corpus artifact, behind the light [pipeline::Pipeline]
//! trait so that the binary can dispatch subcommands uniformly.
mod corpus_cirrus;
mod corpus_paragraphs;
mod filter_pageids;
mod pageids_cirrus;
mod passages;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use corpus_cirrus::CorpusFromCirrus;
pub use corpus_paragraphs::CorpusFromParagraphs;
pub use filter_pageids::FilterByPageIds;
pub use pageids_cirrus::PageIdsFromCirrus;
pub use passages::PassagesFromParagraphs;
pub use pipeline::Pipeline;
