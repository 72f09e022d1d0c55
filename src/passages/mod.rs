/*! Passage generation.

Re-chunks a stream of paragraph records into passages: retrieval-sized pieces
of text bounded by [PassageConfig::max_passage_length] characters.

Two orthogonal knobs drive the segmentation:

- the **unit** ([PassageUnit]) decides the granularity of the texts eligible
  for packing into a passage: whole sections, single paragraphs or single
  sentences;
- the **boundary** ([PassageBoundary]) decides the granularity at which
  accumulated units must be flushed, so that a passage never spans it. The
  page title is always a boundary, whatever the setting.

With [PassageConfig::as_long_as_possible], consecutive units of a group are
greedily concatenated up to the length limit; otherwise each unit becomes its
own passage.
!*/
mod config;
mod generator;

pub use config::{PassageBoundary, PassageConfig, PassageUnit};
pub use generator::PassageGenerator;
