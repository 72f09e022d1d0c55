/*! Reading and writing of corpus files.

Every file-based format used by the pipelines lives here:

- [reader::JsonReader] iterates over typed records of a JSONL file,
- [reader::CirrusReader] iterates over `(pageid, document)` pairs of a cirrussearch dump,
- [writer::JsonWriter] and [writer::TextWriter] produce JSONL and plain text files.

Readers and writers transparently handle gzip compression based on the `.gz` file extension.
!*/

pub mod reader;
pub mod writer;

pub use reader::{CirrusReader, JsonReader, PageRecordReader, ParagraphReader};
pub use writer::{JsonWriter, TextWriter};
