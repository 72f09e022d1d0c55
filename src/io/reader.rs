/*! Corpus file readers.

[JsonReader] yields typed records from line-delimited JSON, failing fast on the
first malformed line. [CirrusReader] understands the Elasticsearch bulk layout of
cirrussearch dumps, where each content line is preceded by an index line that
carries the page id.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::records::{CirrusDoc, PageRecord, ParagraphRecord};

/// Opens `src` for buffered reading,
/// decompressing on the fly when the path carries a `.gz` extension.
///
/// Dumps are routinely concatenations of gzip members, hence [MultiGzDecoder].
pub fn open_maybe_gzip(src: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(src)?;
    if is_gzip(src) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Line-delimited JSON reader, generic over the record type it yields.
pub struct JsonReader<T, R>
where
    R: BufRead,
{
    lines: Lines<R>,
    record: PhantomData<T>,
}

/// Reader over paragraph records.
pub type ParagraphReader = JsonReader<ParagraphRecord, Box<dyn BufRead>>;
/// Reader over page records.
pub type PageRecordReader = JsonReader<PageRecord, Box<dyn BufRead>>;

impl<T> JsonReader<T, Box<dyn BufRead>>
where
    T: DeserializeOwned,
{
    /// Builds a reader from a file path, `.gz` aware.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(open_maybe_gzip(src)?))
    }
}

impl<T, R> JsonReader<T, R>
where
    T: DeserializeOwned,
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            record: PhantomData,
        }
    }
}

impl<T, R> Iterator for JsonReader<T, R>
where
    T: DeserializeOwned,
    R: BufRead,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(serde_json::from_str::<T>(&line).map_err(Error::Serde)),
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

/// Index line of a cirrussearch dump.
///
/// Only the page id is of interest, the `_type` and index name are ignored.
#[derive(Debug, Deserialize)]
struct CirrusIndex {
    index: CirrusIndexMeta,
}

#[derive(Debug, Deserialize)]
struct CirrusIndexMeta {
    #[serde(rename = "_id", deserialize_with = "id_from_string_or_number")]
    id: u64,
}

/// Page ids appear both as JSON numbers and as strings depending on the dump vintage.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Reader over cirrussearch dumps.
///
/// Yields `(pageid, document)` pairs by pairing each index line with the
/// content line that follows it.
pub struct CirrusReader<R>
where
    R: BufRead,
{
    lines: Lines<R>,
    pageid: Option<u64>,
}

impl CirrusReader<Box<dyn BufRead>> {
    /// Builds a reader from a file path, `.gz` aware.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(open_maybe_gzip(src)?))
    }
}

impl<R> CirrusReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pageid: None,
        }
    }
}

impl<R> Iterator for CirrusReader<R>
where
    R: BufRead,
{
    type Item = Result<(u64, CirrusDoc), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            if let Ok(header) = serde_json::from_str::<CirrusIndex>(&line) {
                self.pageid = Some(header.index.id);
                continue;
            }

            let doc = match serde_json::from_str::<CirrusDoc>(&line) {
                Ok(doc) => doc,
                Err(e) => return Some(Err(Error::Serde(e))),
            };

            return Some(match self.pageid {
                Some(pageid) => Ok((pageid, doc)),
                None => Err(Error::Custom(
                    "cirrus content line without a preceding index line".to_string(),
                )),
            });
        }
    }
}
