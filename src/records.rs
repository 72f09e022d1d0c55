/*! Record types flowing through the pipelines.

Paragraph and passage records are line-delimited JSON on disk, one record
per line, non-ASCII characters left unescaped. Cirrussearch dumps use the
Elasticsearch bulk format (alternating index/content lines); only the
content side is modeled here, the index line is a wire detail of
[crate::io::reader::CirrusReader].
!*/
use serde::{Deserialize, Serialize};

/// One paragraph of page text, tagged with its page/section identity.
///
/// Records belonging to the same page arrive contiguously in a paragraphs
/// file, and within a page, records of the same section arrive
/// contiguously. Extra fields produced by upstream extractors are ignored,
/// except `html_tag` which the corpus builder can filter on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParagraphRecord {
    pub pageid: u64,
    pub revid: u64,
    pub title: String,
    pub section: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_tag: Option<String>,
}

/// A length-bounded span of text assembled from one or more paragraph or
/// sentence units. `id` is 1-based and strictly increasing over one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassageRecord {
    pub id: usize,
    pub pageid: u64,
    pub revid: u64,
    pub title: String,
    pub section: String,
    pub text: String,
}

/// Per-page metadata row, as produced by `pageids-from-cirrus` and consumed
/// by the corpus builder and `filter-by-pageids`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageRecord {
    pub title: String,
    pub pageid: u64,
    pub revid: u64,
    #[serde(default)]
    pub num_inlinks: u64,
    #[serde(default)]
    pub is_disambiguation_page: bool,
    #[serde(default)]
    pub is_sexual_page: bool,
    #[serde(default)]
    pub is_violent_page: bool,
}

/// Content line of a cirrussearch dump.
///
/// `version` is the revision id. `incoming_links` is absent for pages
/// without inlinks, hence the default.
#[derive(Debug, Clone, Deserialize)]
pub struct CirrusDoc {
    pub title: String,
    pub text: String,
    pub template: Vec<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub incoming_links: u64,
}

impl CirrusDoc {
    pub fn has_template(&self, name: &str) -> bool {
        self.template.iter().any(|t| t == name)
    }

    /// Page is tagged with the disambiguation template.
    pub fn is_disambiguation(&self) -> bool {
        self.has_template("Template:Dmbox")
    }

    /// Page is tagged with the sexual-content template.
    pub fn is_sexual(&self) -> bool {
        self.has_template("Template:性的")
    }

    /// Page is tagged with the violent-content template.
    pub fn is_violent(&self) -> bool {
        self.has_template("Template:暴力的")
    }
}
