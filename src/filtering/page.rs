//! page-level filtering
use super::Filter;
use crate::records::{CirrusDoc, PageRecord};

/// Page exclusion criteria shared by the corpus builders.
///
/// A page is kept unless one of the enabled criteria rejects it: too few
/// incoming links, disambiguation page, or a sexual/violent content marker.
/// The default selection keeps everything.
///
/// Implemented over both [PageRecord] (page id files) and [CirrusDoc]
/// (cirrussearch dumps, where the markers come from template membership).
#[derive(Debug, Default, Clone)]
pub struct PageSelection {
    min_inlinks: Option<u64>,
    exclude_disambiguation: bool,
    exclude_sexual: bool,
    exclude_violent: bool,
}

impl PageSelection {
    pub fn new(
        min_inlinks: Option<u64>,
        exclude_disambiguation: bool,
        exclude_sexual: bool,
        exclude_violent: bool,
    ) -> Self {
        Self {
            min_inlinks,
            exclude_disambiguation,
            exclude_sexual,
            exclude_violent,
        }
    }
}

impl Filter<&PageRecord> for PageSelection {
    fn detect(&self, page: &PageRecord) -> bool {
        if let Some(min) = self.min_inlinks {
            if page.num_inlinks < min {
                return false;
            }
        }
        if self.exclude_disambiguation && page.is_disambiguation_page {
            return false;
        }
        if self.exclude_sexual && page.is_sexual_page {
            return false;
        }
        if self.exclude_violent && page.is_violent_page {
            return false;
        }

        true
    }
}

impl Filter<&CirrusDoc> for PageSelection {
    fn detect(&self, doc: &CirrusDoc) -> bool {
        if let Some(min) = self.min_inlinks {
            if doc.incoming_links < min {
                return false;
            }
        }
        if self.exclude_disambiguation && doc.is_disambiguation() {
            return false;
        }
        if self.exclude_sexual && doc.is_sexual() {
            return false;
        }
        if self.exclude_violent && doc.is_violent() {
            return false;
        }

        true
    }
}
